//! UI components for Slovo
//!
//! The toolbar, the template gallery, the editor surface, the modal
//! dialogs, and icon loading helpers.

mod dialogs;
mod editor;
mod gallery;
mod icons;
mod toolbar;

pub use dialogs::{ColorDialog, DialogOutcome, PrintDialog};
pub use editor::{EditorOutput, EditorWidget};
pub use gallery::Gallery;
pub use icons::get_app_icon;
pub use toolbar::{Toolbar, ToolbarAction};
