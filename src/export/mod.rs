//! Print path for Slovo
//!
//! There is no native print-dialog widget in the GUI stack, so printing
//! is delegated to the OS: the formatted document is rendered to a
//! standalone HTML file and handed to the system default handler, whose
//! viewer owns printer selection.

mod html;

pub use html::{print_preview, render_html};
