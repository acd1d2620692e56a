//! Literal template bodies
//!
//! The fixed document skeletons materialized into `templates/` on first
//! run. Stored pre-trimmed; the store writes them to disk byte-for-byte.

pub const LETTER: &str = "\
ПИСЬМО

Кому: _____________
Дата: _____________

Уважаемый(ая) _____________,

[Текст письма]

С уважением,
[Ваше имя]
[Должность]
[Контактная информация]";

pub const RESUME: &str = "\
РЕЗЮМЕ

Личные данные:
ФИО:
Дата рождения:
Адрес:
Телефон:
Email:

Образование:
• [Учебное заведение] - [Годы обучения]
  [Специальность/Степень]
•

Опыт работы:
• [Компания] - [Годы работы]
  [Должность]
  [Основные обязанности и достижения]
•

Навыки:
• [Профессиональные навыки]
• [Технические навыки]
• [Языки]
• [Сертификаты]

Дополнительная информация:
• Хобби и интересы
• Рекомендации";

pub const REPORT: &str = "\
ОТЧЕТ

Тема: _____________
Дата: _____________
Подготовил: _____________

1. Введение
• Цель отчета
• Методология
• Краткое содержание

2. Основная часть
• Анализ данных
• Результаты исследования
• Ключевые находки

3. Выводы
• Основные заключения
• Интерпретация результатов

4. Рекомендации
• Предложения по улучшению
• План действий";

pub const CALENDAR: &str = "\
КАЛЕНДАРЬ СОБЫТИЙ

Дата: _____________
Время: _____________

СОБЫТИЕ:
Название: _____________
Место проведения: _____________
Участники: _____________

ДЕТАЛИ:
• Повестка дня
• Необходимые материалы
• Дополнительная информация

Примечания:
_____________";

pub const BLANK: &str = "\
БЛАНК

[Название организации]
[Адрес]
[Контактная информация]

Исх. № _____________
От _____________

ЗАГОЛОВОК ДОКУМЕНТА
_____________________

Содержание:
_____________________________________________
_____________________________________________
_____________________________________________

Подпись: _____________
Дата: _____________";

pub const LIST: &str = "\
СПИСОК

Название: _____________
Дата создания: _____________

□ Пункт 1
  ◦ Подпункт 1.1
  ◦ Подпункт 1.2

□ Пункт 2
  ◦ Подпункт 2.1
  ◦ Подпункт 2.2

□ Пункт 3
  ◦ Подпункт 3.1
  ◦ Подпункт 3.2

Примечания:
_____________";

pub const NOTE: &str = "\
ЗАМЕТКА

Дата: _____________
Тема: _____________

Важность: □ Высокая □ Средняя □ Низкая

Содержание:
_____________________________________________
_____________________________________________
_____________________________________________

Задачи:
□ _____________
□ _____________
□ _____________

Напоминание: _____________";

pub const PROTOCOL: &str = "\
ПРОТОКОЛ

№ _____________
Дата: _____________
Место: _____________

ПРИСУТСТВОВАЛИ:
1. _____________
2. _____________
3. _____________

ПОВЕСТКА ДНЯ:
1. _____________
2. _____________
3. _____________

СЛУШАЛИ:
1. _____________
   Решили: _____________

2. _____________
   Решили: _____________

Председатель: _____________ /_____________/
Секретарь: _____________ /_____________/";
