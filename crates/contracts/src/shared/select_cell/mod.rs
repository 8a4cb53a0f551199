//! Ячейка выбора строки таблицы: чекбокс выбора и кнопка раскрытия строки.

pub mod config;
pub mod layout;
pub mod model;
pub mod style;
pub mod stylesheet;

pub use config::{SelectCellSettings, DEFAULT_SETTINGS};
pub use layout::{CheckboxLayout, ClassList, ExpandButtonLayout, SelectCellLayout};
pub use model::{CellConfig, FixedHeaderOptions, RowState};
pub use style::{StyleError, StyleName, StyleSet};
pub use stylesheet::{render_stylesheet, Palette};
