//! Вычисление содержимого и CSS классов ячейки выбора
//!
//! Всё здесь чистые функции: одинаковые настройки, состояние строки и стили
//! всегда дают одинаковый [`SelectCellLayout`]. Компонент во фронтенде только
//! превращает его в DOM. Состояние `checked` в раскладку не входит, поэтому
//! переключение чекбокса не меняет её.

use super::model::{CellConfig, RowState};
use super::style::{StyleName, StyleSet};
use crate::enums::SelectableMode;

/// Упорядоченный список активных CSS классов
///
/// Пустые классы и повторы не добавляются, в атрибуте `class`
/// не бывает лишних пробелов.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, class: &str) {
        for part in class.split_whitespace() {
            if !self.classes.iter().any(|c| c == part) {
                self.classes.push(part.to_string());
            }
        }
    }

    /// Добавляет `class` только при `active == true`
    pub fn with(mut self, class: &str, active: bool) -> Self {
        if active {
            self.push(class);
        }
        self
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl std::fmt::Display for ClassList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.classes.join(" "))
    }
}

/// Кнопка раскрытия строки
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandButtonLayout {
    pub button_class: ClassList,
    pub icon_class: ClassList,
    /// В заголовке раскрывать нечего
    pub disabled: bool,
}

/// Чекбокс выбора
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxLayout {
    pub disabled: bool,
    pub root_class: ClassList,
    pub icon_class: ClassList,
    pub checked_icon_class: ClassList,
    pub indeterminate_icon_class: ClassList,
}

impl CheckboxLayout {
    /// Класс значка для текущего состояния; частичный выбор важнее `checked`
    pub fn icon_class_for(&self, checked: bool, indeterminate: bool) -> &ClassList {
        if indeterminate {
            &self.indeterminate_icon_class
        } else if checked {
            &self.checked_icon_class
        } else {
            &self.icon_class
        }
    }
}

/// Полностью вычисленная ячейка выбора
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectCellLayout {
    pub cell_class: ClassList,
    pub expand: Option<ExpandButtonLayout>,
    pub checkbox: Option<CheckboxLayout>,
}

impl SelectCellLayout {
    /// `None`, если выключены и раскрытие, и выбор
    pub fn resolve(config: &CellConfig, row: &RowState, styles: &StyleSet) -> Option<Self> {
        if config.is_empty() {
            return None;
        }

        let expand = config
            .expandable_on
            .then(|| expand_layout(config, row, styles));

        let checkbox = (config.selectable_on.is_enabled()
            && header_checkbox_visible(config.selectable_on, row))
        .then(|| checkbox_layout(row, styles));

        Some(Self {
            cell_class: cell_class(config, row, styles),
            expand,
            checkbox,
        })
    }
}

/// Классы закрепления (sticky). `fixed_header_options` важнее устаревшего флага
pub fn fixed_header_class(config: &CellConfig, styles: &StyleSet) -> ClassList {
    match config.fixed_header_options {
        Some(options) => ClassList::new()
            .with(styles.class(StyleName::FixedHeaderCommon), true)
            .with(styles.class(StyleName::FixedHeaderXAxis), options.x_axis)
            .with(styles.class(StyleName::FixedHeaderYAxis), options.y_axis),
        None => ClassList::new().with(styles.class(StyleName::FixedHeader), config.fixed_header),
    }
}

fn cell_class(config: &CellConfig, row: &RowState, styles: &StyleSet) -> ClassList {
    let mut class = ClassList::new().with(styles.class(StyleName::Root), true);
    class.push(&fixed_header_class(config, styles).to_string());
    class.with(styles.class(StyleName::HeaderCell), row.is_header_cell)
}

fn expand_layout(config: &CellConfig, row: &RowState, styles: &StyleSet) -> ExpandButtonLayout {
    ExpandButtonLayout {
        button_class: ClassList::new()
            .with(styles.class(StyleName::ExpandDisabled), config.hide_expand_button),
        icon_class: ClassList::new()
            .with(styles.class(StyleName::Icon), true)
            .with(styles.class(StyleName::Hide), row.is_header_cell)
            .with(styles.class(StyleName::Expanded), row.is_row_expanded),
        disabled: row.is_header_cell,
    }
}

/// В заголовке "выбрать все" есть только при множественном выборе,
/// если его явно не отключили
pub fn header_checkbox_visible(mode: SelectableMode, row: &RowState) -> bool {
    !(row.is_header_cell
        && (mode != SelectableMode::Multiple || row.selectable_rows_header == Some(false)))
}

fn checkbox_layout(row: &RowState, styles: &StyleSet) -> CheckboxLayout {
    let disabled = !row.is_row_selectable;
    let icon = styles.class(StyleName::CheckboxIcon);
    CheckboxLayout {
        disabled,
        root_class: ClassList::new().with(styles.class(StyleName::CheckboxDisabled), disabled),
        icon_class: ClassList::new().with(icon, true),
        checked_icon_class: ClassList::new()
            .with(icon, true)
            .with(styles.class(StyleName::CheckboxCheckedIcon), true),
        indeterminate_icon_class: ClassList::new()
            .with(icon, true)
            .with(styles.class(StyleName::CheckboxIndeterminateIcon), true),
    }
}
