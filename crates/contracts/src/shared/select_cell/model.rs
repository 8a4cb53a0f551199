use crate::enums::SelectableMode;
use serde::{Deserialize, Serialize};

/// Закрепление заголовка по осям
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FixedHeaderOptions {
    pub x_axis: bool,
    pub y_axis: bool,
}

/// Настройки ячейки выбора, общие для всей таблицы
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CellConfig {
    pub checked: bool,
    /// Устаревший флаг, игнорируется при наличии `fixed_header_options`
    pub fixed_header: bool,
    pub fixed_header_options: Option<FixedHeaderOptions>,
    pub expandable_on: bool,
    pub selectable_on: SelectableMode,
    /// Помечает кнопку раскрытия как недоступную, не убирая её
    pub hide_expand_button: bool,
}

impl CellConfig {
    /// Ячейка не отображается, если нет ни раскрытия, ни выбора
    pub fn is_empty(&self) -> bool {
        !self.expandable_on && !self.selectable_on.is_enabled()
    }
}

/// Состояние строки на момент отрисовки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RowState {
    pub is_header_cell: bool,
    pub is_row_expanded: bool,
    pub is_row_selectable: bool,
    /// `Some(false)` явно отключает чекбокс "выбрать все" в заголовке
    pub selectable_rows_header: Option<bool>,
}

impl RowState {
    pub fn header() -> Self {
        Self {
            is_header_cell: true,
            is_row_selectable: true,
            ..Self::default()
        }
    }

    pub fn row(is_row_expanded: bool, is_row_selectable: bool) -> Self {
        Self {
            is_row_expanded,
            is_row_selectable,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "expandableOn": true,
            "selectableOn": "multiple",
            "fixedHeaderOptions": { "xAxis": true }
        }"#;
        let config: CellConfig = serde_json::from_str(json).unwrap();
        assert!(config.expandable_on);
        assert_eq!(config.selectable_on, SelectableMode::Multiple);
        assert_eq!(
            config.fixed_header_options,
            Some(FixedHeaderOptions { x_axis: true, y_axis: false })
        );
        assert!(!config.checked);
        assert!(!config.fixed_header);
    }

    #[test]
    fn test_defaults_render_nothing() {
        assert!(CellConfig::default().is_empty());
        assert!(!RowState::default().is_row_selectable);
        assert_eq!(RowState::default().selectable_rows_header, None);
    }
}
