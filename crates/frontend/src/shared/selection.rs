//! Состояние выбора и раскрытия строк таблицы

use contracts::enums::SelectableMode;
use std::collections::HashSet;

/// Состояние чекбокса "выбрать все" по выбранным строкам
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheckState {
    Unchecked,
    Checked,
    Indeterminate,
}

impl HeaderCheckState {
    /// Все выбираемые строки выбраны
    pub fn is_checked(&self) -> bool {
        matches!(self, HeaderCheckState::Checked)
    }

    /// Выбрана только часть строк
    pub fn is_indeterminate(&self) -> bool {
        matches!(self, HeaderCheckState::Indeterminate)
    }
}

/// Вычисляет состояние чекбокса в заголовке по выбираемым строкам
pub fn header_check_state<'a>(
    selectable_ids: impl IntoIterator<Item = &'a str>,
    selected: &HashSet<String>,
) -> HeaderCheckState {
    let mut total = 0;
    let mut selected_count = 0;
    for id in selectable_ids {
        total += 1;
        if selected.contains(id) {
            selected_count += 1;
        }
    }

    if total == 0 || selected_count == 0 {
        HeaderCheckState::Unchecked
    } else if selected_count == total {
        HeaderCheckState::Checked
    } else {
        HeaderCheckState::Indeterminate
    }
}

/// Применяет изменение чекбокса строки с учётом режима выбора
pub fn toggle_selection(selected: &mut HashSet<String>, id: &str, checked: bool, mode: SelectableMode) {
    match (mode, checked) {
        (SelectableMode::None, _) => selected.clear(),
        (SelectableMode::Single, true) => {
            selected.clear();
            selected.insert(id.to_string());
        }
        (SelectableMode::Multiple, true) => {
            selected.insert(id.to_string());
        }
        (_, false) => {
            selected.remove(id);
        }
    }
}

/// Выбрать все / снять все (только для множественного выбора)
pub fn select_all<'a>(
    selected: &mut HashSet<String>,
    selectable_ids: impl IntoIterator<Item = &'a str>,
    check_all: bool,
) {
    selected.clear();
    if check_all {
        selected.extend(selectable_ids.into_iter().map(str::to_string));
    }
}

/// Раскрыть/свернуть строку
pub fn toggle_expanded(expanded: &mut HashSet<String>, id: &str) {
    if !expanded.remove(id) {
        expanded.insert(id.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn test_header_check_state() {
        let ids = ["a", "b", "c"];
        assert_eq!(header_check_state(ids, &set(&[])), HeaderCheckState::Unchecked);
        assert_eq!(header_check_state(ids, &set(&["b"])), HeaderCheckState::Indeterminate);
        assert_eq!(header_check_state(ids, &set(&["a", "b", "c"])), HeaderCheckState::Checked);
        assert_eq!(header_check_state([], &set(&["a"])), HeaderCheckState::Unchecked);
    }

    #[test]
    fn test_partial_selection_is_indeterminate() {
        // строка "3" не выбирается и в расчёт не входит
        let state = header_check_state(["1", "2", "4"], &set(&["2"]));
        assert!(state.is_indeterminate());
        assert!(!state.is_checked());

        let state = header_check_state(["1", "2", "4"], &set(&["1", "2", "4"]));
        assert!(state.is_checked());
        assert!(!state.is_indeterminate());

        let state = header_check_state(["1", "2", "4"], &set(&[]));
        assert!(!state.is_checked());
        assert!(!state.is_indeterminate());
    }

    #[test]
    fn test_single_mode_keeps_one_row() {
        let mut selected = set(&["a"]);
        toggle_selection(&mut selected, "b", true, SelectableMode::Single);
        assert_eq!(selected, set(&["b"]));

        toggle_selection(&mut selected, "b", false, SelectableMode::Single);
        assert!(selected.is_empty());
    }

    #[test]
    fn test_multiple_mode_accumulates() {
        let mut selected = HashSet::new();
        toggle_selection(&mut selected, "a", true, SelectableMode::Multiple);
        toggle_selection(&mut selected, "b", true, SelectableMode::Multiple);
        toggle_selection(&mut selected, "a", false, SelectableMode::Multiple);
        assert_eq!(selected, set(&["b"]));
    }

    #[test]
    fn test_select_all_and_clear() {
        let mut selected = set(&["x"]);
        select_all(&mut selected, ["a", "b"], true);
        assert_eq!(selected, set(&["a", "b"]));

        select_all(&mut selected, ["a", "b"], false);
        assert!(selected.is_empty());
    }

    #[test]
    fn test_toggle_expanded() {
        let mut expanded = HashSet::new();
        toggle_expanded(&mut expanded, "a");
        assert!(expanded.contains("a"));
        toggle_expanded(&mut expanded, "a");
        assert!(expanded.is_empty());
    }
}
