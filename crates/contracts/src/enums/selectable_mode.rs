use serde::{Deserialize, Serialize};

/// Режим выбора строк таблицы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectableMode {
    #[default]
    None,
    Single,
    Multiple,
}

impl SelectableMode {
    /// Получить код режима
    pub fn code(&self) -> &'static str {
        match self {
            SelectableMode::None => "none",
            SelectableMode::Single => "single",
            SelectableMode::Multiple => "multiple",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            SelectableMode::None => "Без выбора",
            SelectableMode::Single => "Одна строка",
            SelectableMode::Multiple => "Несколько строк",
        }
    }

    /// Получить все режимы
    pub fn all() -> Vec<SelectableMode> {
        vec![
            SelectableMode::None,
            SelectableMode::Single,
            SelectableMode::Multiple,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "none" => Some(SelectableMode::None),
            "single" => Some(SelectableMode::Single),
            "multiple" => Some(SelectableMode::Multiple),
            _ => None,
        }
    }

    /// Включён ли выбор строк вообще
    pub fn is_enabled(&self) -> bool {
        !matches!(self, SelectableMode::None)
    }
}

impl std::fmt::Display for SelectableMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_roundtrip() {
        for mode in SelectableMode::all() {
            assert_eq!(SelectableMode::from_code(mode.code()), Some(mode));
        }
        assert_eq!(SelectableMode::from_code("checkbox"), None);
    }

    #[test]
    fn test_serde_lowercase() {
        let mode: SelectableMode = serde_json::from_str("\"multiple\"").unwrap();
        assert_eq!(mode, SelectableMode::Multiple);
        assert_eq!(serde_json::to_string(&SelectableMode::None).unwrap(), "\"none\"");
    }
}
