//! Семантические имена стилей ячейки выбора и их CSS классы

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// Префикс генерируемых классов
pub const CLASS_PREFIX: &str = "MUIDataTableSelectCell";

/// Ошибки конфигурации стилей ячейки выбора
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("Unknown style name: {0}")]
    UnknownStyle(String),

    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Имена стилей ячейки выбора
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleName {
    Root,
    FixedHeader,
    FixedHeaderCommon,
    FixedHeaderXAxis,
    FixedHeaderYAxis,
    Icon,
    Expanded,
    Hide,
    HeaderCell,
    ExpandDisabled,
    CheckboxDisabled,
    CheckboxIcon,
    CheckboxCheckedIcon,
    CheckboxIndeterminateIcon,
}

impl StyleName {
    /// Имя стиля в классах и ключах конфигурации
    pub fn code(&self) -> &'static str {
        match self {
            StyleName::Root => "root",
            StyleName::FixedHeader => "fixedHeader",
            StyleName::FixedHeaderCommon => "fixedHeaderCommon",
            StyleName::FixedHeaderXAxis => "fixedHeaderXAxis",
            StyleName::FixedHeaderYAxis => "fixedHeaderYAxis",
            StyleName::Icon => "icon",
            StyleName::Expanded => "expanded",
            StyleName::Hide => "hide",
            StyleName::HeaderCell => "headerCell",
            StyleName::ExpandDisabled => "expandDisabled",
            StyleName::CheckboxDisabled => "checkboxDisabled",
            StyleName::CheckboxIcon => "checkboxIcon",
            StyleName::CheckboxCheckedIcon => "checkboxCheckedIcon",
            StyleName::CheckboxIndeterminateIcon => "checkboxIndeterminateIcon",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|name| name.code() == code)
    }

    pub fn all() -> [StyleName; 14] {
        [
            StyleName::Root,
            StyleName::FixedHeader,
            StyleName::FixedHeaderCommon,
            StyleName::FixedHeaderXAxis,
            StyleName::FixedHeaderYAxis,
            StyleName::Icon,
            StyleName::Expanded,
            StyleName::Hide,
            StyleName::HeaderCell,
            StyleName::ExpandDisabled,
            StyleName::CheckboxDisabled,
            StyleName::CheckboxIcon,
            StyleName::CheckboxCheckedIcon,
            StyleName::CheckboxIndeterminateIcon,
        ]
    }

    /// Класс по умолчанию, например `MUIDataTableSelectCell-headerCell`
    pub fn default_class(&self) -> String {
        format!("{}-{}", CLASS_PREFIX, self.code())
    }
}

/// Соответствие имени стиля и CSS класса
///
/// Изначально у каждого имени свой сгенерированный класс.
/// Пустая строка означает "без класса".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSet {
    classes: BTreeMap<StyleName, String>,
}

impl Default for StyleSet {
    fn default() -> Self {
        let classes = StyleName::all()
            .into_iter()
            .map(|name| (name, name.default_class()))
            .collect();
        Self { classes }
    }
}

impl StyleSet {
    /// Класс для имени стиля (пустой, если класс убран)
    pub fn class(&self, name: StyleName) -> &str {
        self.classes.get(&name).map(String::as_str).unwrap_or("")
    }

    /// Заменяет класс целиком
    pub fn with_class(mut self, name: StyleName, class: impl Into<String>) -> Self {
        self.classes.insert(name, class.into());
        self
    }

    /// Добавляет пользовательские классы к сгенерированным по коду стиля
    /// (`"headerCell"`, `"icon"`, ...). Оба класса остаются в силе.
    pub fn with_overrides(mut self, overrides: &HashMap<String, String>) -> Result<Self, StyleError> {
        for (code, extra) in overrides {
            let name = StyleName::from_code(code)
                .ok_or_else(|| StyleError::UnknownStyle(code.clone()))?;
            let extra = extra.trim();
            if extra.is_empty() {
                continue;
            }
            let class = self.classes.entry(name).or_default();
            if class.is_empty() {
                *class = extra.to_string();
            } else {
                class.push(' ');
                class.push_str(extra);
            }
        }
        Ok(self)
    }

    /// Пары `(имя, класс)` с непустым классом
    pub fn iter(&self) -> impl Iterator<Item = (StyleName, &str)> {
        self.classes
            .iter()
            .filter(|(_, class)| !class.is_empty())
            .map(|(name, class)| (*name, class.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_classes() {
        let styles = StyleSet::default();
        assert_eq!(styles.class(StyleName::Root), "MUIDataTableSelectCell-root");
        assert_eq!(
            styles.class(StyleName::FixedHeaderXAxis),
            "MUIDataTableSelectCell-fixedHeaderXAxis"
        );
        assert_eq!(styles.iter().count(), 14);
    }

    #[test]
    fn test_overrides_extend_generated_class() {
        let mut overrides = HashMap::new();
        overrides.insert("headerCell".to_string(), "my-header".to_string());
        overrides.insert("root".to_string(), "  ".to_string());

        let styles = StyleSet::default().with_overrides(&overrides).unwrap();
        assert_eq!(
            styles.class(StyleName::HeaderCell),
            "MUIDataTableSelectCell-headerCell my-header"
        );
        assert_eq!(styles.class(StyleName::Root), "MUIDataTableSelectCell-root");
    }

    #[test]
    fn test_override_of_removed_class() {
        let mut overrides = HashMap::new();
        overrides.insert("hide".to_string(), "invisible".to_string());

        let styles = StyleSet::default()
            .with_class(StyleName::Hide, "")
            .with_overrides(&overrides)
            .unwrap();
        assert_eq!(styles.class(StyleName::Hide), "invisible");
    }

    #[test]
    fn test_unknown_override_is_error() {
        let mut overrides = HashMap::new();
        overrides.insert("footerCell".to_string(), "x".to_string());

        let err = StyleSet::default().with_overrides(&overrides).unwrap_err();
        assert!(matches!(err, StyleError::UnknownStyle(ref code) if code == "footerCell"));
        assert_eq!(err.to_string(), "Unknown style name: footerCell");
    }

    #[test]
    fn test_style_name_codes() {
        for name in StyleName::all() {
            assert_eq!(StyleName::from_code(name.code()), Some(name));
        }
        let name: StyleName = serde_json::from_str("\"checkboxCheckedIcon\"").unwrap();
        assert_eq!(name, StyleName::CheckboxCheckedIcon);
    }
}
