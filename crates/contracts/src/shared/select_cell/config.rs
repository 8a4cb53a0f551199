use super::style::{StyleError, StyleSet};
use super::stylesheet::Palette;
use serde::Deserialize;
use std::collections::HashMap;

/// Настройки оформления ячейки выбора
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SelectCellSettings {
    /// Палитры по имени темы (`dark`, `light`, `forest`)
    #[serde(default)]
    pub palettes: HashMap<String, Palette>,
    /// Дополнительные CSS классы по имени стиля
    #[serde(default)]
    pub classes: HashMap<String, String>,
}

/// Настройки по умолчанию, встроенные в сборку
pub const DEFAULT_SETTINGS: &str = r##"
[palettes.dark]
backgroundPaper = "#1e1e1e"

[palettes.light]
backgroundPaper = "#ffffff"

[palettes.forest]
backgroundPaper = "#1f2b22"

[classes]
"##;

impl SelectCellSettings {
    /// Разбор настроек из TOML
    pub fn from_toml(contents: &str) -> Result<Self, StyleError> {
        Ok(toml::from_str(contents)?)
    }

    /// Встроенные настройки по умолчанию
    pub fn embedded() -> Result<Self, StyleError> {
        Self::from_toml(DEFAULT_SETTINGS)
    }

    /// Палитра темы (по умолчанию, если тема не описана)
    pub fn palette(&self, theme: &str) -> Palette {
        self.palettes.get(theme).cloned().unwrap_or_default()
    }

    /// Стили по умолчанию с добавленными пользовательскими классами
    pub fn style_set(&self) -> Result<StyleSet, StyleError> {
        StyleSet::default().with_overrides(&self.classes)
    }
}
