//! CSS правила для стилей ячейки выбора

use super::style::{StyleName, StyleSet};
use serde::{Deserialize, Serialize};

const CHECKMARK_SVG: &str = "url(\"data:image/svg+xml;charset=utf-8,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='2 3 15 15'%3E%3Cpath fill-rule='evenodd' clip-rule='evenodd' d='M12 5c-.28 0-.53.11-.71.29L7 9.59l-2.29-2.3a1.003 1.003 0 00-1.42 1.42l3 3c.18.18.43.29.71.29s.53-.11.71-.29l5-5A1.003 1.003 0 0012 5z' fill='%23fff'/%3E%3C/svg%3E\")";

/// Токены темы, от которых зависит ячейка выбора
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub background_paper: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background_paper: "#fff".to_string(),
        }
    }
}

/// Одно CSS правило. `&` в селекторе заменяется классом стиля
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    pub selector: &'static str,
    pub declarations: Vec<(&'static str, String)>,
}

impl StyleRule {
    fn new(selector: &'static str, declarations: &[(&'static str, &str)]) -> Self {
        Self {
            selector,
            declarations: declarations
                .iter()
                .map(|(property, value)| (*property, value.to_string()))
                .collect(),
        }
    }

    fn render(&self, class: &str) -> String {
        let selector = self.selector.replace('&', &format!(".{}", class));
        let body = self
            .declarations
            .iter()
            .map(|(property, value)| format!("{}: {};", property, value))
            .collect::<Vec<_>>()
            .join(" ");
        format!("{} {{ {} }}", selector, body)
    }
}

/// Правила для имени стиля. У маркеров (`root`, `expandDisabled`) правил нет
pub fn style_rules(name: StyleName, palette: &Palette) -> Vec<StyleRule> {
    let paper = palette.background_paper.as_str();
    match name {
        StyleName::Root | StyleName::ExpandDisabled => vec![],
        StyleName::FixedHeader => vec![StyleRule::new(
            "&",
            &[("position", "sticky"), ("top", "0px"), ("left", "0px"), ("z-index", "100")],
        )],
        StyleName::FixedHeaderCommon => vec![StyleRule::new(
            "&",
            &[("position", "sticky"), ("z-index", "100"), ("background-color", paper)],
        )],
        StyleName::FixedHeaderXAxis => vec![StyleRule::new("&", &[("left", "0px")])],
        StyleName::FixedHeaderYAxis => vec![StyleRule::new("&", &[("top", "0px")])],
        StyleName::Icon => vec![StyleRule::new(
            "&",
            &[("cursor", "pointer"), ("transition", "transform 0.25s")],
        )],
        StyleName::Expanded => vec![StyleRule::new("&", &[("transform", "rotate(90deg)")])],
        StyleName::Hide => vec![StyleRule::new("&", &[("visibility", "hidden")])],
        StyleName::HeaderCell => vec![StyleRule::new(
            "&",
            &[("z-index", "110"), ("background-color", paper)],
        )],
        StyleName::CheckboxDisabled => {
            vec![StyleRule::new("& span", &[("background-color", "#ddd")])]
        }
        StyleName::CheckboxIcon => vec![StyleRule::new(
            "&",
            &[
                ("display", "inline-block"),
                ("box-sizing", "border-box"),
                ("border-radius", "1px"),
                ("width", "18px"),
                ("height", "18px"),
                ("border", "2px solid #BEBEBE"),
            ],
        )],
        StyleName::CheckboxCheckedIcon => vec![
            StyleRule::new(
                "&",
                &[
                    ("background-color", "#000000"),
                    (
                        "background-image",
                        "linear-gradient(180deg,hsla(0,0%,100%,.1),hsla(0,0%,100%,0))",
                    ),
                    ("border", "2px solid #000000"),
                ],
            ),
            StyleRule::new(
                "&:before",
                &[
                    ("display", "block"),
                    ("width", "18px"),
                    ("height", "18px"),
                    ("background-image", CHECKMARK_SVG),
                    ("content", "\"\""),
                ],
            ),
            StyleRule::new("input:hover ~ &", &[("background-color", "#106ba3")]),
        ],
        StyleName::CheckboxIndeterminateIcon => vec![
            StyleRule::new(
                "&",
                &[
                    ("position", "relative"),
                    ("background-color", "#000000"),
                    ("border", "2px solid #000000"),
                ],
            ),
            StyleRule::new(
                "&:before",
                &[
                    ("position", "absolute"),
                    ("top", "5px"),
                    ("left", "2px"),
                    ("width", "10px"),
                    ("height", "2px"),
                    ("background-color", "#fff"),
                    ("content", "\"\""),
                ],
            ),
            StyleRule::new("input:hover ~ &", &[("background-color", "#106ba3")]),
        ],
    }
}

/// Полная таблица стилей, одно правило на строку
pub fn render_stylesheet(styles: &StyleSet, palette: &Palette) -> String {
    let mut lines = Vec::new();
    for (name, class) in styles.iter() {
        // при нескольких классах стилизуется первый (сгенерированный)
        let Some(class) = class.split_whitespace().next() else {
            continue;
        };
        for rule in style_rules(name, palette) {
            lines.push(rule.render(class));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_cell_uses_palette() {
        let palette = Palette {
            background_paper: "#1e1e1e".to_string(),
        };
        let css = render_stylesheet(&StyleSet::default(), &palette);
        assert!(css.contains(
            ".MUIDataTableSelectCell-headerCell { z-index: 110; background-color: #1e1e1e; }"
        ));
        assert!(css.contains(
            ".MUIDataTableSelectCell-fixedHeaderCommon { position: sticky; z-index: 100; background-color: #1e1e1e; }"
        ));
    }

    #[test]
    fn test_nested_selectors() {
        let css = render_stylesheet(&StyleSet::default(), &Palette::default());
        assert!(css.contains(".MUIDataTableSelectCell-checkboxDisabled span { background-color: #ddd; }"));
        assert!(css.contains("input:hover ~ .MUIDataTableSelectCell-checkboxCheckedIcon { background-color: #106ba3; }"));
        assert!(css.contains(".MUIDataTableSelectCell-checkboxCheckedIcon:before { display: block;"));
        assert!(css.contains(".MUIDataTableSelectCell-expanded { transform: rotate(90deg); }"));
    }

    #[test]
    fn test_indeterminate_icon_has_dash() {
        let css = render_stylesheet(&StyleSet::default(), &Palette::default());
        assert!(css.contains(
            ".MUIDataTableSelectCell-checkboxIndeterminateIcon:before { position: absolute;"
        ));
        assert!(css.contains(
            "input:hover ~ .MUIDataTableSelectCell-checkboxIndeterminateIcon { background-color: #106ba3; }"
        ));
    }

    #[test]
    fn test_marker_styles_have_no_rules() {
        assert!(style_rules(StyleName::Root, &Palette::default()).is_empty());
        assert!(style_rules(StyleName::ExpandDisabled, &Palette::default()).is_empty());

        let css = render_stylesheet(&StyleSet::default(), &Palette::default());
        assert!(!css.contains("MUIDataTableSelectCell-root"));
    }

    #[test]
    fn test_overridden_class_is_styled() {
        let styles = StyleSet::default()
            .with_class(StyleName::Hide, "invisible extra")
            .with_class(StyleName::Icon, "");
        let css = render_stylesheet(&styles, &Palette::default());
        assert!(css.contains(".invisible { visibility: hidden; }"));
        assert!(!css.contains("transition"));
    }
}
