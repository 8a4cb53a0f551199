use contracts::shared::select_cell::{render_stylesheet, Palette, StyleSet};
use leptos::prelude::*;

/// Встраивает CSS стилей ячейки выбора в документ
///
/// Палитра передаётся явно, стили пересобираются при смене темы.
///
/// # Пример использования
/// ```ignore
/// let theme = use_theme();
/// <SelectCellStyles styles=theme.styles() palette=theme.palette() />
/// ```
#[component]
pub fn SelectCellStyles(
    /// CSS классы стилей (по умолчанию `MUIDataTableSelectCell-*`)
    #[prop(optional, into)]
    styles: MaybeProp<StyleSet>,
    /// Палитра текущей темы
    #[prop(into)]
    palette: Signal<Palette>,
) -> impl IntoView {
    let css = move || {
        let styles = styles.get().unwrap_or_default();
        palette.with(|palette| render_stylesheet(&styles, palette))
    };

    view! { <style>{css}</style> }
}
