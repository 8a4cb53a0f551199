//! Ячейка выбора строки: кнопка раскрытия и чекбокс выбора
//!
//! # Примеры
//!
//! ```ignore
//! <SelectCell
//!     config=Signal::derive(move || CellConfig {
//!         checked: selected.get().contains(&id),
//!         expandable_on: true,
//!         selectable_on: SelectableMode::Multiple,
//!         ..CellConfig::default()
//!     })
//!     row=Signal::derive(move || RowState::row(expanded.get().contains(&id), true))
//!     on_expand=Callback::new(move |_| toggle_expand(id.clone()))
//!     on_change=Callback::new(move |checked| toggle_select(id.clone(), checked))
//! />
//! ```

use crate::shared::components::ui::SelectCheckbox;
use crate::shared::icons::icon;
use contracts::shared::select_cell::{CellConfig, RowState, SelectCellLayout, StyleSet};
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use thaw::*;

/// Ячейка выбора строки таблицы
///
/// Автоматически:
/// - Ничего не рендерит, если выключены и раскрытие, и выбор
/// - Закрепляет ячейку при фиксированном заголовке (sticky)
/// - Скрывает чекбокс в заголовке, если это не множественный выбор
/// - Останавливает propagation клика (чтобы не вызывать клик на строке)
#[component]
pub fn SelectCell(
    /// Настройки ячейки (общие для таблицы + checked)
    #[prop(into)]
    config: Signal<CellConfig>,

    /// Состояние строки
    #[prop(into)]
    row: Signal<RowState>,

    /// CSS классы стилей (по умолчанию `MUIDataTableSelectCell-*`)
    #[prop(optional, into)]
    styles: MaybeProp<StyleSet>,

    /// Callback при клике на кнопку раскрытия
    #[prop(optional)]
    on_expand: Option<Callback<MouseEvent>>,

    /// Частичный выбор (для "выбрать все" в заголовке)
    #[prop(optional, into)]
    indeterminate: MaybeProp<bool>,

    /// Callback при изменении чекбокса
    #[prop(optional)]
    on_change: Option<Callback<bool>>,

    /// Имя поля чекбокса
    #[prop(optional, into)]
    name: MaybeProp<String>,

    /// ID чекбокса
    #[prop(optional, into)]
    id: MaybeProp<String>,

    /// Подпись чекбокса для экранных дикторов
    #[prop(optional, into)]
    aria_label: MaybeProp<String>,
) -> impl IntoView {
    let checked = Signal::derive(move || config.with(|c| c.checked));

    // Раскладка не зависит от checked: Memo не перестраивает ячейку при клике
    let layout = Memo::new(move |_| {
        let styles = styles.get().unwrap_or_default();
        config.with(|config| row.with(|row| SelectCellLayout::resolve(config, row, &styles)))
    });

    move || {
        let Some(layout) = layout.get() else {
            return view! { <></> }.into_any();
        };

        let expand_view = layout.expand.map(|expand| {
            view! {
                <button
                    type="button"
                    class=format!("table__expand-button {}", expand.button_class)
                    disabled=expand.disabled
                    on:click=move |ev| {
                        if let Some(handler) = on_expand {
                            handler.run(ev);
                        }
                    }
                >
                    <span
                        id="expandable-button"
                        class=expand.icon_class.to_string()
                        style="display: inline-flex;"
                    >
                        {icon("chevron-right")}
                    </span>
                </button>
            }
        });

        let checkbox_view = layout.checkbox.map(|checkbox| {
            view! {
                <SelectCheckbox
                    layout=checkbox
                    checked=checked
                    indeterminate=indeterminate
                    on_change=on_change.unwrap_or_else(|| Callback::new(|_| {}))
                    name=name
                    id=id
                    aria_label=aria_label
                />
            }
        });

        view! {
            <TableCell class=layout.cell_class.to_string() on:click=|e| e.stop_propagation()>
                <div style="display: flex; align-items: center;">
                    {expand_view}
                    {checkbox_view}
                </div>
            </TableCell>
        }
        .into_any()
    }
}
