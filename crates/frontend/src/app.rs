use crate::shared::components::table::{SelectCell, SelectCellStyles};
use crate::shared::selection::{header_check_state, select_all, toggle_expanded, toggle_selection};
use crate::shared::theme::{use_theme, ThemeProvider, ThemeSelector};
use contracts::enums::SelectableMode;
use contracts::shared::select_cell::{CellConfig, FixedHeaderOptions, RowState};
use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;

#[derive(Clone, Debug, PartialEq)]
struct DemoRow {
    id: String,
    description: String,
    amount: f64,
    details: String,
    selectable: bool,
}

fn demo_rows() -> Vec<DemoRow> {
    let row = |id: &str, description: &str, amount: f64, details: &str, selectable: bool| DemoRow {
        id: id.to_string(),
        description: description.to_string(),
        amount,
        details: details.to_string(),
        selectable,
    };
    vec![
        row("1", "Заказ #1001", 1250.0, "Доставка курьером, 2 позиции", true),
        row("2", "Заказ #1002", 980.5, "Самовывоз, 1 позиция", true),
        row("3", "Заказ #1003", 15300.0, "Возврат оформлен, выбор недоступен", false),
        row("4", "Заказ #1004", 410.0, "Доставка почтой, 3 позиции", true),
    ]
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ThemeProvider>
            <SelectCellDemo />
        </ThemeProvider>
    }
}

/// Таблица с ячейками выбора: заголовок, раскрываемые строки, выбор строк
#[component]
fn SelectCellDemo() -> impl IntoView {
    let theme = use_theme();
    let styles = theme.styles();

    let rows = StoredValue::new(demo_rows());
    let selectable_ids = move || {
        rows.with_value(|rows| {
            rows.iter()
                .filter(|r| r.selectable)
                .map(|r| r.id.clone())
                .collect::<Vec<_>>()
        })
    };

    let mode = RwSignal::new(SelectableMode::Multiple);
    let expandable = RwSignal::new(true);
    let fixed_header = RwSignal::new(true);
    let header_checkbox = RwSignal::new(true);
    let selected = RwSignal::new(HashSet::<String>::new());
    let expanded = RwSignal::new(HashSet::<String>::new());

    // Общие настройки ячейки; checked подставляется для каждой строки
    let base_config = Signal::derive(move || CellConfig {
        expandable_on: expandable.get(),
        selectable_on: mode.get(),
        fixed_header_options: fixed_header
            .get()
            .then_some(FixedHeaderOptions { x_axis: true, y_axis: false }),
        ..CellConfig::default()
    });

    let header_state = Signal::derive(move || {
        let ids = selectable_ids();
        selected.with(|sel| header_check_state(ids.iter().map(String::as_str), sel))
    });

    let header_config = Signal::derive(move || CellConfig {
        checked: header_state.get().is_checked(),
        ..base_config.get()
    });
    let header_indeterminate = Signal::derive(move || header_state.get().is_indeterminate());
    let header_row = Signal::derive(move || RowState {
        selectable_rows_header: Some(header_checkbox.get()),
        ..RowState::header()
    });

    let on_select_all = Callback::new(move |check_all: bool| {
        let ids = selectable_ids();
        selected.update(|sel| select_all(sel, ids.iter().map(String::as_str), check_all));
    });

    let on_mode_change = move |ev: leptos::ev::Event| {
        let code = event_target_value(&ev);
        let new_mode = SelectableMode::from_code(&code).unwrap_or_default();
        log::debug!("Selection mode changed: {}", new_mode);
        mode.set(new_mode);
        selected.update(|sel| sel.clear());
    };

    let header_styles = styles.clone();
    let row_styles = styles.clone();

    view! {
        <SelectCellStyles styles=styles.clone() palette=theme.palette() />
        <div class="page">
            <div class="page__toolbar" style="display: flex; gap: 16px; align-items: center; margin-bottom: 12px;">
                <label>
                    "Выбор: "
                    <select on:change=on_mode_change>
                        {SelectableMode::all().into_iter().map(|m| view! {
                            <option value=m.code() selected=move || mode.get() == m>
                                {m.display_name()}
                            </option>
                        }).collect_view()}
                    </select>
                </label>
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || expandable.get()
                        on:change=move |ev| expandable.set(event_target_checked(&ev))
                    />
                    " Раскрытие строк"
                </label>
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || fixed_header.get()
                        on:change=move |ev| fixed_header.set(event_target_checked(&ev))
                    />
                    " Закрепить колонку"
                </label>
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || header_checkbox.get()
                        on:change=move |ev| header_checkbox.set(event_target_checked(&ev))
                    />
                    " Чекбокс в заголовке"
                </label>
                <ThemeSelector />
            </div>

            <div style="max-height: 320px; overflow: auto;">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <SelectCell
                                config=header_config
                                row=header_row
                                styles=header_styles.clone()
                                indeterminate=header_indeterminate
                                on_change=on_select_all
                                aria_label="Выбрать все"
                            />
                            <TableHeaderCell min_width=200.0>"Документ"</TableHeaderCell>
                            <TableHeaderCell min_width=120.0>"Сумма"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {rows.get_value().into_iter().map(|row| {
                            let DemoRow { id, description, amount, details, selectable } = row;
                            let aria_label = format!("Выбрать {}", description);
                            let id_for_checked = id.clone();
                            let id_for_expanded = id.clone();
                            let id_for_detail = id.clone();
                            let id_for_expand = id.clone();
                            let id_for_change = id.clone();
                            let styles = row_styles.clone();

                            let config = Signal::derive(move || CellConfig {
                                checked: selected.with(|sel| sel.contains(&id_for_checked)),
                                ..base_config.get()
                            });
                            let row_state = Signal::derive(move || {
                                RowState::row(
                                    expanded.with(|ex| ex.contains(&id_for_expanded)),
                                    selectable,
                                )
                            });
                            let is_expanded = move || {
                                expandable.get() && expanded.with(|ex| ex.contains(&id_for_detail))
                            };

                            view! {
                                <TableRow on:click=move |_| log::debug!("Row clicked: {}", id)>
                                    <SelectCell
                                        config=config
                                        row=row_state
                                        styles=styles.clone()
                                        on_expand=Callback::new(move |_| {
                                            expanded.update(|ex| toggle_expanded(ex, &id_for_expand));
                                        })
                                        on_change=Callback::new(move |checked: bool| {
                                            let mode = mode.get_untracked();
                                            selected.update(|sel| toggle_selection(sel, &id_for_change, checked, mode));
                                        })
                                        name="row-select"
                                        aria_label=aria_label
                                    />
                                    <TableCell>
                                        <TableCellLayout>{description}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{format!("{:.2}", amount)}</TableCellLayout>
                                    </TableCell>
                                </TableRow>
                                <Show when=is_expanded>
                                    <tr class="table__detail-row">
                                        <td colspan="3" style="padding: 8px 48px;">{details.clone()}</td>
                                    </tr>
                                </Show>
                            }
                        }).collect_view()}
                    </TableBody>
                </Table>
            </div>
        </div>
    }
}
