use contracts::shared::select_cell::CheckboxLayout;
use leptos::prelude::*;

/// Checkbox control of the select cell.
///
/// The native input is transparent and stretched over the icon span, so the
/// span draws the box: bordered when unchecked, filled with a checkmark when
/// checked, filled with a dash when partially selected, muted when disabled.
#[component]
pub fn SelectCheckbox(
    /// Resolved classes and disabled state
    layout: CheckboxLayout,
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Partial selection ("select all" with some rows selected)
    #[prop(optional, into)]
    indeterminate: MaybeProp<bool>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    /// Form field name
    #[prop(optional, into)]
    name: MaybeProp<String>,
    /// ID for the checkbox element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Accessible label
    #[prop(optional, into)]
    aria_label: MaybeProp<String>,
) -> impl IntoView {
    let disabled = layout.disabled;
    let wrapper_class = if disabled {
        format!("table__select-checkbox table__select-checkbox--disabled {}", layout.root_class)
    } else {
        format!("table__select-checkbox {}", layout.root_class)
    };
    let is_indeterminate = move || indeterminate.get().unwrap_or(false);

    view! {
        <span
            class=wrapper_class
            style="position: relative; display: inline-flex; padding: 9px; cursor: pointer;"
        >
            <input
                type="checkbox"
                style="position: absolute; inset: 0; width: 100%; height: 100%; margin: 0; opacity: 0; cursor: inherit;"
                name=move || name.get()
                id=move || id.get()
                aria-label=move || aria_label.get()
                prop:checked=move || checked.get()
                prop:indeterminate=is_indeterminate
                disabled=disabled
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
            <span class=move || {
                layout.icon_class_for(checked.get(), is_indeterminate()).to_string()
            }></span>
        </span>
    }
}
