use leptos::prelude::*;
use thaw::*;

/// Row selection checkbox cell
///
/// Click on the checkbox does not propagate to the row.
#[component]
pub fn TableCellCheckbox(
    /// Whether the row is selected
    #[prop(into)]
    checked: Signal<bool>,

    /// Callback with the new checked state
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| {
                    on_change.run(event_target_checked(&ev));
                }
            />
        </TableCell>
    }
}
