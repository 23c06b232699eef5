//! Header cell checkbox selecting or deselecting every row of the page
//!
//! # Example
//!
//! ```rust,ignore
//! <TableHeaderCheckbox
//!     state=Signal::derive(move || list.with(|s| s.header_state()))
//!     on_change=Callback::new(move |check_all: bool| {
//!         list.update(|s| s.toggle_all_on_page(check_all));
//!     })
//! />
//! ```

use crate::shared::selection::HeaderCheckState;
use leptos::prelude::*;
use thaw::*;

/// Table header checkbox
///
/// - Shows three states: unchecked, checked, indeterminate
/// - The state is supplied by the caller, derived from the page rows and the
///   selection, so it cannot drift from what the rows show
#[component]
pub fn TableHeaderCheckbox(
    /// Derived state of the page rows
    #[prop(into)]
    state: Signal<HeaderCheckState>,

    /// Callback on change (true = select all, false = deselect all)
    on_change: Callback<bool>,

    /// Disable the checkbox (e.g. empty page)
    #[prop(into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate is a DOM property only, there is no attribute for it
    Effect::new(move |_| {
        let is_indeterminate = matches!(state.get(), HeaderCheckState::Indeterminate);
        if let Some(input) = checkbox_ref.get() {
            input.set_indeterminate(is_indeterminate);
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                title="Select all on page"
                prop:checked=move || matches!(state.get(), HeaderCheckState::Checked)
                prop:disabled=move || disabled.get()
                on:change=move |ev| {
                    // An indeterminate checkbox reports checked=true on click,
                    // which selects the rest of the page
                    on_change.run(event_target_checked(&ev));
                }
            />
        </TableHeaderCell>
    }
}
