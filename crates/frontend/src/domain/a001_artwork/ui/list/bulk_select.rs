use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Header control with a drop-down form "select the first N rows".
///
/// `on_submit` receives the raw input and returns whether it was accepted;
/// the form closes only on success.
#[component]
pub fn BulkSelectControl(on_submit: Callback<String, bool>) -> impl IntoView {
    let (is_open, set_is_open) = signal(false);
    let (input_value, set_input_value) = signal(String::new());

    let submit = move || {
        if on_submit.run(input_value.get_untracked()) {
            set_is_open.set(false);
        }
    };

    view! {
        <div class="bulk-select">
            <button
                class="bulk-select__toggle"
                title="Select rows..."
                on:click=move |_| set_is_open.update(|open| *open = !*open)
            >
                {icon("chevron-down")}
            </button>
            <Show when=move || is_open.get()>
                <div class="bulk-select__panel">
                    <input
                        type="number"
                        min="1"
                        class="bulk-select__input"
                        placeholder="select rows..."
                        prop:value=move || input_value.get()
                        on:input=move |ev| set_input_value.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                submit();
                            }
                        }
                    />
                    <Button
                        appearance=ButtonAppearance::Subtle
                        size=ButtonSize::Small
                        on_click=move |_| submit()
                    >
                        "Submit"
                    </Button>
                </div>
            </Show>
        </div>
    }
}
