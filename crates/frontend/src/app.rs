use crate::domain::a001_artwork::ui::list::ArtworkList;
use crate::shared::config::load_config;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Resolve the configuration once and share it with the whole app.
    provide_context(load_config());

    view! {
        <main class="app">
            <ArtworkList />
        </main>
    }
}
