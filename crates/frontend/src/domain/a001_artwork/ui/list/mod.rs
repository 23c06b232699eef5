pub mod bulk_select;
pub mod state;

use self::bulk_select::BulkSelectControl;
use self::state::create_state;
use crate::domain::a001_artwork::api;
use crate::shared::components::notification_banner::NotificationBanner;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::config::GridConfig;
use crate::shared::icons::icon;
use contracts::domain::a001_artwork::Artwork;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const TABLE_ID: &str = "a001-artworks-table";

fn format_optional<T: ToString>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "—".to_string())
}

#[component]
pub fn ArtworkList() -> impl IntoView {
    let config = use_context::<GridConfig>().expect("GridConfig context not found");
    let state = create_state(&config.grid);
    let catalog = StoredValue::new(config.catalog.clone());
    let page_size_options = config.grid.page_size_options.clone();
    let notification_timeout_ms = config.grid.notification_timeout_ms;

    // Only the response to the latest request is applied, so rapid paging
    // cannot show an older page over a newer one.
    let load_page = move || {
        let Some((ticket, request)) = state.try_update(|s| s.begin_fetch()) else {
            return;
        };
        let catalog = catalog.get_value();
        spawn_local(async move {
            let result = api::fetch_page(&catalog, request).await;
            match &result {
                Ok(page) => log::info!(
                    "Loaded page {} ({} artworks of {})",
                    page.page_index + 1,
                    page.items.len(),
                    page.total_count
                ),
                Err(e) => log::warn!("Page {} failed: {}", request.remote_page(), e),
            }
            state.update(|s| {
                s.apply_fetch_result(ticket, result);
            });
        });
    };

    // Load on mount
    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded || s.is_loading) {
            load_page();
        }
    });

    let go_to_page = move |new_page: usize| {
        state.update(|s| s.go_to_page(new_page));
        load_page();
    };

    let change_page_size = move |new_size: usize| {
        state.update(|s| s.change_page_size(new_size));
        load_page();
    };

    let submit_count = Callback::new(move |input: String| {
        state
            .try_update(|s| s.submit_desired_count(&input))
            .unwrap_or(false)
    });

    let selection_summary = move || {
        state.with(|s| {
            let selected = s.selection.len();
            match s.selection.desired_count() {
                0 => format!("{} selected", selected),
                desired => format!("{} of {} selected", selected, desired),
            }
        })
    };

    view! {
        <div class="page" id="a001_artwork--list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Artworks"</h1>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        {selection_summary}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| state.update(|s| s.clear_selection())
                        disabled=Signal::derive(move || state.with(|s| s.selection.is_empty()))
                    >
                        "Clear selection"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| load_page()
                        disabled=Signal::derive(move || state.with(|s| s.is_loading))
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <NotificationBanner
                    notifications=Signal::derive(move || state.with(|s| s.notifications.items().to_vec()))
                    on_dismiss=Callback::new(move |id: u64| state.update(|s| s.dismiss_notification(id)))
                    timeout_ms=notification_timeout_ms
                />

                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__center">
                            <PaginationControls
                                current_page=Signal::derive(move || state.with(|s| s.current_page()))
                                total_pages=Signal::derive(move || state.with(|s| s.total_pages()))
                                total_count=Signal::derive(move || state.with(|s| s.total_count))
                                page_size=Signal::derive(move || state.with(|s| s.request.rows))
                                on_page_change=Callback::new(go_to_page)
                                on_page_size_change=Callback::new(change_page_size)
                                page_size_options=page_size_options
                                disabled=Signal::derive(move || state.with(|s| s.is_loading))
                            />
                        </div>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Show when=move || state.with(|s| s.is_loading)>
                        <div class="loading-overlay">
                            <Spinner />
                        </div>
                    </Show>

                    <Table attr:id=TABLE_ID attr:style="width: 100%; min-width: 75rem;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCheckbox
                                    state=Signal::derive(move || state.with(|s| s.header_state()))
                                    on_change=Callback::new(move |checked: bool| {
                                        state.update(|s| s.toggle_all_on_page(checked));
                                    })
                                    disabled=Signal::derive(move || state.with(|s| s.artworks.is_empty()))
                                />
                                <TableHeaderCell resizable=false class="fixed-checkbox-column">
                                    <BulkSelectControl on_submit=submit_count />
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=280.0>"Title"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=140.0>"Origin"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=240.0>"Artist"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Start Date"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"End Date"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || state.with(|s| s.artworks.clone())
                                key=|artwork| artwork.id
                                children=move |artwork: Artwork| {
                                    let id = artwork.id;
                                    let title = artwork.display_title().to_string();
                                    let origin = format_optional(&artwork.origin_place);
                                    let artist = format_optional(&artwork.artist_display);
                                    let date_start = format_optional(&artwork.date_start);
                                    let date_end = format_optional(&artwork.date_end);
                                    let is_selected = Signal::derive(move || {
                                        state.with(|s| s.selection.is_selected(&id))
                                    });

                                    view! {
                                        <TableRow attr:data-selected=move || is_selected.get().to_string()>
                                            <TableCellCheckbox
                                                checked=is_selected
                                                on_change=Callback::new(move |checked: bool| {
                                                    state.update(|s| {
                                                        if s.selection.is_selected(&id) != checked {
                                                            s.toggle_row(&artwork);
                                                        }
                                                    });
                                                })
                                            />
                                            <TableCell class="fixed-checkbox-column">""</TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{title}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{origin}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{artist}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{date_start}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{date_end}</TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>

                    <Show when=move || state.with(|s| s.is_loaded && s.artworks.is_empty())>
                        <div class="table__empty">"No artworks found"</div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
