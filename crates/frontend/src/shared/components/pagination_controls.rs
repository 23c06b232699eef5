use crate::shared::icons::icon;
use leptos::prelude::*;

/// Navigation buttons of the pager, in display order around the label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    First,
    Previous,
    Next,
    Last,
}

impl PageNav {
    /// Page (0-indexed) the button leads to, `None` when it would not move.
    pub fn target(self, current: usize, total_pages: usize) -> Option<usize> {
        let last = total_pages.checked_sub(1)?;
        let target = match self {
            PageNav::First => 0,
            PageNav::Previous => current.checked_sub(1)?,
            PageNav::Next => current + 1,
            PageNav::Last => last,
        };
        (target != current && target <= last).then_some(target)
    }

    fn icon_name(self) -> &'static str {
        match self {
            PageNav::First => "chevrons-left",
            PageNav::Previous => "chevron-left",
            PageNav::Next => "chevron-right",
            PageNav::Last => "chevrons-right",
        }
    }

    fn title(self) -> &'static str {
        match self {
            PageNav::First => "First page",
            PageNav::Previous => "Previous page",
            PageNav::Next => "Next page",
            PageNav::Last => "Last page",
        }
    }
}

/// "page / pages (total)", 1-based; an empty result still reads "1 / 1 (0)"
pub fn page_label(current: usize, total_pages: usize, total_count: usize) -> String {
    format!("{} / {} ({})", current + 1, total_pages.max(1), total_count)
}

/// Page size picked in the selector, if it is one of the offered options
pub fn parse_page_size(raw: &str, options: &[usize]) -> Option<usize> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .filter(|size| options.contains(size))
}

/// Pager of the list views: first/previous/next/last buttons, the page label
/// and a page size selector. Every button is disabled while `disabled` is set.
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    #[prop(into)]
    total_pages: Signal<usize>,

    #[prop(into)]
    total_count: Signal<usize>,

    #[prop(into)]
    page_size: Signal<usize>,

    on_page_change: Callback<usize>,

    on_page_size_change: Callback<usize>,

    /// Sizes offered in the selector
    page_size_options: Vec<usize>,

    #[prop(into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let nav_button = move |nav: PageNav| {
        let target = move || {
            if disabled.get() {
                None
            } else {
                nav.target(current_page.get(), total_pages.get())
            }
        };
        view! {
            <button
                class="pagination-btn"
                title=nav.title()
                disabled=move || target().is_none()
                on:click=move |_| {
                    if let Some(page) = target() {
                        on_page_change.run(page);
                    }
                }
            >
                {icon(nav.icon_name())}
            </button>
        }
    };

    let accepted_sizes = page_size_options.clone();

    view! {
        <div class="pagination-controls">
            {nav_button(PageNav::First)}
            {nav_button(PageNav::Previous)}
            <span class="pagination-info">
                {move || page_label(current_page.get(), total_pages.get(), total_count.get())}
            </span>
            {nav_button(PageNav::Next)}
            {nav_button(PageNav::Last)}
            <select
                class="page-size-select"
                disabled=move || disabled.get()
                prop:value=move || page_size.get().to_string()
                on:change=move |ev| {
                    match parse_page_size(&event_target_value(&ev), &accepted_sizes) {
                        Some(size) => on_page_size_change.run(size),
                        None => log::warn!("Ignoring unknown page size selection"),
                    }
                }
            >
                {page_size_options
                    .into_iter()
                    .map(|size| {
                        view! {
                            <option value=size.to_string() selected=move || page_size.get() == size>
                                {size.to_string()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_targets_in_the_middle() {
        assert_eq!(PageNav::First.target(4, 10), Some(0));
        assert_eq!(PageNav::Previous.target(4, 10), Some(3));
        assert_eq!(PageNav::Next.target(4, 10), Some(5));
        assert_eq!(PageNav::Last.target(4, 10), Some(9));
    }

    #[test]
    fn test_nav_targets_at_the_edges() {
        assert_eq!(PageNav::First.target(0, 10), None);
        assert_eq!(PageNav::Previous.target(0, 10), None);
        assert_eq!(PageNav::Next.target(9, 10), None);
        assert_eq!(PageNav::Last.target(9, 10), None);
    }

    #[test]
    fn test_nav_targets_without_pages() {
        for nav in [PageNav::First, PageNav::Previous, PageNav::Next, PageNav::Last] {
            assert_eq!(nav.target(0, 0), None);
            assert_eq!(nav.target(0, 1), None);
        }
    }

    #[test]
    fn test_page_label() {
        assert_eq!(page_label(0, 0, 0), "1 / 1 (0)");
        assert_eq!(page_label(2, 11, 125), "3 / 11 (125)");
    }

    #[test]
    fn test_parse_page_size() {
        let options = [12, 24, 48];
        assert_eq!(parse_page_size("24", &options), Some(24));
        assert_eq!(parse_page_size(" 48 ", &options), Some(48));
        assert_eq!(parse_page_size("100", &options), None);
        assert_eq!(parse_page_size("abc", &options), None);
    }
}
