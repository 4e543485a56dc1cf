use crate::shared::icons::icon;
use contracts::reports::ReportPagination;
use leptos::prelude::*;

/// The fixed set of page sizes offered by the selector.
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [10, 25, 50, 100];

/// Footer caption, e.g. "Showing page 1 of 3 (5 total items)".
pub fn page_summary(p: &ReportPagination) -> String {
    format!(
        "Showing page {} of {} ({} total items)",
        p.page, p.total_pages, p.total_count
    )
}

/// Previous/Next paging plus the page-size selector.
///
/// Button enabling comes strictly from the server-supplied
/// `has_prev_page`/`has_next_page` flags of the last successful response;
/// nothing here rederives them from `page`/`total_pages` arithmetic.
#[component]
pub fn PaginationControls(
    pagination: ReportPagination,
    page_size: u32,
    /// Called with the new 1-based page number
    on_page_change: Callback<u32>,
    /// Called with the new page size
    on_page_size_change: Callback<u32>,
) -> impl IntoView {
    let prev = pagination.clone();
    let next = pagination.clone();

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">{page_summary(&pagination)}</span>
            <div class="pagination-buttons">
                <button
                    class="pagination-btn"
                    disabled={!pagination.has_prev_page}
                    on:click=move |_| {
                        if prev.has_prev_page {
                            on_page_change.run(prev.page - 1);
                        }
                    }
                >
                    {icon("chevron-left")}
                    "Previous"
                </button>
                <button
                    class="pagination-btn"
                    disabled={!pagination.has_next_page}
                    on:click=move |_| {
                        if next.has_next_page {
                            on_page_change.run(next.page + 1);
                        }
                    }
                >
                    "Next"
                    {icon("chevron-right")}
                </button>
                <select
                    class="page-size-select"
                    on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse() {
                            on_page_size_change.run(size);
                        }
                    }
                    prop:value=page_size.to_string()
                >
                    {PAGE_SIZE_OPTIONS
                        .iter()
                        .map(|&size| {
                            view! {
                                <option value=size.to_string() selected={page_size == size}>
                                    {format!("{size} / page")}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_matches_the_expected_wording() {
        let p = ReportPagination {
            page: 1,
            count: 2,
            total_count: 5,
            total_pages: 3,
            has_next_page: true,
            has_prev_page: false,
        };
        assert_eq!(page_summary(&p), "Showing page 1 of 3 (5 total items)");
    }

    #[test]
    fn page_size_options_are_a_fixed_enumerated_set() {
        assert_eq!(PAGE_SIZE_OPTIONS, [10, 25, 50, 100]);
    }
}
