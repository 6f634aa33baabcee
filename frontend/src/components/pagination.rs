use yew::prelude::*;

/// Page buttons shown at once around the current page
const PAGE_WINDOW: usize = 5;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub current_page: usize,
    pub total_pages: usize,
    pub filtered_len: usize,
    pub total_len: usize,
    pub on_page_change: Callback<usize>,
}

/// Pages to offer as buttons, centred on `current` where possible
fn visible_pages(current: usize, total: usize) -> Vec<usize> {
    let total = total.max(1);
    let window = PAGE_WINDOW.min(total);
    let start = current
        .saturating_sub(window / 2)
        .clamp(1, total - window + 1);
    (start..start + window).collect()
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let current = props.current_page;
    let total = props.total_pages;

    let go_to = |page: usize| props.on_page_change.reform(move |_: MouseEvent| page);

    let summary = if props.filtered_len == props.total_len {
        format!("{} records", props.total_len)
    } else {
        format!("{} of {} records", props.filtered_len, props.total_len)
    };

    html! {
        <nav class="pagination">
            <span class="pagination-summary">{summary}</span>
            <button
                class="page-prev"
                disabled={current <= 1}
                onclick={go_to(current.saturating_sub(1))}
            >
                {"Previous"}
            </button>
            {for visible_pages(current, total).into_iter().map(|page| html! {
                <button
                    class={classes!("page-number", (page == current).then_some("active"))}
                    onclick={go_to(page)}
                >
                    {page}
                </button>
            })}
            <button
                class="page-next"
                disabled={current >= total}
                onclick={go_to(current + 1)}
            >
                {"Next"}
            </button>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_visible_pages_small_total() {
        assert_eq!(visible_pages(1, 1), vec![1]);
        assert_eq!(visible_pages(2, 3), vec![1, 2, 3]);
    }

    #[wasm_bindgen_test]
    fn test_visible_pages_window() {
        assert_eq!(visible_pages(1, 20), vec![1, 2, 3, 4, 5]);
        assert_eq!(visible_pages(10, 20), vec![8, 9, 10, 11, 12]);
        assert_eq!(visible_pages(20, 20), vec![16, 17, 18, 19, 20]);
    }
}
