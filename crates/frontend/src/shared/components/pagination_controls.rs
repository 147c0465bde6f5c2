use crate::shared::icons::icon;
use contracts::shared::pagination::Page;
use leptos::prelude::*;

/// Кнопки "назад/вперёд" с подписью "Page x of y".
///
/// Страницы нумеруются с 1, границы берутся из самой `Page`.
#[component]
pub fn PaginationControls<T>(
    page: Signal<Page<T>>,

    on_page_change: Callback<usize>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let can_go_back = move || page.with(|p| p.has_previous());
    let can_go_forward = move || page.with(|p| p.has_next());
    let current = move || page.with(|p| p.page);

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if can_go_back() {
                        on_page_change.run(current() - 1);
                    }
                }
                disabled=move || !can_go_back()
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || page.with(page_label)}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if can_go_forward() {
                        on_page_change.run(current() + 1);
                    }
                }
                disabled=move || !can_go_forward()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}

/// "Page 2 of 3"; пустой список показывается как одна страница
pub fn page_label<T>(page: &Page<T>) -> String {
    format!("Page {} of {}", page.page, page.total_pages.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_label() {
        let items: Vec<u32> = (1..=8).collect();
        assert_eq!(page_label(&Page::from_items(&items, 2, 4)), "Page 2 of 2");

        let empty: Vec<u32> = Vec::new();
        let page = Page::from_items(&empty, 1, 4);
        assert_eq!(page_label(&page), "Page 1 of 1");
        assert!(!page.has_previous());
        assert!(!page.has_next());
    }
}
