use serde::{Deserialize, Serialize};

/// Размер страницы блока "Recent Activity"
pub const ACTIVITY_PAGE_SIZE: usize = 4;

/// Количество страниц: ceil(count / page_size). Для пустого списка — 0.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Срез для страницы `page` (нумерация с 1).
///
/// Страница 0 или страница за пределами списка дают пустой срез,
/// последняя страница может быть неполной.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Одна страница списка вместе с метаданными для контролов пагинации
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Текущая страница (с 1)
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

impl<T: Clone> Page<T> {
    pub fn from_items(items: &[T], page: usize, page_size: usize) -> Self {
        Self {
            items: page_slice(items, page, page_size).to_vec(),
            page,
            page_size,
            total_count: items.len(),
            total_pages: total_pages(items.len(), page_size),
        }
    }
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eight_items_two_pages() {
        let items: Vec<u32> = (1..=8).collect();
        assert_eq!(total_pages(items.len(), ACTIVITY_PAGE_SIZE), 2);
        assert_eq!(page_slice(&items, 1, ACTIVITY_PAGE_SIZE), &[1, 2, 3, 4]);
        assert_eq!(page_slice(&items, 2, ACTIVITY_PAGE_SIZE), &[5, 6, 7, 8]);
    }

    #[test]
    fn test_partial_last_page() {
        let items: Vec<u32> = (1..=9).collect();
        assert_eq!(total_pages(items.len(), 4), 3);
        assert_eq!(page_slice(&items, 3, 4), &[9]);
    }

    #[test]
    fn test_out_of_range_pages_are_empty() {
        let items: Vec<u32> = (1..=8).collect();
        assert!(page_slice(&items, 0, 4).is_empty());
        assert!(page_slice(&items, 3, 4).is_empty());
        assert!(page_slice(&items, usize::MAX, 4).is_empty());
        assert!(page_slice(&items, 1, 0).is_empty());
    }

    #[test]
    fn test_empty_list() {
        let items: Vec<u32> = Vec::new();
        assert_eq!(total_pages(0, 4), 0);
        assert!(page_slice(&items, 1, 4).is_empty());
    }

    #[test]
    fn test_page_metadata() {
        let items: Vec<u32> = (1..=8).collect();
        let first = Page::from_items(&items, 1, 4);
        assert_eq!(first.total_count, 8);
        assert_eq!(first.total_pages, 2);
        assert!(!first.has_previous());
        assert!(first.has_next());

        let second = Page::from_items(&items, 2, 4);
        assert_eq!(second.items, vec![5, 6, 7, 8]);
        assert!(second.has_previous());
        assert!(!second.has_next());
    }
}
