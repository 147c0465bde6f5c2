use anyhow::Result;
use contracts::domain::a103_activity::aggregate::ActivityItem;
use contracts::shared::pagination::Page;

use crate::shared::data::SupplierDataSource;

pub async fn list(source: &dyn SupplierDataSource) -> Result<Vec<ActivityItem>> {
    Ok(source.fetch_activity().await?)
}

/// Страница ленты активности (нумерация страниц с 1)
pub async fn page(
    source: &dyn SupplierDataSource,
    page: usize,
    page_size: usize,
) -> Result<Page<ActivityItem>> {
    let items = list(source).await?;
    Ok(Page::from_items(&items, page, page_size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::mock::MockDataSource;
    use contracts::shared::pagination::ACTIVITY_PAGE_SIZE;
    use std::time::Duration;

    #[tokio::test]
    async fn test_two_pages_of_four() {
        let source = MockDataSource::new(Duration::ZERO);

        let first = page(&source, 1, ACTIVITY_PAGE_SIZE).await.unwrap();
        assert_eq!(first.total_pages, 2);
        let ids: Vec<&str> = first.items.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);

        let second = page(&source, 2, ACTIVITY_PAGE_SIZE).await.unwrap();
        let ids: Vec<&str> = second.items.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["5", "6", "7", "8"]);

        let beyond = page(&source, 3, ACTIVITY_PAGE_SIZE).await.unwrap();
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.total_count, 8);
    }
}
