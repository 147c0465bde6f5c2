//! Поиск и сортировка для небольших списков в памяти.
//!
//! Используется и страницами фронтенда, и обработчиками бэкенда, поэтому
//! здесь нет ничего, что зависит от wasm или axum.

use std::cmp::Ordering;

/// Тип, поддерживающий текстовый поиск
pub trait Searchable {
    /// Поля, по которым выполняется поиск (в исходном регистре)
    fn search_fields(&self) -> Vec<&str>;

    /// `needle` уже приведён к нижнему регистру
    fn matches_filter(&self, needle: &str) -> bool {
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Тип, поддерживающий сортировку по имени поля
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Фильтрует список по подстроке (без учёта регистра, OR по полям).
///
/// Пустой запрос возвращает список без изменений. Порядок элементов
/// сохраняется.
pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.is_empty() {
        return items;
    }

    let needle = filter.to_lowercase();
    items
        .into_iter()
        .filter(|item| item.matches_filter(&needle))
        .collect()
}

/// Сортирует список по указанному полю (стабильная сортировка)
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Сравнение строк без учёта регистра
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Сравнение опциональных значений: `Some` всегда раньше `None`
pub fn cmp_optional<T: Ord>(a: &Option<T>, b: &Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        name: &'static str,
        company: &'static str,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name, self.company]
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => cmp_ignore_case(self.name, other.name),
                "id" => self.id.cmp(&other.id),
                _ => Ordering::Equal,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 1, name: "Anna Schmidt", company: "Nordic Foods" },
            Row { id: 2, name: "Liu Wei", company: "Shanghai Trading" },
            Row { id: 3, name: "Carlos Mendes", company: "Andes Import" },
            Row { id: 4, name: "anna Berg", company: "Berg & Sons" },
        ]
    }

    #[test]
    fn test_empty_filter_returns_everything() {
        assert_eq!(filter_list(rows(), ""), rows());
    }

    #[test]
    fn test_filter_is_case_insensitive_and_ordered() {
        let ids: Vec<u32> = filter_list(rows(), "ANNA").iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn test_filter_matches_any_field() {
        let ids: Vec<u32> = filter_list(rows(), "trading").iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_filter_without_matches() {
        assert!(filter_list(rows(), "zzz").is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        for query in ["an", "e", "Berg", "", "xyz", " "] {
            let once = filter_list(rows(), query);
            let twice = filter_list(once.clone(), query);
            assert_eq!(once, twice, "query {:?}", query);
        }
    }

    #[test]
    fn test_filter_result_is_subsequence() {
        let all = rows();
        let filtered = filter_list(all.clone(), "a");
        let mut cursor = all.iter();
        for item in &filtered {
            assert!(cursor.any(|r| r == item));
        }
    }

    #[test]
    fn test_sort_list_both_directions() {
        let mut items = rows();
        sort_list(&mut items, "name", true);
        let names: Vec<&str> = items.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["anna Berg", "Anna Schmidt", "Carlos Mendes", "Liu Wei"]);

        sort_list(&mut items, "id", false);
        let ids: Vec<u32> = items.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_sort_is_stable_on_equal_keys() {
        let mut items = rows();
        sort_list(&mut items, "unknown", true);
        assert_eq!(items, rows());
    }

    #[test]
    fn test_cmp_optional() {
        assert_eq!(cmp_optional(&Some(1), &None), Ordering::Less);
        assert_eq!(cmp_optional::<i32>(&None, &None), Ordering::Equal);
        assert_eq!(cmp_optional(&Some(2), &Some(1)), Ordering::Greater);
    }
}
