use leptos::prelude::*;

/// Подсветка совпадений в тексте (case-insensitive)
///
/// Совпадения ищутся по тем же правилам, что и в `filter_list`: подстрока
/// без учёта регистра, пустой запрос ничего не подсвечивает.
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last = 0;
    for (start, end) in ranges {
        if start > last {
            parts.push(view! { <span>{text[last..start].to_string()}</span> }.into_any());
        }
        parts.push(view! { <mark class="search-match">{text[start..end].to_string()}</mark> }.into_any());
        last = end;
    }
    if last < text.len() {
        parts.push(view! { <span>{text[last..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Байтовые диапазоны совпадений в `text`.
///
/// Если нижний регистр меняет длину строки (некоторые не-ASCII символы),
/// диапазоны не считаются, текст выводится без подсветки.
pub fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    if filter.is_empty() {
        return Vec::new();
    }
    let text_lower = text.to_lowercase();
    let filter_lower = filter.to_lowercase();
    if text_lower.len() != text.len() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let start = last_pos + pos;
        let end = start + filter_lower.len();
        if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            return Vec::new();
        }
        ranges.push((start, end));
        last_pos = end;
    }
    ranges
}

/// Стрелка сортировки для заголовка колонки
pub fn sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending { " \u{25B2}" } else { " \u{25BC}" }
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        assert_eq!(sort_indicator("total_amount", "total_amount", true), " \u{25B2}");
        assert_eq!(sort_indicator("total_amount", "total_amount", false), " \u{25BC}");
        assert_eq!(sort_indicator("order_date", "total_amount", true), "");
    }

    #[test]
    fn test_match_ranges() {
        assert_eq!(match_ranges("Nordic Home", "home"), vec![(7, 11)]);
        assert_eq!(match_ranges("aAa", "a"), vec![(0, 1), (1, 2), (2, 3)]);
        assert!(match_ranges("Nordic", "").is_empty());
        assert!(match_ranges("Nordic", "x").is_empty());
    }

    #[test]
    fn test_match_ranges_non_ascii() {
        assert_eq!(match_ranges("Müller GmbH", "gmbh"), vec![(8, 12)]);
    }
}
