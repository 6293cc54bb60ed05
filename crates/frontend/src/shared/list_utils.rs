/// Утилиты для списков: подсветка фильтра, форматирование, подтверждение
use leptos::prelude::*;

/// Splits `text` into `(fragment, is_match)` parts, case-insensitive.
pub fn match_spans<'a>(text: &'a str, filter: &str) -> Vec<(&'a str, bool)> {
    let filter_lower = filter.trim().to_lowercase();
    let text_lower = text.to_lowercase();
    // lowercasing must not shift byte offsets
    if filter_lower.is_empty() || text_lower.len() != text.len() {
        return vec![(text, false)];
    }

    let mut parts = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let actual_pos = last_pos + pos;
        if actual_pos > last_pos {
            parts.push((&text[last_pos..actual_pos], false));
        }
        let match_end = actual_pos + filter_lower.len();
        parts.push((&text[actual_pos..match_end], true));
        last_pos = match_end;
    }
    if last_pos < text.len() || parts.is_empty() {
        parts.push((&text[last_pos..], false));
    }
    parts
}

/// Подсветка совпадений в тексте
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let parts = match_spans(text, filter)
        .into_iter()
        .map(|(fragment, is_match)| {
            let fragment = fragment.to_string();
            if is_match {
                view! { <mark class="search-match">{fragment}</mark> }.into_any()
            } else {
                view! { <span>{fragment}</span> }.into_any()
            }
        })
        .collect::<Vec<_>>();
    view! { <>{parts}</> }.into_any()
}

/// Two fraction digits, as amounts are shown in tables.
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

/// Browser confirm dialog. No window means no confirmation.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_spans_case_insensitive() {
        assert_eq!(
            match_spans("Steel Bolt", "bolt"),
            vec![("Steel ", false), ("Bolt", true)]
        );
    }

    #[test]
    fn test_match_spans_multiple_and_none() {
        assert_eq!(
            match_spans("abab", "a"),
            vec![("a", true), ("b", false), ("a", true), ("b", false)]
        );
        assert_eq!(match_spans("Nut", "bolt"), vec![("Nut", false)]);
        assert_eq!(match_spans("Nut", "  "), vec![("Nut", false)]);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(3.0), "3.00");
        assert_eq!(format_amount(12.346), "12.35");
    }
}
