const ELLIPSIS: &str = "...";

/// Cuts `text` to `limit` characters, trims trailing whitespace and appends
/// an ellipsis. Text that fits within the limit is returned unchanged, as is
/// text that already carries the ellipsis and fits once it is accounted for,
/// which makes the operation idempotent.
pub fn truncate_description(text: &str, limit: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= limit {
        return text.to_string();
    }
    if text.ends_with(ELLIPSIS) && char_count <= limit + ELLIPSIS.len() {
        return text.to_string();
    }

    let cut: String = text.chars().take(limit).collect();
    format!("{}{}", cut.trim_end(), ELLIPSIS)
}
