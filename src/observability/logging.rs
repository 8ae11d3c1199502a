//! Redaction helpers for structured log fields.

/// Keep the first six characters of a public token.
pub fn redact_token(token: &str) -> String {
    let visible: String = token.chars().take(6).collect();
    if visible.len() == token.len() {
        "***".to_string()
    } else {
        format!("{}***", visible)
    }
}

/// Mask all but the last four characters of a card number.
pub fn redact_card_number(number: &str) -> String {
    let count = number.chars().count();
    if count <= 4 {
        return "*".repeat(count);
    }
    number
        .chars()
        .enumerate()
        .map(|(i, c)| if i < count - 4 { '*' } else { c })
        .collect()
}
