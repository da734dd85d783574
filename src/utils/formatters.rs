// Formatting utilities

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

/// Append an "s" unless the count is exactly one
pub fn pluralize(word: &str, count: u64) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
