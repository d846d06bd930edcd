//! String processing utilities
//!
//! Small string helpers shared by the parser and the renderer.

/// Capitalize the first character of a string, leaving the rest unchanged
///
/// Matches PHP's `ucfirst`: `doExample` becomes `DoExample`, an already
/// capitalized or empty string is returned as-is.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Trim leading and trailing whitespace from every token
///
/// Pure mapping over an ordered sequence; order is preserved.
pub fn trim_tokens<'a, I>(tokens: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    tokens.into_iter().map(|t| t.trim().to_string()).collect()
}
