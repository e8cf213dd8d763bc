/// Wrap `value` in single quotes, escaping backslashes and embedded quotes.
///
/// Examples:
/// - `data.csv` -> `'data.csv'`
/// - `O'Brien.csv` -> `'O\'Brien.csv'`
/// - `C:\in\x.csv` -> `'C:\\in\\x.csv'`
pub fn quote_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for ch in value.chars() {
        match ch {
            '\\' => quoted.push_str("\\\\"),
            '\'' => quoted.push_str("\\'"),
            other => quoted.push(other),
        }
    }
    quoted.push('\'');
    quoted
}
