//! Character-scanning CSV parser with quoted-field support.

/// Parse raw CSV text into rows of trimmed field strings.
///
/// Fields are separated by commas and rows by `\n` or `\r`, except inside
/// a `"`-quoted span, where both are literal. A doubled quote inside a
/// quoted span is an escaped literal quote. The function is infallible:
/// malformed quoting degrades to "rest of input is one field" rather than
/// an error.
///
/// Blank lines produce no row. A non-empty field or row buffer at end of
/// input is flushed as a final row, so input without a trailing newline
/// still yields its last row.
pub fn parse(text: &str) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                // Escaped quote inside a quoted span.
                field.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                row.push(field.trim().to_string());
                field.clear();
            }
            '\n' | '\r' if !in_quotes => {
                if !field.is_empty() || !row.is_empty() {
                    row.push(field.trim().to_string());
                    field.clear();
                    rows.push(std::mem::take(&mut row));
                }
            }
            _ => field.push(c),
        }
    }

    if !field.is_empty() || !row.is_empty() {
        row.push(field.trim().to_string());
        rows.push(row);
    }

    rows
}
