//! Character-level CSV parsing with standard quoting rules.

/// Parses raw CSV text into rows of fields.
///
/// Follows the usual quoted-CSV rules: fields are separated by `,`, rows by
/// `\n`, and a bare `\r` outside quotes is dropped so both line-ending
/// conventions work. A `"` opens quoted mode; inside it a doubled `""` is a
/// literal quote and every other character (including `,` and `\n`) is kept
/// verbatim. A trailing field or row with no terminating newline is still
/// emitted.
///
/// This function never fails: malformed quoting degrades to a best-effort
/// literal reading of the remaining text. Ragged rows are returned as-is;
/// arity against the header is not checked here.
#[must_use]
pub fn parse_csv(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(ch);
            }
        } else if ch == '"' {
            in_quotes = true;
        } else if ch == ',' {
            row.push(std::mem::take(&mut field));
        } else if ch == '\r' {
            // ignored outside quotes; kept verbatim inside
        } else if ch == '\n' {
            row.push(std::mem::take(&mut field));
            rows.push(std::mem::take(&mut row));
        } else {
            field.push(ch);
        }
    }

    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}
