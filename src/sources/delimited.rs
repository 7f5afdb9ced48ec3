use crate::core::Table;

/// Parse comma- or tab-separated text into a table.
///
/// Fields may be wrapped in double quotes; inside quotes the delimiter and
/// line breaks are literal and `""` stands for one quote. A trailing line
/// break does not produce an extra row.
pub fn parse_table(content: &str, delimiter: char, name: &str) -> Table {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' if field.is_empty() => in_quotes = true,
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' | '\r' => {
                row.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut row));
            }
            c if c == delimiter => row.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }

    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    Table::new(name, rows)
}
