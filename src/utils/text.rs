// Text formatting for terminal output

/// Truncate text to a number of characters with an ellipsis
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else if max_chars <= 3 {
        "...".to_string()
    } else {
        let kept: String = text.chars().take(max_chars - 3).collect();
        format!("{}...", kept)
    }
}

/// Format a table with aligned columns
pub fn format_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    if headers.is_empty() {
        return String::new();
    }

    let mut widths = headers.iter().map(|h| h.chars().count()).collect::<Vec<_>>();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }

    let mut result = String::new();

    let header_row = headers
        .iter()
        .enumerate()
        .map(|(i, header)| pad(header, widths[i]))
        .collect::<Vec<_>>()
        .join(" | ");
    result.push_str(header_row.trim_end());
    result.push('\n');

    let separator = widths
        .iter()
        .map(|&width| "-".repeat(width))
        .collect::<Vec<_>>()
        .join("-|-");
    result.push_str(&separator);
    result.push('\n');

    for row in rows {
        let formatted_row = row
            .iter()
            .enumerate()
            .map(|(i, cell)| pad(cell, widths.get(i).copied().unwrap_or(0)))
            .collect::<Vec<_>>()
            .join(" | ");
        result.push_str(formatted_row.trim_end());
        result.push('\n');
    }

    result
}

fn pad(cell: &str, width: usize) -> String {
    format!("{:<width$}", cell, width = width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer memo", 8), "a lon...");
        assert_eq!(truncate("abcdef", 2), "...");
        assert_eq!(truncate("예약메모입니다", 5), "예약...");
    }

    #[test]
    fn test_format_table_aligns_columns() {
        let rows = vec![
            vec!["1".to_string(), "kim".to_string()],
            vec!["20".to_string(), "park".to_string()],
        ];
        let table = format_table(&["ID", "User"], &rows);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "ID | User");
        assert_eq!(lines[1], "---|-----");
        assert_eq!(lines[2], "1  | kim");
        assert_eq!(lines[3], "20 | park");
    }

    #[test]
    fn test_format_table_without_rows_keeps_header() {
        let table = format_table(&["ID"], &[]);
        assert_eq!(table, "ID\n--\n");
    }
}
