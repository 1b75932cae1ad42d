use crate::domain::model::Row;
use crate::domain::ports::TableFormatter;

/// GitHub-flavored pipe table with left-aligned, space-padded columns.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownTable;

fn escape_cell(cell: &str) -> String {
    cell.replace('|', "\\|")
        .replace("\r\n", " ")
        .replace(['\r', '\n'], " ")
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    out.push('|');
    for (cell, width) in cells.iter().zip(widths) {
        let padding = width.saturating_sub(cell.chars().count());
        out.push(' ');
        out.push_str(cell);
        out.push_str(&" ".repeat(padding));
        out.push_str(" |");
    }
}

impl TableFormatter for MarkdownTable {
    fn format(&self, rows: &[Row]) -> String {
        let header: Vec<String> = Row::COLUMNS.iter().map(|c| c.to_string()).collect();
        let body: Vec<Vec<String>> = rows
            .iter()
            .map(|row| row.cells().iter().map(|c| escape_cell(c)).collect())
            .collect();

        let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count().max(3)).collect();
        for cells in &body {
            for (width, cell) in widths.iter_mut().zip(cells) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

        let mut out = String::new();
        push_line(&mut out, &header, &widths);
        out.push('\n');
        push_line(&mut out, &separator, &widths);
        for cells in &body {
            out.push('\n');
            push_line(&mut out, cells, &widths);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(title: &str, instances: &str) -> Row {
        Row {
            title: title.to_string(),
            instances: instances.to_string(),
        }
    }

    #[test]
    fn test_empty_table_has_header_only() {
        let table = MarkdownTable.format(&[]);
        assert_eq!(table, "| Title | Instances |\n| ----- | --------- |");
    }

    #[test]
    fn test_columns_are_padded_to_widest_cell() {
        let table = MarkdownTable.format(&[
            row("[Paper B](http://b)", "x"),
            row("A", "Conf X (talk, 2023-01-01)"),
        ]);
        let expected = "\
| Title               | Instances                 |
| ------------------- | ------------------------- |
| [Paper B](http://b) | x                         |
| A                   | Conf X (talk, 2023-01-01) |";
        assert_eq!(table, expected);
    }

    #[test]
    fn test_pipes_and_newlines_are_escaped() {
        let table = MarkdownTable.format(&[row("a|b", "line1\nline2")]);
        let last = table.lines().last().unwrap();
        assert_eq!(last, "| a\\|b  | line1 line2 |");
    }

    #[test]
    fn test_carriage_returns_are_escaped() {
        let table = MarkdownTable.format(&[row("a\rb", "x\r\ny\rz")]);
        assert!(!table.contains('\r'));
        assert_eq!(table.lines().count(), 3);
        assert_eq!(table.lines().last().unwrap(), "| a b   | x y z     |");
    }

    #[test]
    fn test_width_counts_characters() {
        let table = MarkdownTable.format(&[row("Zürich", "Köln")]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[2], "| Zürich | Köln      |");
        assert_eq!(lines[0].chars().count(), lines[2].chars().count());
    }
}
