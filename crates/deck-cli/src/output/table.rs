//! Plain aligned tables for `--format table`.

use std::io::IsTerminal;

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

impl TableOptions {
    /// Color only on a terminal without `NO_COLOR`; width from `COLUMNS`.
    #[must_use]
    pub fn detect() -> Self {
        let color = std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
        let max_width = std::env::var("COLUMNS")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|width| *width >= 40);
        Self { max_width, color }
    }
}

const MIN_COLUMN: usize = 4;
const GAP: &str = "  ";

/// Render `rows` under `headers`, shrinking the widest columns to fit.
#[must_use]
pub fn render(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|value| value.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(MIN_COLUMN)
        })
        .collect::<Vec<_>>();
    if let Some(max_width) = options.max_width {
        shrink(&mut widths, max_width);
    }

    let header = join_cells(headers.iter().copied(), &widths, false);
    let rule = widths
        .iter()
        .map(|width| "─".repeat(*width))
        .collect::<Vec<_>>()
        .join(GAP);
    let body = rows
        .iter()
        .map(|row| join_cells(row.iter().map(String::as_str), &widths, options.color));

    std::iter::once(header)
        .chain(std::iter::once(rule))
        .chain(body)
        .collect::<Vec<_>>()
        .join("\n")
}

fn join_cells<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize], color: bool) -> String {
    cells
        .zip(widths)
        .map(|(value, width)| {
            let text = truncate(value, *width);
            let pad = " ".repeat(width.saturating_sub(text.chars().count()));
            match color.then(|| ansi_code(&text)).flatten() {
                Some(code) => format!("\u{1b}[{code}m{text}\u{1b}[0m{pad}"),
                None => format!("{text}{pad}"),
            }
        })
        .collect::<Vec<_>>()
        .join(GAP)
        .trim_end()
        .to_string()
}

/// Take one character at a time from the widest column until the row fits.
fn shrink(widths: &mut [usize], max_width: usize) {
    let gaps = widths.len().saturating_sub(1) * GAP.len();
    while widths.iter().sum::<usize>() + gaps > max_width {
        let Some(widest) = widths
            .iter_mut()
            .filter(|width| **width > MIN_COLUMN)
            .max_by_key(|width| **width)
        else {
            break;
        };
        *widest -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out = value.chars().take(width.saturating_sub(1)).collect::<String>();
    out.push('…');
    out
}

/// Status, priority, and section words get a color; everything else stays plain.
fn ansi_code(value: &str) -> Option<&'static str> {
    match value {
        "Done" | "Completed" | "Active" | "remote" => Some("32"),
        "In Progress" | "On Hold" | "High" | "Today" | "cache" | "pending_sync" => Some("33"),
        "Urgent" | "Overdue" | "Cancelled" | "Inactive" | "empty" => Some("31"),
        "Archived" | "Low" => Some("2"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn columns_align_to_widest_value() {
        let rows = vec![
            vec!["t1".to_string(), "Write report".to_string()],
            vec!["t22".to_string(), "Call".to_string()],
        ];
        let out = render(&["id", "title"], &rows, PLAIN);
        assert_eq!(
            out,
            "id   title\n───  ────────────\nt1   Write report\nt22  Call"
        );
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let rows = vec![vec!["t1".to_string(), "a".repeat(60)]];
        let out = render(
            &["id", "title"],
            &rows,
            TableOptions {
                max_width: Some(40),
                color: false,
            },
        );
        let last = out.lines().last().unwrap();
        assert_eq!(last.chars().count(), 40);
        assert!(last.ends_with('…'));
    }

    #[test]
    fn color_wraps_known_status_words() {
        let rows = vec![vec!["Overdue".to_string()]];
        let out = render(
            &["section"],
            &rows,
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        assert!(out.ends_with("\u{1b}[31mOverdue\u{1b}[0m"));
    }
}
