// src/csv.rs
use std::io::{self, Write};

use crate::config::options::{ExportFormat, ExportOptions};

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

fn into_string(buf: Vec<u8>) -> String {
    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

pub fn rows_to_string(rows: &[Vec<String>], headers: Option<&[String]>, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if let Some(h) = headers {
        let _ = write_row(&mut buf, h, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    into_string(buf)
}

/* ---------------- Plain-text table ---------------- */

/// Left-aligned columns separated by two spaces, with a dashed rule under
/// the header. Newlines inside cells are flattened to spaces.
pub fn render_table(headers: Option<&[String]>, rows: &[Vec<String>]) -> String {
    let clean = |s: &String| s.replace(['\n', '\r'], " ");
    let all: Vec<Vec<String>> = headers
        .into_iter()
        .map(|h| h.iter().map(clean).collect::<Vec<_>>())
        .chain(rows.iter().map(|r| r.iter().map(clean).collect::<Vec<_>>()))
        .collect();

    let ncols = all.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; ncols];
    for row in &all {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = s!();
    for (ix, row) in all.iter().enumerate() {
        let mut line = s!();
        for (i, cell) in row.iter().enumerate() {
            if i > 0 { line.push_str("  "); }
            line.push_str(cell);
            if i + 1 < row.len() {
                let pad = widths[i] - cell.chars().count();
                line.extend(std::iter::repeat_n(' ', pad));
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');

        if ix == 0 && headers.is_some() {
            let rule_len = widths.iter().sum::<usize>() + 2 * ncols.saturating_sub(1);
            out.extend(std::iter::repeat_n('-', rule_len));
            out.push('\n');
        }
    }
    out
}

/* ---------------- Export ---------------- */

/// Copy/export string in the configured format.
pub fn to_export_string(headers: &[String], rows: &[Vec<String>], opts: &ExportOptions) -> String {
    let headers = opts.include_headers.then_some(headers);
    match opts.format.delim() {
        Some(sep) => rows_to_string(rows, headers, sep),
        None => render_table(headers, rows),
    }
}

/// Same as [`to_export_string`] with headers always on.
pub fn format_rows(headers: &[String], rows: &[Vec<String>], format: ExportFormat) -> String {
    to_export_string(headers, rows, &ExportOptions { format, include_headers: true })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| s!(*c)).collect()
    }

    #[test]
    fn quotes_only_when_needed() {
        let out = rows_to_string(&[row(&["a", "b,c", "say \"hi\""])], None, ',');
        assert_eq!(out, "a,\"b,c\",\"say \"\"hi\"\"\"\n");
    }

    #[test]
    fn tsv_leaves_commas_alone() {
        let out = rows_to_string(&[row(&["1,234", "x"])], None, '\t');
        assert_eq!(out, "1,234\tx\n");
    }

    #[test]
    fn table_aligns_columns() {
        let h = row(&["", "Lamp", "Kettle"]);
        let out = render_table(Some(&h), &[row(&["Price", "$9.00", "$19.99"])]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "       Lamp   Kettle");
        assert_eq!(lines[1], "-".repeat(20));
        assert_eq!(lines[2], "Price  $9.00  $19.99");
    }

    #[test]
    fn headers_can_be_dropped() {
        let opts = ExportOptions { format: ExportFormat::Csv, include_headers: false };
        let out = to_export_string(&row(&["h"]), &[row(&["v"])], &opts);
        assert_eq!(out, "v\n");
    }
}
