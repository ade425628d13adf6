use crate::surface::{Page, Row, TableId, COLUMNS};
use colored::Colorize;
use serde::Serialize;
use tera::{Context, Tera};

// the `.html` suffix turns on tera's autoescaping
const PAGE_TEMPLATE: &str = "page.html";

#[derive(Serialize)]
struct PageContext<'a> {
    columns: [&'static str; 4],
    alerts: &'a [String],
    tables: [TableContext<'a>; 2],
}

#[derive(Serialize)]
struct TableContext<'a> {
    id: &'static str,
    rows: &'a [Row],
}

/// Aligned plain-text table with a header line.
///
/// With `colorize`, the change column is green when positive and red when
/// negative; cells that do not read as numbers are left alone.
pub fn text_table(rows: &[Row], colorize: bool) -> String {
    let mut widths = COLUMNS.map(|c| c.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    let header: Vec<String> = COLUMNS
        .iter()
        .zip(widths.iter())
        .map(|(c, &w)| {
            let cell = format!("{c:<w$}");
            if colorize {
                cell.bold().to_string()
            } else {
                cell
            }
        })
        .collect();
    lines.push(header.join(" | ").trim_end().to_string());
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    lines.push(rule.join("-+-"));

    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .zip(widths.iter())
            .enumerate()
            .map(|(i, (cell, &w))| {
                let padded = format!("{cell:<w$}");
                if colorize && i == 2 {
                    paint_change(cell, padded)
                } else {
                    padded
                }
            })
            .collect();
        lines.push(cells.join(" | ").trim_end().to_string());
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn paint_change(raw: &str, padded: String) -> String {
    match raw.trim().trim_end_matches('%').parse::<f64>() {
        Ok(n) if n > 0.0 => padded.green().to_string(),
        Ok(n) if n < 0.0 => padded.red().to_string(),
        _ => padded,
    }
}

/// Standalone HTML document with both tables and any pending alerts.
///
/// Rendered from `templates/page.html` with autoescaping on, so nothing from
/// the backend reaches the output as markup.
pub fn html_page(page: &Page) -> tera::Result<String> {
    let mut tera = Tera::default();
    tera.add_raw_template(PAGE_TEMPLATE, include_str!("../templates/page.html"))?;

    let context = PageContext {
        columns: COLUMNS,
        alerts: page.alerts(),
        tables: [TableId::Main, TableId::SearchResults].map(|table| TableContext {
            id: table.element_id(),
            rows: page.rows(table),
        }),
    };
    tera.render(PAGE_TEMPLATE, &Context::from_serialize(&context)?)
}
