use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Prints `rows` under `headers`, each column padded to its widest cell.
/// Cells beyond the header count are printed unpadded.
pub fn print_table(headers: &[&str], rows: Vec<Vec<String>>) {
    let widths = rows.iter().fold(
        headers.iter().map(|h| h.len()).collect::<Vec<_>>(),
        |mut widths, row| {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.len());
            }
            widths
        },
    );
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();

    println!("{}", render_row(&widths, headers.iter().copied()));
    println!("{}", render_row(&widths, rule.iter().map(String::as_str)));
    for row in &rows {
        println!("{}", render_row(&widths, row.iter().map(String::as_str)));
    }
}

fn render_row<'a>(widths: &[usize], cells: impl Iterator<Item = &'a str>) -> String {
    let padded: Vec<String> = cells
        .enumerate()
        .map(|(i, cell)| match widths.get(i) {
            Some(&w) => format!("{cell:<w$}"),
            None => cell.to_string(),
        })
        .collect();
    padded.join("  ").trim_end().to_string()
}

/// Renders a boolean predicate the way the tables show it.
pub fn yes_no(b: bool) -> String {
    let s = if b { "yes" } else { "no" };
    s.to_string()
}
