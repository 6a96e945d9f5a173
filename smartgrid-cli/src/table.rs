//! Plain-text table rendering

use smartgrid_lib::GridController;

/// Renders the grid's visible slice as an aligned text table with a
/// pagination footer.
pub fn render(grid: &GridController) -> String {
    let columns = grid.columns();
    let rows = grid.visible_rows();

    let mut widths: Vec<usize> = columns.iter().map(|c| c.label().len()).collect();
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            columns
                .iter()
                .enumerate()
                .map(|(i, column)| {
                    let text = column.render_cell(row.record);
                    widths[i] = widths[i].max(text.len());
                    text
                })
                .collect()
        })
        .collect();

    let mut out = String::new();
    render_line(&mut out, columns.iter().map(|c| c.label().to_string()), &widths);
    render_line(
        &mut out,
        widths.iter().map(|w| "-".repeat(*w)),
        &widths,
    );
    for row in cells {
        render_line(&mut out, row.into_iter(), &widths);
    }

    let matched = grid.filtered_count();
    if grid.pagination().is_enabled() {
        out.push_str(&format!(
            "page {} of {} ({} rows match)\n",
            grid.pagination().page(),
            grid.total_pages(),
            matched,
        ));
    } else {
        out.push_str(&format!("{matched} rows match\n"));
    }
    out
}

fn render_line(out: &mut String, cells: impl Iterator<Item = String>, widths: &[usize]) {
    let padded: Vec<String> = cells
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    out.push_str(padded.join("  ").trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartgrid_lib::GridController;
    use smartgrid_lib::model::{Column, Record};

    #[test]
    fn test_render_aligns_and_footers() {
        let grid = GridController::builder()
            .data(vec![
                Record::new().set("id", 1i64).set("name", "Alice"),
                Record::new().set("id", 2i64).set("name", "Bo"),
            ])
            .columns(vec![Column::new("id", "ID"), Column::new("name", "Name")])
            .page_size(10)
            .build();

        let output = render(&grid);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "ID  Name");
        assert_eq!(lines[1], "--  -----");
        assert_eq!(lines[2], "1   Alice");
        assert_eq!(lines[3], "2   Bo");
        assert_eq!(lines[4], "page 1 of 1 (2 rows match)");
    }

    #[test]
    fn test_render_without_pagination() {
        let mut grid = GridController::builder()
            .data(vec![Record::new().set("id", 1i64)])
            .columns(vec![Column::new("id", "ID")])
            .build();
        grid.set_pagination_enabled(false);

        assert!(render(&grid).ends_with("1 rows match\n"));
    }
}
