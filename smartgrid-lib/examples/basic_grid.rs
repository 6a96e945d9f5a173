//! Basic grid example: filter, sort and page through sample data.
//!
//! Run with: cargo run --example basic_grid

use smartgrid_lib::GridController;
use smartgrid_lib::sample;

fn main() {
    let mut grid = GridController::builder()
        .data(sample::users(50))
        .columns(sample::user_columns())
        .page_size(10)
        .build();

    grid.set_filter("role", "admin");
    grid.toggle_sort("name");

    println!(
        "{} admins, page 1 of {}:\n",
        grid.filtered_count(),
        grid.total_pages()
    );

    for row in grid.visible_rows() {
        println!(
            "  #{:<3} {:<10} {}",
            row.source_index,
            row.record.cell_text("name"),
            row.record.cell_text("email"),
        );
    }
}
