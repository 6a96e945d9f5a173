//! Inline edit example: begin, update and commit an edit with observers.
//!
//! Run with: cargo run --example inline_edit

use smartgrid_lib::GridController;
use smartgrid_lib::sample;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut grid = GridController::builder()
        .data(sample::users(5))
        .columns(sample::user_columns())
        .on_row_edit(|record, index| {
            println!("row {} updated: {}", index, record.cell_text("name"));
        })
        .on_data_change(|data| {
            println!("collection now has {} rows", data.len());
        })
        .build();

    let first = grid.visible_rows()[0].source_index;
    grid.begin_edit(first)?;
    grid.update_field("name", "Renamed User")?;
    grid.update_field("status", "Inactive")?;
    grid.commit_edit()?;

    println!("\nafter commit: {}", grid.data()[first].cell_text("name"));
    Ok(())
}
