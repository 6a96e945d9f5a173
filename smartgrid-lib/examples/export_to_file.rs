//! Export example: write the grid's data to CSV and JSON files.
//!
//! Run with: cargo run --example export_to_file

use smartgrid_lib::GridController;
use smartgrid_lib::export::ExportFormat;
use smartgrid_lib::sample;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let grid = GridController::builder()
        .data(sample::users(20))
        .columns(sample::user_columns())
        .build();

    let dir = std::env::temp_dir();
    let csv_path = grid.export_to_file(&dir, ExportFormat::Csv)?;
    let json_path = grid.export_to_file(&dir, ExportFormat::Json)?;

    println!("CSV:  {}", csv_path.display());
    println!("JSON: {}", json_path.display());
    Ok(())
}
