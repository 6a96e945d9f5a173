//! Subcommand implementations

use std::collections::BTreeSet;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use smartgrid_lib::GridController;
use smartgrid_lib::export::ExportFormat;
use smartgrid_lib::model::Column;
use smartgrid_lib::model::Record;
use smartgrid_lib::sample;

use crate::table;

#[derive(Args)]
pub struct ShowArgs {
    /// JSON file holding an array of records.
    pub file: PathBuf,

    /// Per-column filter, as COLUMN=QUERY. Repeatable.
    #[arg(long = "filter", value_name = "COL=QUERY")]
    pub filters: Vec<String>,

    /// Column to sort by.
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending instead of ascending.
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Page to show (1-based).
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page.
    #[arg(long, default_value_t = 10)]
    pub page_size: usize,

    /// Show all rows instead of one page.
    #[arg(long)]
    pub no_pagination: bool,
}

#[derive(Args)]
pub struct ExportArgs {
    /// JSON file holding an array of records.
    pub file: PathBuf,

    /// Output format.
    #[arg(long, value_parser = parse_format)]
    pub format: ExportFormat,

    /// Directory to write the export into. Defaults to the current directory.
    #[arg(long, default_value = ".")]
    pub out: PathBuf,
}

#[derive(Args)]
pub struct SampleArgs {
    /// Number of records to generate.
    pub count: usize,

    /// File to write. Prints to stdout when omitted.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn show(args: ShowArgs) -> Result<(), Box<dyn Error>> {
    let records = load_records(&args.file)?;
    let columns = infer_columns(&records);

    let mut grid = GridController::builder()
        .data(records)
        .columns(columns)
        .page_size(args.page_size)
        .build();

    for spec in &args.filters {
        let (column, query) = spec
            .split_once('=')
            .ok_or_else(|| format!("invalid --filter '{spec}', expected COL=QUERY"))?;
        grid.set_filter(column, query);
    }
    if let Some(column) = &args.sort {
        grid.toggle_sort(column);
        if args.desc {
            grid.toggle_sort(column);
        }
    }
    grid.set_pagination_enabled(!args.no_pagination);
    grid.set_page(args.page);
    grid.finish_loading();

    print!("{}", table::render(&grid));
    Ok(())
}

pub fn export(args: ExportArgs) -> Result<(), Box<dyn Error>> {
    let records = load_records(&args.file)?;
    let columns = infer_columns(&records);

    let grid = GridController::builder()
        .data(records)
        .columns(columns)
        .build();

    let path = grid.export_to_file(&args.out, args.format)?;
    log::info!("exported {} rows", grid.data().len());
    println!("{}", path.display());
    Ok(())
}

pub fn sample(args: SampleArgs) -> Result<(), Box<dyn Error>> {
    let users = sample::users(args.count);
    let json = smartgrid_lib::export::to_json(&users)?;

    match args.out {
        Some(path) => {
            fs::write(&path, &json)?;
            log::info!("wrote {} records to {}", args.count, path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn load_records(path: &PathBuf) -> Result<Vec<Record>, Box<dyn Error>> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let records: Vec<Record> = serde_json::from_str(&content)
        .map_err(|e| format!("{} is not a JSON record array: {e}", path.display()))?;
    log::debug!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Derives column descriptors from the union of record fields, in
/// alphabetical order. Every column is sortable; the CLI has no reason to
/// fence any off.
fn infer_columns(records: &[Record]) -> Vec<Column> {
    let ids: BTreeSet<&String> = records.iter().flat_map(|r| r.fields().keys()).collect();
    ids.into_iter()
        .map(|id| Column::new(id, id).sortable(true))
        .collect()
}

fn parse_format(s: &str) -> Result<ExportFormat, String> {
    match s {
        "csv" => Ok(ExportFormat::Csv),
        "json" => Ok(ExportFormat::Json),
        other => Err(format!("unknown format '{other}', expected csv or json")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_columns_union() {
        let records = vec![
            Record::new().set("b", 1i64).set("a", 2i64),
            Record::new().set("c", 3i64),
        ];
        let ids: Vec<String> = infer_columns(&records)
            .iter()
            .map(|c| c.id().to_string())
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(parse_format("csv").unwrap(), ExportFormat::Csv);
        assert!(parse_format("tsv").is_err());
    }
}
