//! CSV/JSON export
//!
//! Export always serializes the full source collection, not the visible
//! slice: filters, sort and pagination are view state, not data state.

mod csv;
mod download;
mod json;

pub use csv::to_csv;
pub use download::write_export;
pub use json::to_json;

/// The file formats an export can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values, `text/csv`.
    Csv,
    /// Pretty-printed JSON, `application/json`.
    Json,
}

impl ExportFormat {
    /// Returns the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
        }
    }

    /// Returns the default export filename, `smartgrid_export.<ext>`.
    pub fn default_filename(&self) -> String {
        format!("smartgrid_export.{}", self.extension())
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_metadata() {
        assert_eq!(ExportFormat::Csv.mime_type(), "text/csv");
        assert_eq!(ExportFormat::Json.mime_type(), "application/json");
        assert_eq!(
            ExportFormat::Csv.default_filename(),
            "smartgrid_export.csv"
        );
        assert_eq!(
            ExportFormat::Json.default_filename(),
            "smartgrid_export.json"
        );
    }
}
