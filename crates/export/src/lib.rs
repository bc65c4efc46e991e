mod delimited;
mod error;
mod workbook;

pub use delimited::*;
pub use error::*;
pub use workbook::*;

use visitplan_schedule::VisitRecord;

/// Column headers shared by every export format.
pub const HEADERS: [&str; 3] = ["Name", "Date", "Type of Visit"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub name: String,
    pub date: String,
    pub visit_type: String,
}

impl ExportRow {
    pub fn fields(&self) -> [&str; 3] {
        [&self.name, &self.date, &self.visit_type]
    }
}

impl From<&VisitRecord> for ExportRow {
    fn from(visit: &VisitRecord) -> Self {
        Self {
            name: visit.client_name.to_owned(),
            date: visit.visit_date.to_string(),
            visit_type: visit.visit_type.to_string(),
        }
    }
}

pub fn rows(visits: &[VisitRecord]) -> Vec<ExportRow> {
    visits.iter().map(ExportRow::from).collect()
}
