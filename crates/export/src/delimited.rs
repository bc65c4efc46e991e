use base64::{Engine as _, engine::general_purpose::STANDARD};
use visitplan_schedule::VisitRecord;

use crate::{HEADERS, Result, rows};

pub const CSV_FILE_NAME: &str = "schedule.csv";

/// Encodes the schedule as CSV with a header row, even when `visits` is empty.
pub fn to_csv(visits: &[VisitRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());
    writer.write_record(HEADERS)?;

    for row in rows(visits) {
        writer.write_record(row.fields())?;
    }

    writer.into_inner().map_err(|e| e.into_error().into())
}

/// CSV export packed into a `data:` URI suitable for a download link.
pub fn csv_data_uri(visits: &[VisitRecord]) -> Result<String> {
    let csv = to_csv(visits)?;

    Ok(format!("data:file/csv;base64,{}", STANDARD.encode(csv)))
}
