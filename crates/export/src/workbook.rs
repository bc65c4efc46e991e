use std::path::Path;

use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
use visitplan_schedule::VisitRecord;

use crate::{HEADERS, Result};

pub const XLSX_FILE_NAME: &str = "schedule.xlsx";

pub const SHEET_NAME: &str = "Schedule";

fn build(visits: &[VisitRecord]) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, title) in HEADERS.iter().enumerate() {
        sheet.write_with_format(0, col as u16, *title, &header)?;
    }

    for (index, visit) in visits.iter().enumerate() {
        let line = index as u32 + 1;
        let date = visit.visit_date;
        let date = ExcelDateTime::from_ymd(date.year() as u16, date.month().into(), date.day())?;

        sheet.write(line, 0, visit.client_name.as_str())?;
        sheet.write_with_format(line, 1, &date, &date_format)?;
        sheet.write(line, 2, visit.visit_type.as_ref())?;
    }

    sheet.set_column_width(0, 30)?;
    sheet.set_column_width(1, 12)?;
    sheet.set_column_width(2, 14)?;

    Ok(workbook)
}

pub fn to_xlsx(visits: &[VisitRecord]) -> Result<Vec<u8>> {
    Ok(build(visits)?.save_to_buffer()?)
}

/// Writes the whole workbook to `path` in one go, replacing any existing file.
pub fn write_xlsx(path: impl AsRef<Path>, visits: &[VisitRecord]) -> Result<()> {
    let path = path.as_ref();
    let bytes = to_xlsx(visits)?;
    std::fs::write(path, bytes)?;

    tracing::info!(path = %path.display(), rows = visits.len(), "schedule exported");

    Ok(())
}
