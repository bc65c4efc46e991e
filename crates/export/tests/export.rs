use base64::{Engine as _, engine::general_purpose::STANDARD};
use calamine::{Data, Reader, Xlsx, open_workbook};
use temp_dir::TempDir;
use time::macros::date;
use visitplan_export::{
    Error, ExportRow, HEADERS, SHEET_NAME, csv_data_uri, to_csv, to_xlsx, write_xlsx,
};
use visitplan_schedule::{
    ClientInput, DEFAULT_HORIZON_COUNT, FrequencyRules, VisitRecord, VisitType, project,
};

fn acme_remote() -> VisitRecord {
    VisitRecord {
        client_name: "Acme".to_owned(),
        tier_count: 10,
        origin_date: date!(2024-01-01),
        visit_date: date!(2024-03-11),
        visit_type: VisitType::Remote,
    }
}

#[test]
fn test_single_visit_csv() -> anyhow::Result<()> {
    let csv = String::from_utf8(to_csv(&[acme_remote()])?)?;
    let mut reader = csv::Reader::from_reader(csv.as_bytes());

    assert_eq!(reader.headers()?.iter().collect::<Vec<_>>(), HEADERS);

    let records = reader.records().collect::<Result<Vec<_>, _>>()?;
    assert_eq!(records.len(), 1);
    assert_eq!(
        records[0].iter().collect::<Vec<_>>(),
        ["Acme", "2024-03-11", "Remote"]
    );

    Ok(())
}

#[test]
fn test_export_row_projection() {
    assert_eq!(
        ExportRow::from(&acme_remote()),
        ExportRow {
            name: "Acme".to_owned(),
            date: "2024-03-11".to_owned(),
            visit_type: "Remote".to_owned(),
        }
    );
}

#[test]
fn test_names_with_commas_are_quoted() -> anyhow::Result<()> {
    let visit = VisitRecord {
        client_name: "Acme, Inc.".to_owned(),
        ..acme_remote()
    };

    let csv = String::from_utf8(to_csv(&[visit])?)?;
    assert!(csv.contains("\"Acme, Inc.\",2024-03-11,Remote"));

    Ok(())
}

#[test]
fn test_data_uri_decodes_to_csv() -> anyhow::Result<()> {
    let visits = project(
        &ClientInput::new("Acme", 10, date!(2024-01-01)),
        &FrequencyRules::default(),
        DEFAULT_HORIZON_COUNT,
    )?;

    let uri = csv_data_uri(&visits)?;
    let payload = uri
        .strip_prefix("data:file/csv;base64,")
        .expect("data uri prefix");

    assert_eq!(STANDARD.decode(payload)?, to_csv(&visits)?);

    Ok(())
}

#[test]
fn test_write_xlsx() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("schedule.xlsx");

    write_xlsx(&path, &[acme_remote()])?;

    let bytes = std::fs::read(&path)?;
    assert!(bytes.starts_with(b"PK"), "xlsx is a zip container");
    assert!(!to_xlsx(&[])?.is_empty());

    Ok(())
}

#[test]
fn test_xlsx_sheet_contents() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("schedule.xlsx");
    let onsite = VisitRecord {
        visit_date: date!(2024-02-26),
        visit_type: VisitType::OnSite,
        ..acme_remote()
    };

    write_xlsx(&path, &[onsite, acme_remote()])?;

    let mut workbook: Xlsx<_> = open_workbook(&path)?;
    let range = workbook.worksheet_range(SHEET_NAME)?;
    let rows = range.rows().collect::<Vec<_>>();
    assert_eq!(rows.len(), 3);

    let header = rows[0].iter().map(Data::to_string).collect::<Vec<_>>();
    assert_eq!(header, HEADERS);

    // Dates are stored as Excel serial days counted from 1899-12-30.
    let serial = |date: time::Date| Some((date - date!(1899-12-30)).whole_days() as f64);
    let cell_serial = |cell: &Data| match cell {
        Data::DateTime(datetime) => Some(datetime.as_f64()),
        Data::Float(value) => Some(*value),
        _ => None,
    };

    assert_eq!(rows[1][0].to_string(), "Acme");
    assert_eq!(cell_serial(&rows[1][1]), serial(date!(2024-02-26)));
    assert_eq!(rows[1][2].to_string(), "OnSite");

    assert_eq!(rows[2][0].to_string(), "Acme");
    assert_eq!(cell_serial(&rows[2][1]), serial(date!(2024-03-11)));
    assert_eq!(rows[2][2].to_string(), "Remote");

    Ok(())
}

#[test]
fn test_write_xlsx_into_missing_directory_fails() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("missing").join("schedule.xlsx");

    assert!(matches!(
        write_xlsx(&path, &[acme_remote()]),
        Err(Error::Io(_))
    ));
    assert!(!path.exists());

    Ok(())
}
