use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};
use time::{Date, Month};
use visitplan_schedule::{ClientInput, VisitRecord, build_grid, parse_date};

use crate::config::Config;

#[derive(Args, Debug, Clone)]
pub struct ClientArgs {
    /// Client name
    #[arg(long)]
    pub name: String,

    /// Number that places the client in a visit-frequency tier
    #[arg(long, allow_negative_numbers = true)]
    pub number: i64,

    /// Start date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub date: Date,
}

impl From<ClientArgs> for ClientInput {
    fn from(args: ClientArgs) -> Self {
        ClientInput::new(args.name, args.number, args.date)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

fn project_client(config: &Config, client: ClientArgs) -> Result<Vec<VisitRecord>> {
    let schedule = &config.schedule;

    Ok(visitplan_schedule::project(
        &client.into(),
        &schedule.rules,
        schedule.horizon_count,
    )?)
}

pub fn render_table(visits: &[VisitRecord]) -> String {
    let mut out = format!("{:>3}  {:<10}  {:<6}  {}\n", "#", "Date", "Type", "Name");

    for (index, visit) in visits.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}  {:<10}  {:<6}  {}\n",
            index + 1,
            visit.visit_date.to_string(),
            visit.visit_type.to_string(),
            visit.client_name,
        ));
    }

    out
}

fn encode(visits: &[VisitRecord], format: OutputFormat) -> Result<Vec<u8>> {
    Ok(match format {
        OutputFormat::Table => render_table(visits).into_bytes(),
        OutputFormat::Csv => visitplan_export::to_csv(visits)?,
        OutputFormat::Json => {
            let mut json = serde_json::to_vec_pretty(visits)?;
            json.push(b'\n');
            json
        }
    })
}

/// Projects one client and prints the schedule, or writes it to `output`.
///
/// An `output` ending in `.xlsx` always produces a workbook.
pub fn project(
    config: &Config,
    client: ClientArgs,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let visits = project_client(config, client)?;

    let Some(path) = output else {
        print!("{}", String::from_utf8_lossy(&encode(&visits, format)?));
        return Ok(());
    };

    let is_xlsx = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xlsx"));

    if is_xlsx {
        visitplan_export::write_xlsx(&path, &visits)?;
    } else {
        std::fs::write(&path, encode(&visits, format)?)?;
        tracing::info!(path = %path.display(), rows = visits.len(), "schedule exported");
    }

    Ok(())
}

/// Projects one client and prints a single month of the calendar.
///
/// Defaults to the month of the first on-site visit.
pub fn calendar(
    config: &Config,
    client: ClientArgs,
    year: Option<i32>,
    month: Option<u8>,
) -> Result<()> {
    let visits = project_client(config, client)?;

    let first = visits.first().map(|v| v.visit_date);
    let (year, month) = match (year, month, first) {
        (Some(year), Some(month), _) => (year, Month::try_from(month)?),
        (year, month, Some(first)) => (
            year.unwrap_or(first.year()),
            month.map(Month::try_from).transpose()?.unwrap_or(first.month()),
        ),
        _ => anyhow::bail!("nothing projected, pass --year and --month"),
    };

    print!("{}", build_grid(year, month, &visits)?);

    Ok(())
}
