use std::fmt;

use time::{Date, Month};

use crate::{Result, VisitRecord, VisitType};

pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarCell {
    /// Slot of the first or last week that belongs to a neighbouring month.
    Empty,
    Day(u8),
    Visit {
        day: u8,
        client_name: String,
        visit_type: VisitType,
    },
}

impl CalendarCell {
    pub fn day(&self) -> Option<u8> {
        match self {
            CalendarCell::Empty => None,
            CalendarCell::Day(day) | CalendarCell::Visit { day, .. } => Some(*day),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CalendarCell::Empty)
    }

    pub fn visit_type(&self) -> Option<VisitType> {
        match self {
            CalendarCell::Visit { visit_type, .. } => Some(*visit_type),
            _ => None,
        }
    }

    pub fn label(&self) -> String {
        match self {
            CalendarCell::Empty => String::new(),
            CalendarCell::Day(day) => day.to_string(),
            CalendarCell::Visit {
                day, client_name, ..
            } => format!("{day} - {client_name}"),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            CalendarCell::Empty => "empty",
            CalendarCell::Day(_) => "day",
            CalendarCell::Visit { visit_type, .. } => visit_type.category(),
        }
    }
}

/// Monday-first layout of one month, one row per week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: Month,
    pub weeks: Vec<[CalendarCell; 7]>,
}

impl MonthGrid {
    pub fn title(&self) -> String {
        format!("{} {}", self.month, self.year)
    }

    pub fn cells(&self) -> impl Iterator<Item = &CalendarCell> {
        self.weeks.iter().flatten()
    }

    pub fn days_in_month(&self) -> usize {
        self.cells().filter(|cell| !cell.is_empty()).count()
    }

    pub fn cell(&self, day: u8) -> Option<&CalendarCell> {
        self.cells().find(|cell| cell.day() == Some(day))
    }
}

impl fmt::Display for MonthGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .cells()
            .map(|cell| cell.label().chars().count())
            .chain(WEEKDAY_LABELS.iter().map(|label| label.len()))
            .max()
            .unwrap_or(3);

        writeln!(f, "{}", self.title())?;

        let header = WEEKDAY_LABELS
            .iter()
            .map(|label| format!("{label:<width$}"))
            .collect::<Vec<_>>();
        writeln!(f, "{}", header.join(" | ").trim_end())?;

        for week in &self.weeks {
            let row = week
                .iter()
                .map(|cell| format!("{:<width$}", cell.label()))
                .collect::<Vec<_>>();
            writeln!(f, "{}", row.join(" | ").trim_end())?;
        }

        Ok(())
    }
}

pub fn days_in_month(year: i32, month: Month) -> Result<u8> {
    Date::from_calendar_date(year, month, 1)?;

    Ok((28..=31)
        .rev()
        .find(|day| Date::from_calendar_date(year, month, *day).is_ok())
        .unwrap_or(28))
}

/// Lays out `year`/`month` and annotates the days that carry a visit.
///
/// Visits outside the month are ignored. When several visits fall on the same
/// day the last one in `visits` wins the cell.
pub fn build_grid(year: i32, month: Month, visits: &[VisitRecord]) -> Result<MonthGrid> {
    let first = Date::from_calendar_date(year, month, 1)?;
    let days = days_in_month(year, month)?;
    let leading = first.weekday().number_days_from_monday() as usize;
    let position = |day: u8| leading + day as usize - 1;

    let rows = (leading + days as usize).div_ceil(7);
    let mut weeks = vec![std::array::from_fn::<_, 7, _>(|_| CalendarCell::Empty); rows];

    for day in 1..=days {
        let pos = position(day);
        weeks[pos / 7][pos % 7] = CalendarCell::Day(day);
    }

    for visit in visits
        .iter()
        .filter(|v| v.visit_date.year() == year && v.visit_date.month() == month)
    {
        let day = visit.visit_date.day();
        let pos = position(day);
        weeks[pos / 7][pos % 7] = CalendarCell::Visit {
            day,
            client_name: visit.client_name.to_owned(),
            visit_type: visit.visit_type,
        };
    }

    Ok(MonthGrid { year, month, weeks })
}

/// Consecutive months to render, starting with the month of `today`.
pub fn display_window(today: Date, months: u32) -> Vec<(i32, Month)> {
    let mut window = Vec::with_capacity(months as usize);
    let mut year = today.year();
    let mut month = today.month();

    for _ in 0..months {
        window.push((year, month));
        month = month.next();
        if month == Month::January {
            year += 1;
        }
    }

    window
}
