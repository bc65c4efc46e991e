use serde::Serialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};
use time::Date;
use validator::Validate;

use crate::{Error, Result};

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

#[derive(
    Display, EnumString, AsRefStr, VariantArray, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash,
)]
pub enum VisitType {
    OnSite,
    Remote,
}

impl VisitType {
    /// Category tag used by renderers to style a calendar cell.
    pub fn category(&self) -> &'static str {
        match self {
            VisitType::OnSite => "onsite",
            VisitType::Remote => "remote",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            VisitType::OnSite => "blue",
            VisitType::Remote => "green",
        }
    }
}

fn validate_not_blank(value: &str) -> std::result::Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("blank_name")
            .with_message("Name must not be blank".into()));
    }

    Ok(())
}

#[derive(Validate, Clone, Debug, PartialEq)]
pub struct ClientInput {
    #[validate(
        length(min = 1, message = "Name must not be empty"),
        custom(function = "validate_not_blank")
    )]
    pub name: String,
    pub tier_count: i64,
    pub start_date: Date,
}

impl ClientInput {
    pub fn new(name: impl Into<String>, tier_count: i64, start_date: Date) -> Self {
        Self {
            name: name.into(),
            tier_count,
            start_date,
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct VisitRecord {
    pub client_name: String,
    pub tier_count: i64,
    #[serde(with = "iso_date")]
    pub origin_date: Date,
    #[serde(with = "iso_date")]
    pub visit_date: Date,
    pub visit_type: VisitType,
}

/// Parses a `YYYY-MM-DD` date as submitted by the input surfaces.
pub fn parse_date(value: &str) -> Result<Date> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::InvalidDate(value.to_owned()));
    }

    Date::parse(value, time::macros::format_description!("[year]-[month]-[day]"))
        .map_err(|_| Error::InvalidDate(value.to_owned()))
}
