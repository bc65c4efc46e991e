use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};
use validator::Validate;

use crate::{Error, Result, VisitType};

/// Number of on-site/remote pairs projected for every client.
pub const DEFAULT_HORIZON_COUNT: u32 = 39;

pub const THREE_YEARS_IN_WEEKS: u32 = 156;

/// Upper bound accepted for a configured horizon.
pub const MAX_HORIZON_COUNT: u32 = 1_000;

#[derive(Display, EnumString, AsRefStr, VariantArray, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TierBucket {
    #[strum(serialize = "1to20")]
    OneToTwenty,
    #[strum(serialize = "21to50")]
    TwentyOneToFifty,
    #[strum(serialize = "+50")]
    OverFifty,
}

impl TierBucket {
    pub fn from_count(count: i64) -> Result<Self> {
        match count {
            1..=20 => Ok(TierBucket::OneToTwenty),
            21..=50 => Ok(TierBucket::TwentyOneToFifty),
            51.. => Ok(TierBucket::OverFifty),
            _ => Err(Error::InvalidTier(count)),
        }
    }
}

/// Interval in weeks for each tier bucket of one visit type.
#[derive(Debug, Deserialize, Validate, Clone, Copy, PartialEq, Eq)]
pub struct BucketWeeks {
    #[serde(rename = "1to20")]
    #[validate(range(min = 1, message = "Interval must be at least one week"))]
    pub one_to_twenty: u32,
    #[serde(rename = "21to50")]
    #[validate(range(min = 1, message = "Interval must be at least one week"))]
    pub twenty_one_to_fifty: u32,
    #[serde(rename = "+50")]
    #[validate(range(min = 1, message = "Interval must be at least one week"))]
    pub over_fifty: u32,
}

impl BucketWeeks {
    pub fn get(&self, bucket: TierBucket) -> u32 {
        match bucket {
            TierBucket::OneToTwenty => self.one_to_twenty,
            TierBucket::TwentyOneToFifty => self.twenty_one_to_fifty,
            TierBucket::OverFifty => self.over_fifty,
        }
    }

    pub fn uniform(weeks: u32) -> Self {
        Self {
            one_to_twenty: weeks,
            twenty_one_to_fifty: weeks,
            over_fifty: weeks,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intervals {
    pub onsite: u32,
    pub remote: u32,
}

/// Visit frequency table keyed by visit type and tier bucket.
#[derive(Debug, Deserialize, Validate, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyRules {
    #[validate(nested)]
    pub onsite: BucketWeeks,
    #[validate(nested)]
    pub remote: BucketWeeks,
}

impl Default for FrequencyRules {
    fn default() -> Self {
        Self {
            onsite: BucketWeeks {
                one_to_twenty: 8,
                twenty_one_to_fifty: 6,
                over_fifty: 4,
            },
            remote: BucketWeeks::uniform(2),
        }
    }
}

impl FrequencyRules {
    pub fn interval(&self, visit_type: VisitType, bucket: TierBucket) -> u32 {
        match visit_type {
            VisitType::OnSite => self.onsite.get(bucket),
            VisitType::Remote => self.remote.get(bucket),
        }
    }

    pub fn intervals(&self, bucket: TierBucket) -> Intervals {
        Intervals {
            onsite: self.onsite.get(bucket),
            remote: self.remote.get(bucket),
        }
    }

    pub fn min_onsite_weeks(&self) -> u32 {
        self.onsite
            .one_to_twenty
            .min(self.onsite.twenty_one_to_fifty)
            .min(self.onsite.over_fifty)
    }

    /// Whether every tier gets at least three years of on-site visits with `horizon_count` pairs.
    pub fn covers_three_years(&self, horizon_count: u32) -> bool {
        horizon_count.saturating_mul(self.min_onsite_weeks()) >= THREE_YEARS_IN_WEEKS
    }
}
