use time::{Date, Duration};
use validator::Validate;

use crate::{
    ClientInput, Error, FrequencyRules, MAX_HORIZON_COUNT, Result, TierBucket, VisitRecord,
    VisitType,
};

/// Projects `horizon_count` on-site/remote pairs for a client.
///
/// On-site visits form an arithmetic progression from `start_date` with the
/// tier's on-site interval. Each remote visit is offset from its paired
/// on-site visit and never moves the on-site cursor.
pub fn project(
    client: &ClientInput,
    rules: &FrequencyRules,
    horizon_count: u32,
) -> Result<Vec<VisitRecord>> {
    let bucket = TierBucket::from_count(client.tier_count)?;
    client.validate()?;
    rules.validate()?;

    let intervals = rules.intervals(bucket);
    let onsite_step = Duration::weeks(intervals.onsite.into());
    let remote_offset = Duration::weeks(intervals.remote.into());

    let mut visits = Vec::with_capacity(horizon_count.min(MAX_HORIZON_COUNT) as usize * 2);
    let mut cursor = client.start_date;

    for _ in 0..horizon_count {
        cursor = advance(cursor, onsite_step)?;
        visits.push(visit(client, cursor, VisitType::OnSite));
        visits.push(visit(
            client,
            advance(cursor, remote_offset)?,
            VisitType::Remote,
        ));
    }

    tracing::debug!(
        client = %client.name,
        bucket = %bucket,
        onsite_weeks = intervals.onsite,
        remote_weeks = intervals.remote,
        visits = visits.len(),
        "projected visit schedule"
    );

    Ok(visits)
}

fn advance(date: Date, by: Duration) -> Result<Date> {
    date.checked_add(by).ok_or(Error::DateOutOfRange)
}

fn visit(client: &ClientInput, visit_date: Date, visit_type: VisitType) -> VisitRecord {
    VisitRecord {
        client_name: client.name.to_owned(),
        tier_count: client.tier_count,
        origin_date: client.start_date,
        visit_date,
        visit_type,
    }
}
