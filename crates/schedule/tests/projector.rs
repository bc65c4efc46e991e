use time::{Duration, macros::date};
use visitplan_schedule::{
    BucketWeeks, ClientInput, DEFAULT_HORIZON_COUNT, Error, FrequencyRules, VisitType, project,
};

fn seven_three_rules() -> FrequencyRules {
    FrequencyRules {
        onsite: BucketWeeks {
            one_to_twenty: 7,
            twenty_one_to_fifty: 5,
            over_fifty: 4,
        },
        remote: BucketWeeks::uniform(3),
    }
}

#[test]
fn test_first_visits_for_small_client() -> anyhow::Result<()> {
    let client = ClientInput::new("Acme", 10, date!(2024-01-01));
    let visits = project(&client, &seven_three_rules(), DEFAULT_HORIZON_COUNT)?;

    assert_eq!(visits[0].visit_type, VisitType::OnSite);
    assert_eq!(visits[0].visit_date, date!(2024-02-19));
    assert_eq!(visits[1].visit_type, VisitType::Remote);
    assert_eq!(visits[1].visit_date, date!(2024-03-11));
    assert_eq!(visits[2].visit_type, VisitType::OnSite);
    assert_eq!(visits[2].visit_date, date!(2024-04-08));

    for visit in &visits {
        assert_eq!(visit.client_name, "Acme");
        assert_eq!(visit.tier_count, 10);
        assert_eq!(visit.origin_date, date!(2024-01-01));
    }

    Ok(())
}

#[test]
fn test_full_horizon_alternates_and_keeps_onsite_step() -> anyhow::Result<()> {
    let rules = FrequencyRules::default();

    for (count, onsite_weeks) in [(1, 8), (20, 8), (21, 6), (50, 6), (51, 4), (300, 4)] {
        let client = ClientInput::new("Client", count, date!(2025-06-15));
        let visits = project(&client, &rules, DEFAULT_HORIZON_COUNT)?;

        assert_eq!(visits.len(), 78, "number {count}");

        let step = Duration::weeks(onsite_weeks);
        let mut previous = client.start_date;

        for pair in visits.chunks(2) {
            assert_eq!(pair[0].visit_type, VisitType::OnSite);
            assert_eq!(pair[1].visit_type, VisitType::Remote);
            assert_eq!(pair[0].visit_date - previous, step, "number {count}");
            assert_eq!(pair[1].visit_date - pair[0].visit_date, Duration::weeks(2));
            previous = pair[0].visit_date;
        }

        assert!(visits.iter().all(|v| v.visit_date >= client.start_date));
    }

    Ok(())
}

#[test]
fn test_remote_offset_does_not_compound() -> anyhow::Result<()> {
    let client = ClientInput::new("Acme", 30, date!(2024-01-01));
    let visits = project(&client, &seven_three_rules(), 3)?;

    let remote = visits
        .iter()
        .filter(|v| v.visit_type == VisitType::Remote)
        .map(|v| v.visit_date)
        .collect::<Vec<_>>();

    // 21to50: on-site every 5 weeks, remote 3 weeks after each on-site visit
    assert_eq!(
        remote,
        vec![date!(2024-02-26), date!(2024-04-01), date!(2024-05-06)]
    );

    Ok(())
}

#[test]
fn test_non_positive_number_produces_nothing() {
    for count in [0, -5] {
        let client = ClientInput::new("Acme", count, date!(2024-01-01));

        assert!(matches!(
            project(&client, &FrequencyRules::default(), DEFAULT_HORIZON_COUNT),
            Err(Error::InvalidTier(c)) if c == count
        ));
    }
}

#[test]
fn test_projection_is_deterministic() -> anyhow::Result<()> {
    let client = ClientInput::new("Acme", 42, date!(2024-07-04));
    let rules = FrequencyRules::default();

    assert_eq!(
        project(&client, &rules, DEFAULT_HORIZON_COUNT)?,
        project(&client, &rules, DEFAULT_HORIZON_COUNT)?
    );

    Ok(())
}
