use time::Month;

use crate::{ClientInput, Error, FrequencyRules, Result, VisitRecord};

/// Session-scoped list of projected visits, in insertion order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ScheduleStore {
    visits: Vec<VisitRecord>,
}

impl ScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Projects `input` and appends the resulting visits.
    ///
    /// Nothing is appended when the projection fails. Returns the number of
    /// visits added.
    pub fn add_client(
        &mut self,
        input: &ClientInput,
        rules: &FrequencyRules,
        horizon_count: u32,
    ) -> Result<usize> {
        let visits = crate::project(input, rules, horizon_count)?;
        let added = visits.len();
        self.extend(visits);

        tracing::info!(
            client = %input.name,
            number = input.tier_count,
            start = %input.start_date,
            added,
            total = self.visits.len(),
            "client added to schedule"
        );

        Ok(added)
    }

    pub fn extend(&mut self, visits: impl IntoIterator<Item = VisitRecord>) {
        self.visits.extend(visits);
    }

    /// Removes the visit at `index`, shifting every later visit down by one.
    pub fn remove(&mut self, index: usize) -> Result<VisitRecord> {
        if index >= self.visits.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.visits.len(),
            });
        }

        let removed = self.visits.remove(index);

        tracing::info!(
            index,
            client = %removed.client_name,
            visit_date = %removed.visit_date,
            "visit removed from schedule"
        );

        Ok(removed)
    }

    pub fn visits(&self) -> &[VisitRecord] {
        &self.visits
    }

    pub fn len(&self) -> usize {
        self.visits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VisitRecord> {
        self.visits.iter()
    }

    pub fn in_month(&self, year: i32, month: Month) -> impl Iterator<Item = &VisitRecord> {
        self.visits
            .iter()
            .filter(move |v| v.visit_date.year() == year && v.visit_date.month() == month)
    }
}

impl<'a> IntoIterator for &'a ScheduleStore {
    type Item = &'a VisitRecord;
    type IntoIter = std::slice::Iter<'a, VisitRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.visits.iter()
    }
}
