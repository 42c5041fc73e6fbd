use std::sync::Arc;

use time::Date;
use tracing::{debug, info};

use crate::dates::fill_date_range;
use crate::error::StoreError;
use crate::meal_days::repo::MealDayStore;
use crate::meal_days::repo_types::MealDay;

/// Stateless domain service over a [`MealDayStore`].
#[derive(Clone)]
pub struct MealDayService {
    store: Arc<dyn MealDayStore>,
}

impl MealDayService {
    pub fn new(store: Arc<dyn MealDayStore>) -> Self {
        Self { store }
    }

    /// Looks up the plan for one day. A day without a stored record is the
    /// documented "no plan yet" state, not an error.
    pub async fn find_by_date(&self, date: Date) -> Result<MealDay, StoreError> {
        info!(%date, "finding meal day");

        match self.store.find_by_date(date).await {
            Ok(meal_day) => Ok(meal_day),
            Err(StoreError::NotFound(_)) => Ok(MealDay::empty(date)),
            Err(err) => Err(err),
        }
    }

    /// Returns one plan per calendar day of `[start, end)`, ascending, with
    /// an empty plan for every day that has no stored record.
    pub async fn find_by_date_range(
        &self,
        start: Date,
        end: Date,
    ) -> Result<Vec<MealDay>, StoreError> {
        info!(%start, %end, "finding meal days by date range");

        let stored = self.store.find_by_date_range(start, end).await?;
        Ok(fill_date_range(start, end, stored, |m| m.date, MealDay::empty))
    }

    /// Create-if-absent, else overwrite, keyed by date. Every field is taken
    /// from the caller; stored values are not merged in.
    ///
    /// The find-then-write pair is not transactional: concurrent upserts for
    /// the same date race at the store level.
    pub async fn upsert(&self, meal_day: MealDay) -> Result<MealDay, StoreError> {
        info!(date = %meal_day.date, "upserting meal day");

        match self.store.find_by_date(meal_day.date).await {
            Ok(_) => {
                debug!(date = %meal_day.date, "meal day exists, updating");
                self.store.update(meal_day).await
            }
            Err(StoreError::NotFound(_)) => {
                debug!(date = %meal_day.date, "meal day not yet recorded, creating");
                self.store.create(meal_day).await
            }
            Err(err) => Err(err),
        }
    }
}
