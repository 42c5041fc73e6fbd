use std::sync::Arc;

use time::{Date, Duration};
use tracing::{debug, info};

use crate::dates::fill_date_range;
use crate::error::StoreError;
use crate::nutrition::repo::NutritionStore;
use crate::nutrition::repo_types::{Nutrition, TotalDailyEnergyExpenditure};
use crate::nutrition::tdee;

/// Stateless domain service over a [`NutritionStore`].
#[derive(Clone)]
pub struct NutritionService {
    store: Arc<dyn NutritionStore>,
}

impl NutritionService {
    pub fn new(store: Arc<dyn NutritionStore>) -> Self {
        Self { store }
    }

    /// Looks up one day's entry. A day without a stored entry comes back
    /// with both fields unrecorded, not as an error.
    pub async fn find_by_date(&self, date: Date) -> Result<Nutrition, StoreError> {
        info!(%date, "finding nutrition by date");

        match self.store.find_by_date(date).await {
            Ok(nutrition) => Ok(nutrition),
            Err(StoreError::NotFound(_)) => Ok(Nutrition::empty(date)),
            Err(err) => Err(err),
        }
    }

    /// Returns one entry per calendar day of `[start, end)`, ascending, with
    /// unrecorded fields for every day that has no stored entry.
    pub async fn find_by_date_range(
        &self,
        start: Date,
        end: Date,
    ) -> Result<Vec<Nutrition>, StoreError> {
        info!(%start, %end, "finding nutrition by date range");

        let stored = self.store.find_by_date_range(start, end).await?;
        Ok(fill_date_range(start, end, stored, |n| n.date, Nutrition::empty))
    }

    /// Create-if-absent, else overwrite, keyed by date. Every field is taken
    /// from the caller; stored values are not merged in.
    ///
    /// The find-then-write pair is not transactional: concurrent upserts for
    /// the same date race at the store level.
    pub async fn upsert(&self, nutrition: Nutrition) -> Result<Nutrition, StoreError> {
        info!(date = %nutrition.date, "upserting nutrition");

        match self.store.find_by_date(nutrition.date).await {
            Ok(_) => {
                debug!(date = %nutrition.date, "nutrition exists, updating");
                self.store.update(nutrition).await
            }
            Err(StoreError::NotFound(_)) => {
                debug!(date = %nutrition.date, "nutrition not yet recorded, creating");
                self.store.create(nutrition).await
            }
            Err(err) => Err(err),
        }
    }

    /// Estimates energy expenditure for `[start, end)` by comparing its
    /// averages against the window of equal length ending the day before
    /// `end`. Aggregate failures (no data in either window) propagate
    /// unchanged; no partial estimate is ever returned.
    pub async fn calculate_total_daily_energy_expenditure(
        &self,
        start: Date,
        end: Date,
    ) -> Result<TotalDailyEnergyExpenditure, StoreError> {
        let previous_end = end - Duration::days(1);
        let previous_start = previous_end - (end - start);

        info!(%start, %end, "calculating total daily energy expenditure");

        debug!(%previous_start, %previous_end, "finding average nutrition for previous period");
        let previous = self
            .store
            .find_average_nutrition(previous_start, previous_end)
            .await?;

        debug!(%start, %end, "finding average nutrition for current period");
        let current = self.store.find_average_nutrition(start, end).await?;

        let estimate = tdee::estimate(start, end, &previous, &current);
        debug!(
            weight_difference = estimate.period_weight_difference,
            total = estimate.total_daily_energy_expenditure,
            "calculated total daily energy expenditure"
        );

        Ok(estimate)
    }
}
