use time::Date;

/// One day's nutrition entry. Identity is the calendar date.
///
/// `calories` is kilocalories eaten; `weight` is body weight in integer
/// grams (kilograms x 1000). `None` means "not recorded", which is distinct
/// from a recorded zero and must survive a round trip through storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nutrition {
    pub date: Date,
    pub calories: Option<i32>,
    pub weight: Option<i32>,
}

impl Nutrition {
    /// The "nothing recorded yet" state for a day without a stored entry.
    pub fn empty(date: Date) -> Self {
        Self {
            date,
            calories: None,
            weight: None,
        }
    }
}

/// Averages over a date range, computed by the store's aggregate query.
/// Weight is in grams, like [`Nutrition::weight`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AverageNutrition {
    pub calories: i32,
    pub weight: i32,
}

/// Estimated energy expenditure for a window, derived from intake and the
/// weight trend against the preceding window. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalDailyEnergyExpenditure {
    pub start: Date,
    pub end: Date,
    pub average_calories: i32,
    /// Current-period average weight minus previous-period average weight,
    /// in grams. Negative means weight loss.
    pub period_weight_difference: i32,
    pub total_daily_energy_expenditure: i32,
}
