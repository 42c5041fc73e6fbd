use serde::{Deserialize, Serialize};
use time::Date;

use crate::nutrition::repo_types::{Nutrition, TotalDailyEnergyExpenditure};

#[derive(Debug, Deserialize)]
pub struct DateRangeQuery {
    pub start: Date,
    pub end: Date,
}

/// API view of one day's entry. Weight crosses the boundary as fractional
/// kilograms; the domain carries integer grams.
#[derive(Debug, Serialize)]
pub struct NutritionView {
    pub date: Date,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl From<Nutrition> for NutritionView {
    fn from(nutrition: Nutrition) -> Self {
        Self {
            date: nutrition.date,
            calories: nutrition.calories,
            weight: nutrition.weight.map(grams_to_kilograms),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PutNutritionRequest {
    #[serde(default)]
    pub calories: Option<i32>,
    /// Kilograms, e.g. 79.5.
    #[serde(default)]
    pub weight: Option<f64>,
}

impl PutNutritionRequest {
    pub fn into_nutrition(self, date: Date) -> Nutrition {
        Nutrition {
            date,
            calories: self.calories,
            weight: self.weight.map(kilograms_to_grams),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TotalDailyEnergyExpenditureView {
    pub start: Date,
    pub end: Date,
    pub average_calories: i32,
    /// Kilograms; negative means weight loss.
    pub period_weight_difference: f64,
    pub total_daily_energy_expenditure: i32,
}

impl From<TotalDailyEnergyExpenditure> for TotalDailyEnergyExpenditureView {
    fn from(tdee: TotalDailyEnergyExpenditure) -> Self {
        Self {
            start: tdee.start,
            end: tdee.end,
            average_calories: tdee.average_calories,
            period_weight_difference: grams_to_kilograms(tdee.period_weight_difference),
            total_daily_energy_expenditure: tdee.total_daily_energy_expenditure,
        }
    }
}

fn grams_to_kilograms(grams: i32) -> f64 {
    f64::from(grams) / 1000.0
}

fn kilograms_to_grams(kilograms: f64) -> i32 {
    (kilograms * 1000.0).round() as i32
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    #[test]
    fn weight_round_trips_through_kilograms() {
        let request = PutNutritionRequest {
            calories: Some(2100),
            weight: Some(79.5),
        };

        let nutrition = request.into_nutrition(date!(2024 - 07 - 03));
        assert_eq!(nutrition.weight, Some(79_500));

        let view = NutritionView::from(nutrition);
        assert_eq!(view.weight, Some(79.5));
    }

    #[test]
    fn absent_fields_stay_absent_across_the_boundary() {
        let request = PutNutritionRequest {
            calories: None,
            weight: None,
        };

        let nutrition = request.into_nutrition(date!(2024 - 07 - 03));
        assert!(nutrition.calories.is_none());
        assert!(nutrition.weight.is_none());

        let view = NutritionView::from(nutrition);
        assert!(view.calories.is_none());
        assert!(view.weight.is_none());
    }

    #[test]
    fn weight_difference_is_exposed_in_kilograms() {
        let view = TotalDailyEnergyExpenditureView::from(TotalDailyEnergyExpenditure {
            start: date!(2024 - 07 - 08),
            end: date!(2024 - 07 - 15),
            average_calories: 2000,
            period_weight_difference: -1000,
            total_daily_energy_expenditure: -5700,
        });

        assert_eq!(view.period_weight_difference, -1.0);
    }
}
