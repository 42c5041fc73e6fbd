use time::Date;

use crate::nutrition::repo_types::{AverageNutrition, TotalDailyEnergyExpenditure};

/// Energy equivalent of one kilogram of body fat, in kilocalories.
pub const CALORIES_PER_KILOGRAM_BODY_FAT: i64 = 7700;

/// Weights are carried in integer grams.
const GRAMS_PER_KILOGRAM: i64 = 1000;

/// Estimates total daily energy expenditure for `[start, end)` from the
/// window's averages and the averages of the preceding window.
///
/// The weight trend converts to calories at 7700 kcal per kilogram. The
/// multiplication runs before the gram-to-kilogram division, in `i64`, so
/// sub-kilogram differences stay exact instead of truncating to zero.
pub fn estimate(
    start: Date,
    end: Date,
    previous: &AverageNutrition,
    current: &AverageNutrition,
) -> TotalDailyEnergyExpenditure {
    let weight_difference = current.weight - previous.weight;

    let calorie_difference =
        (i64::from(weight_difference) * CALORIES_PER_KILOGRAM_BODY_FAT / GRAMS_PER_KILOGRAM) as i32;

    TotalDailyEnergyExpenditure {
        start,
        end,
        average_calories: current.calories,
        period_weight_difference: weight_difference,
        total_daily_energy_expenditure: current.calories + calorie_difference,
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    #[test]
    fn seven_day_window_with_one_kilogram_loss() {
        let previous = AverageNutrition {
            calories: 2200,
            weight: 80_000,
        };
        let current = AverageNutrition {
            calories: 2000,
            weight: 79_000,
        };

        let tdee = estimate(date!(2024 - 07 - 08), date!(2024 - 07 - 15), &previous, &current);

        assert_eq!(tdee.start, date!(2024 - 07 - 08));
        assert_eq!(tdee.end, date!(2024 - 07 - 15));
        assert_eq!(tdee.average_calories, 2000);
        assert_eq!(tdee.period_weight_difference, -1000);
        assert_eq!(tdee.total_daily_energy_expenditure, 2000 - 7700);
    }

    #[test]
    fn sub_kilogram_difference_is_exact() {
        let previous = AverageNutrition {
            calories: 2500,
            weight: 80_000,
        };
        let current = AverageNutrition {
            calories: 2500,
            weight: 79_500,
        };

        let tdee = estimate(date!(2024 - 07 - 01), date!(2024 - 07 - 08), &previous, &current);

        assert_eq!(tdee.period_weight_difference, -500);
        assert_eq!(tdee.total_daily_energy_expenditure, 2500 - 3850);
    }

    #[test]
    fn weight_gain_raises_the_estimate() {
        let previous = AverageNutrition {
            calories: 2000,
            weight: 79_000,
        };
        let current = AverageNutrition {
            calories: 2600,
            weight: 80_000,
        };

        let tdee = estimate(date!(2024 - 07 - 01), date!(2024 - 07 - 08), &previous, &current);

        assert_eq!(tdee.period_weight_difference, 1000);
        assert_eq!(tdee.total_daily_energy_expenditure, 2600 + 7700);
    }

    #[test]
    fn stable_weight_means_intake_equals_expenditure() {
        let average = AverageNutrition {
            calories: 2300,
            weight: 75_250,
        };

        let tdee = estimate(date!(2024 - 07 - 01), date!(2024 - 07 - 08), &average, &average);

        assert_eq!(tdee.period_weight_difference, 0);
        assert_eq!(tdee.total_daily_energy_expenditure, 2300);
    }
}
