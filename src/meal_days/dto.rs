use serde::{Deserialize, Serialize};
use time::Date;

use crate::meal_days::repo_types::MealDay;

#[derive(Debug, Deserialize)]
pub struct DateRangeQuery {
    pub start: Date,
    pub end: Date,
}

#[derive(Debug, Serialize)]
pub struct MealDayView {
    pub date: Date,
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
    pub snacks: Vec<String>,
}

impl From<MealDay> for MealDayView {
    fn from(day: MealDay) -> Self {
        Self {
            date: day.date,
            breakfast: day.breakfast,
            lunch: day.lunch,
            dinner: day.dinner,
            snacks: day.snacks,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PutMealDayRequest {
    #[serde(default)]
    pub breakfast: String,
    #[serde(default)]
    pub lunch: String,
    #[serde(default)]
    pub dinner: String,
    #[serde(default)]
    pub snacks: Vec<String>,
}

impl PutMealDayRequest {
    pub fn into_meal_day(self, date: Date) -> MealDay {
        MealDay {
            date,
            breakfast: self.breakfast,
            lunch: self.lunch,
            dinner: self.dinner,
            snacks: self.snacks,
        }
    }
}
