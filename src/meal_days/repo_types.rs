use time::Date;

/// One day's meal plan. Identity is the calendar date; there is at most one
/// record per day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealDay {
    pub date: Date,
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
    pub snacks: Vec<String>,
}

impl MealDay {
    /// The "no plan yet" state for a day without a stored record.
    pub fn empty(date: Date) -> Self {
        Self {
            date,
            breakfast: String::new(),
            lunch: String::new(),
            dinner: String::new(),
            snacks: Vec::new(),
        }
    }
}
