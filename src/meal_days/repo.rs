use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use time::Date;

use crate::error::StoreError;
use crate::meal_days::repo_types::MealDay;

/// Persistence port for meal-day records.
///
/// `delete` is part of the port contract but unused by the service layer.
#[async_trait]
pub trait MealDayStore: Send + Sync {
    async fn find_by_date(&self, date: Date) -> Result<MealDay, StoreError>;
    async fn find_by_date_range(&self, start: Date, end: Date)
        -> Result<Vec<MealDay>, StoreError>;
    async fn create(&self, meal_day: MealDay) -> Result<MealDay, StoreError>;
    async fn update(&self, meal_day: MealDay) -> Result<MealDay, StoreError>;
    async fn delete(&self, meal_day: MealDay) -> Result<(), StoreError>;
}

#[derive(Debug, FromRow)]
struct MealDayRow {
    date: Date,
    breakfast: String,
    lunch: String,
    dinner: String,
    snacks: Vec<String>,
}

impl From<MealDayRow> for MealDay {
    fn from(row: MealDayRow) -> Self {
        Self {
            date: row.date,
            breakfast: row.breakfast,
            lunch: row.lunch,
            dinner: row.dinner,
            snacks: row.snacks,
        }
    }
}

#[derive(Clone)]
pub struct PgMealDayStore {
    db: PgPool,
}

impl PgMealDayStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MealDayStore for PgMealDayStore {
    async fn find_by_date(&self, date: Date) -> Result<MealDay, StoreError> {
        let row = sqlx::query_as::<_, MealDayRow>(
            r#"
            SELECT date, breakfast, lunch, dinner, snacks
            FROM meal_days
            WHERE date = $1
            "#,
        )
        .bind(date)
        .fetch_optional(&self.db)
        .await?;

        row.map(MealDay::from).ok_or(StoreError::NotFound(date))
    }

    async fn find_by_date_range(
        &self,
        start: Date,
        end: Date,
    ) -> Result<Vec<MealDay>, StoreError> {
        let rows = sqlx::query_as::<_, MealDayRow>(
            r#"
            SELECT date, breakfast, lunch, dinner, snacks
            FROM meal_days
            WHERE date >= $1 AND date <= $2
            ORDER BY date ASC
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(MealDay::from).collect())
    }

    async fn create(&self, meal_day: MealDay) -> Result<MealDay, StoreError> {
        let row = sqlx::query_as::<_, MealDayRow>(
            r#"
            INSERT INTO meal_days (date, breakfast, lunch, dinner, snacks)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING date, breakfast, lunch, dinner, snacks
            "#,
        )
        .bind(meal_day.date)
        .bind(&meal_day.breakfast)
        .bind(&meal_day.lunch)
        .bind(&meal_day.dinner)
        .bind(&meal_day.snacks)
        .fetch_one(&self.db)
        .await?;

        Ok(row.into())
    }

    async fn update(&self, meal_day: MealDay) -> Result<MealDay, StoreError> {
        let row = sqlx::query_as::<_, MealDayRow>(
            r#"
            UPDATE meal_days
            SET breakfast = $2, lunch = $3, dinner = $4, snacks = $5
            WHERE date = $1
            RETURNING date, breakfast, lunch, dinner, snacks
            "#,
        )
        .bind(meal_day.date)
        .bind(&meal_day.breakfast)
        .bind(&meal_day.lunch)
        .bind(&meal_day.dinner)
        .bind(&meal_day.snacks)
        .fetch_one(&self.db)
        .await?;

        Ok(row.into())
    }

    async fn delete(&self, meal_day: MealDay) -> Result<(), StoreError> {
        sqlx::query(r#"DELETE FROM meal_days WHERE date = $1"#)
            .bind(meal_day.date)
            .execute(&self.db)
            .await?;

        Ok(())
    }
}
