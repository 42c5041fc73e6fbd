use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use time::Date;

use crate::error::StoreError;
use crate::nutrition::repo_types::{AverageNutrition, Nutrition};

/// Persistence port for nutrition entries.
///
/// `find_average_nutrition` aggregates store-side; the service trusts the
/// returned averages. `delete` is part of the port contract but unused by
/// the service layer.
#[async_trait]
pub trait NutritionStore: Send + Sync {
    async fn find_by_date(&self, date: Date) -> Result<Nutrition, StoreError>;
    async fn find_by_date_range(&self, start: Date, end: Date)
        -> Result<Vec<Nutrition>, StoreError>;
    async fn find_average_nutrition(
        &self,
        start: Date,
        end: Date,
    ) -> Result<AverageNutrition, StoreError>;
    async fn create(&self, nutrition: Nutrition) -> Result<Nutrition, StoreError>;
    async fn update(&self, nutrition: Nutrition) -> Result<Nutrition, StoreError>;
    async fn delete(&self, nutrition: Nutrition) -> Result<(), StoreError>;
}

#[derive(Debug, FromRow)]
struct NutritionRow {
    date: Date,
    calories: Option<i32>,
    weight: Option<i32>,
}

impl From<NutritionRow> for Nutrition {
    fn from(row: NutritionRow) -> Self {
        Self {
            date: row.date,
            calories: row.calories,
            weight: row.weight,
        }
    }
}

#[derive(Debug, FromRow)]
struct AverageRow {
    calories: Option<i32>,
    weight: Option<i32>,
}

#[derive(Clone)]
pub struct PgNutritionStore {
    db: PgPool,
}

impl PgNutritionStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl NutritionStore for PgNutritionStore {
    async fn find_by_date(&self, date: Date) -> Result<Nutrition, StoreError> {
        let row = sqlx::query_as::<_, NutritionRow>(
            r#"
            SELECT date, calories, weight
            FROM nutrition
            WHERE date = $1
            "#,
        )
        .bind(date)
        .fetch_optional(&self.db)
        .await?;

        row.map(Nutrition::from).ok_or(StoreError::NotFound(date))
    }

    async fn find_by_date_range(
        &self,
        start: Date,
        end: Date,
    ) -> Result<Vec<Nutrition>, StoreError> {
        let rows = sqlx::query_as::<_, NutritionRow>(
            r#"
            SELECT date, calories, weight
            FROM nutrition
            WHERE date >= $1 AND date <= $2
            ORDER BY date ASC
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Nutrition::from).collect())
    }

    async fn find_average_nutrition(
        &self,
        start: Date,
        end: Date,
    ) -> Result<AverageNutrition, StoreError> {
        let row = sqlx::query_as::<_, AverageRow>(
            r#"
            SELECT ROUND(AVG(calories))::INT4 AS calories, ROUND(AVG(weight))::INT4 AS weight
            FROM nutrition
            WHERE date >= $1 AND date <= $2
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_one(&self.db)
        .await?;

        match (row.calories, row.weight) {
            (Some(calories), Some(weight)) => Ok(AverageNutrition { calories, weight }),
            _ => Err(StoreError::NoAggregateData { start, end }),
        }
    }

    async fn create(&self, nutrition: Nutrition) -> Result<Nutrition, StoreError> {
        let row = sqlx::query_as::<_, NutritionRow>(
            r#"
            INSERT INTO nutrition (date, calories, weight)
            VALUES ($1, $2, $3)
            RETURNING date, calories, weight
            "#,
        )
        .bind(nutrition.date)
        .bind(nutrition.calories)
        .bind(nutrition.weight)
        .fetch_one(&self.db)
        .await?;

        Ok(row.into())
    }

    async fn update(&self, nutrition: Nutrition) -> Result<Nutrition, StoreError> {
        let row = sqlx::query_as::<_, NutritionRow>(
            r#"
            UPDATE nutrition
            SET calories = $2, weight = $3
            WHERE date = $1
            RETURNING date, calories, weight
            "#,
        )
        .bind(nutrition.date)
        .bind(nutrition.calories)
        .bind(nutrition.weight)
        .fetch_one(&self.db)
        .await?;

        Ok(row.into())
    }

    async fn delete(&self, nutrition: Nutrition) -> Result<(), StoreError> {
        sqlx::query(r#"DELETE FROM nutrition WHERE date = $1"#)
            .bind(nutrition.date)
            .execute(&self.db)
            .await?;

        Ok(())
    }
}
