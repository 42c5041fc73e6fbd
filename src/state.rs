use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::AppConfig;
use crate::meal_days::repo::PgMealDayStore;
use crate::meal_days::services::MealDayService;
use crate::nutrition::repo::PgNutritionStore;
use crate::nutrition::services::NutritionService;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Arc<AppConfig>,
    pub meal_days: MealDayService,
    pub nutrition: NutritionService,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let db = PgPoolOptions::new()
            .max_connections(10)
            .connect(&config.database_url)
            .await
            .context("connect to database")?;

        Ok(Self::from_parts(db, config))
    }

    pub fn from_parts(db: PgPool, config: Arc<AppConfig>) -> Self {
        let meal_days = MealDayService::new(Arc::new(PgMealDayStore::new(db.clone())));
        let nutrition = NutritionService::new(Arc::new(PgNutritionStore::new(db.clone())));

        Self {
            db,
            config,
            meal_days,
            nutrition,
        }
    }
}
