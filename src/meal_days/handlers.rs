use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use time::Date;
use tracing::instrument;

use crate::state::AppState;

use super::dto::{DateRangeQuery, MealDayView, PutMealDayRequest};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/meal-days", get(list_meal_days))
        .route("/meal-days/:date", get(get_meal_day).put(put_meal_day))
}

#[instrument(skip(state))]
async fn list_meal_days(
    State(state): State<AppState>,
    Query(range): Query<DateRangeQuery>,
) -> Result<Json<Vec<MealDayView>>, (StatusCode, String)> {
    let days = state
        .meal_days
        .find_by_date_range(range.start, range.end)
        .await
        .map_err(internal)?;

    Ok(Json(days.into_iter().map(MealDayView::from).collect()))
}

#[instrument(skip(state))]
async fn get_meal_day(
    State(state): State<AppState>,
    Path(date): Path<Date>,
) -> Result<Json<MealDayView>, (StatusCode, String)> {
    let day = state.meal_days.find_by_date(date).await.map_err(internal)?;

    Ok(Json(day.into()))
}

#[instrument(skip(state, body))]
async fn put_meal_day(
    State(state): State<AppState>,
    Path(date): Path<Date>,
    Json(body): Json<PutMealDayRequest>,
) -> Result<Json<MealDayView>, (StatusCode, String)> {
    let day = state
        .meal_days
        .upsert(body.into_meal_day(date))
        .await
        .map_err(internal)?;

    Ok(Json(day.into()))
}

fn internal<E: std::error::Error>(e: E) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}
