use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use time::Date;
use tracing::{error, instrument};

use crate::error::StoreError;
use crate::state::AppState;

use super::dto::{
    DateRangeQuery, NutritionView, PutNutritionRequest, TotalDailyEnergyExpenditureView,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/nutrition", get(list_nutrition))
        .route("/nutrition/tdee", get(get_total_daily_energy_expenditure))
        .route("/nutrition/:date", get(get_nutrition).put(put_nutrition))
}

#[instrument(skip(state))]
async fn list_nutrition(
    State(state): State<AppState>,
    Query(range): Query<DateRangeQuery>,
) -> Result<Json<Vec<NutritionView>>, (StatusCode, String)> {
    let entries = state
        .nutrition
        .find_by_date_range(range.start, range.end)
        .await
        .map_err(internal)?;

    Ok(Json(entries.into_iter().map(NutritionView::from).collect()))
}

#[instrument(skip(state))]
async fn get_nutrition(
    State(state): State<AppState>,
    Path(date): Path<Date>,
) -> Result<Json<NutritionView>, (StatusCode, String)> {
    let entry = state.nutrition.find_by_date(date).await.map_err(internal)?;

    Ok(Json(entry.into()))
}

#[instrument(skip(state, body))]
async fn put_nutrition(
    State(state): State<AppState>,
    Path(date): Path<Date>,
    Json(body): Json<PutNutritionRequest>,
) -> Result<Json<NutritionView>, (StatusCode, String)> {
    let entry = state
        .nutrition
        .upsert(body.into_nutrition(date))
        .await
        .map_err(internal)?;

    Ok(Json(entry.into()))
}

#[instrument(skip(state))]
async fn get_total_daily_energy_expenditure(
    State(state): State<AppState>,
    Query(range): Query<DateRangeQuery>,
) -> Result<Json<TotalDailyEnergyExpenditureView>, (StatusCode, String)> {
    match state
        .nutrition
        .calculate_total_daily_energy_expenditure(range.start, range.end)
        .await
    {
        Ok(tdee) => Ok(Json(tdee.into())),
        Err(err @ StoreError::NoAggregateData { .. }) => {
            Err((StatusCode::NOT_FOUND, err.to_string()))
        }
        Err(err) => {
            error!(error = %err, "tdee calculation failed");
            Err(internal(err))
        }
    }
}

fn internal<E: std::error::Error>(e: E) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}
