use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    use_cases::waitlist::WaitlistUseCases,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/waitlist",
            post(join_waitlist).fallback(method_not_allowed),
        )
        .route(
            "/waitlist-count",
            get(waitlist_count).fallback(method_not_allowed),
        )
}

#[derive(Debug, Deserialize)]
pub struct JoinWaitlistRequest {
    #[serde(default)]
    pub email: String,
}

#[derive(Serialize)]
struct MessageResponse {
    message: &'static str,
}

#[derive(Serialize)]
struct CountResponse {
    count: u64,
}

async fn join_waitlist(
    State(waitlist): State<Arc<WaitlistUseCases>>,
    payload: Result<Json<JoinWaitlistRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    // A body we cannot read as `{ email: string }` is the same client error as a bad address.
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Unreadable waitlist payload");
        AppError::InvalidInput("Invalid email address".into())
    })?;

    waitlist.join(&payload.email).await?;

    Ok(Json(MessageResponse { message: "Success" }))
}

async fn waitlist_count(
    State(waitlist): State<Arc<WaitlistUseCases>>,
) -> AppResult<impl IntoResponse> {
    let count = waitlist.count().await?;
    Ok(Json(CountResponse { count }))
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
