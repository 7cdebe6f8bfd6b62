use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Form, Json, Router};
use glossa_types::{PageView, SubmissionForm};
use tracing::Instrument;
use uuid::Uuid;

use crate::handlers::{RequestError, handle_index, handle_submission};
use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index).post(submit))
        .with_state(state)
}

async fn index(State(state): State<Arc<AppState>>) -> Json<PageView> {
    Json(handle_index(&state).await)
}

async fn submit(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SubmissionForm>,
) -> Result<Json<PageView>, RequestError> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("submission", %request_id);

    async move {
        tracing::info!(
            summarize = form.wants_summary(),
            dictionary = form.wants_dictionary(),
            "Handling submission"
        );
        let view = handle_submission(&state, form).await.inspect_err(|e| {
            tracing::warn!("Rejected submission: {}", e);
        })?;
        Ok::<_, RequestError>(Json(view))
    }
    .instrument(span)
    .await
}
