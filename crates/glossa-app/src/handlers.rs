use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use glossa_types::{ErrorBody, PageView, SubmissionForm};

use crate::state::AppState;

pub mod dictionary;
pub mod summarize;

use dictionary::handle_dictionary;
use summarize::handle_summarize;

/// Failures at the request boundary
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("Missing form field '{0}'")]
    MissingField(&'static str),
}

impl RequestError {
    pub fn status(&self) -> StatusCode {
        match self {
            RequestError::MissingField(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Run the actions a submission asks for and build the page
pub async fn handle_submission(
    state: &AppState,
    form: SubmissionForm,
) -> Result<PageView, RequestError> {
    let wants_summary = form.wants_summary();
    let wants_dictionary = form.wants_dictionary();
    let SubmissionForm { text, word, .. } = form;

    // Both fields are checked before anything runs so a bad request
    // never touches history
    let text = if wants_summary {
        Some(text.ok_or(RequestError::MissingField("text"))?)
    } else {
        None
    };
    let word = if wants_dictionary {
        Some(word.ok_or(RequestError::MissingField("word"))?)
    } else {
        None
    };

    let mut view = PageView::default();

    if let Some(text) = text {
        view.summary = Some(handle_summarize(state, &text).await);
    }

    if let Some(word) = word {
        let outcome = handle_dictionary(state, &word).await;
        view.meanings = outcome.result.meanings;
        view.synonyms = outcome.result.synonyms.into_iter().collect();
        view.antonyms = outcome.result.antonyms.into_iter().collect();
        view.examples = outcome.result.examples;
        view.translation = outcome.translation;
    }

    view.history = recent_history(state).await;
    Ok(view)
}

/// The page before anything is submitted
pub async fn handle_index(state: &AppState) -> PageView {
    PageView {
        history: recent_history(state).await,
        ..PageView::default()
    }
}

async fn recent_history(state: &AppState) -> Vec<String> {
    let limit = state.config.read().await.history.display_limit;
    state.history.recent(limit).await
}
