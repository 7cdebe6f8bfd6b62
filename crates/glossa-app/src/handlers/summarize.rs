use glossa_core::summarizer::summarize;

use crate::state::AppState;

pub async fn handle_summarize(state: &AppState, text: &str) -> String {
    let sentences = state.config.read().await.summarizer.sentences;

    let summary = summarize(&state.processor, text, sentences);
    tracing::debug!(
        "Summarized {} chars into {} chars",
        text.len(),
        summary.len()
    );
    summary
}
