use std::collections::VecDeque;

use tokio::sync::RwLock;

/// Words looked up during the life of the process, newest first.
///
/// A word is added only the first time it is seen. Looking it up again does
/// not move it. Matching is exact and case-sensitive.
#[derive(Debug, Default)]
pub struct HistoryStore {
    entries: RwLock<VecDeque<String>>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a lookup. Returns true when the word was new.
    pub async fn record(&self, word: &str) -> bool {
        // Held across the check and the insert
        let mut entries = self.entries.write().await;

        if entries.iter().any(|w| w == word) {
            return false;
        }

        entries.push_front(word.to_string());
        true
    }

    /// Up to `limit` most recent words
    pub async fn recent(&self, limit: usize) -> Vec<String> {
        let entries = self.entries.read().await;
        entries.iter().take(limit).cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
