use serde::{Deserialize, Serialize};

/// Form fields posted to the index page.
///
/// `summarize` and `dictionary` are the submit buttons: their presence selects
/// the action, their value is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmissionForm {
    #[serde(default)]
    pub summarize: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub dictionary: Option<String>,
    #[serde(default)]
    pub word: Option<String>,
}

impl SubmissionForm {
    pub fn wants_summary(&self) -> bool {
        self.summarize.is_some()
    }

    pub fn wants_dictionary(&self) -> bool {
        self.dictionary.is_some()
    }
}

/// Everything the index page renders after a request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageView {
    /// Absent unless a summary was requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub meanings: Vec<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
    #[serde(default)]
    pub examples: Vec<String>,
    /// Translation of the first meaning, when one was produced
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    /// Most recent lookups, newest first
    #[serde(default)]
    pub history: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
