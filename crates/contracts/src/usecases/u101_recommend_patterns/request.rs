use serde::{Deserialize, Serialize};

/// Тело запроса `POST /recommend`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendRequest {
    /// Описание сценария, уже прошедшее trim
    pub use_case: String,
}

impl RecommendRequest {
    pub fn new(use_case: impl Into<String>) -> Self {
        Self {
            use_case: use_case.into(),
        }
    }
}
