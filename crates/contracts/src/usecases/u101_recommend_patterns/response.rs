use serde::{Deserialize, Serialize};

/// Один рекомендованный паттерн
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    pub name: String,

    /// Уверенность в диапазоне 0..=1 (сервис иногда присылает проценты)
    pub confidence: f64,

    #[serde(default)]
    pub explanation: String,

    /// Может быть пустым: шаги реализации иногда приходят внутри `explanation`
    #[serde(default)]
    pub implementation: String,
}

impl Pattern {
    /// Уверенность, приведённая к 0..=1.
    ///
    /// Значения больше 1 трактуются как проценты, отрицательные обнуляются.
    pub fn normalized_confidence(&self) -> f64 {
        let value = if self.confidence > 1.0 {
            self.confidence / 100.0
        } else {
            self.confidence
        };
        if value.is_nan() {
            return 0.0;
        }
        value.clamp(0.0, 1.0)
    }
}

/// Ответ сервиса: упорядоченный список паттернов.
///
/// Поле `patterns` обязательно: тело без него не считается рекомендацией.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub patterns: Vec<Pattern>,
}

/// Ошибка, которую сервис возвращает в теле ответа.
///
/// Ключ `error` обязателен, но может быть `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceError {
    #[serde(deserialize_with = "Option::deserialize")]
    pub error: Option<String>,
}

/// Тело ответа `POST /recommend`.
///
/// Сервис может ответить `200 OK` с `{"error": "..."}`, поэтому вариант
/// с ошибкой проверяется первым.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecommendResponse {
    Failed(ServiceError),
    Success(Recommendation),
}

impl RecommendResponse {
    /// `Err` несёт текст ошибки сервиса; для `"error": null` он пустой
    pub fn into_result(self) -> Result<Recommendation, String> {
        match self {
            RecommendResponse::Success(recommendation) => Ok(recommendation),
            RecommendResponse::Failed(ServiceError { error }) => Err(error.unwrap_or_default()),
        }
    }
}
