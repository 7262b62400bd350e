use contracts::usecases::u101_recommend_patterns::UseCaseValidationError;
use thiserror::Error;

/// Сообщение, если у ошибки нет собственного текста
pub const FALLBACK_MESSAGE: &str =
    "An error occurred while processing your request. Please try again.";

/// Сообщения браузеров о недоступном сервере (Chrome, Firefox, Safari)
const UNREACHABLE_MARKERS: [&str; 3] = ["Failed to fetch", "NetworkError", "Load failed"];

/// Ошибка отправки описания. `Display` — текст для пользователя.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecommendError {
    #[error(transparent)]
    Validation(#[from] UseCaseValidationError),

    /// Сервис ответил статусом вне 2xx
    #[error("Error processing your request.")]
    Server { status: u16 },

    #[error("Could not connect to the server. Please check that the recommendation backend is running and try again.")]
    NetworkUnreachable,

    /// Сервис вернул `{"error": "..."}` в теле ответа
    #[error("{}", message_or_fallback(.0))]
    Service(String),

    #[error("{}", message_or_fallback(.0))]
    Unknown(String),
}

impl RecommendError {
    /// Классифицирует сообщение транспортной ошибки fetch
    pub fn from_transport_message(message: &str) -> Self {
        if UNREACHABLE_MARKERS
            .iter()
            .any(|marker| message.contains(marker))
        {
            RecommendError::NetworkUnreachable
        } else {
            RecommendError::Unknown(message.to_string())
        }
    }
}

impl From<gloo_net::Error> for RecommendError {
    fn from(error: gloo_net::Error) -> Self {
        match error {
            gloo_net::Error::JsError(js) => RecommendError::from_transport_message(&js.message),
            gloo_net::Error::GlooError(message) => RecommendError::from_transport_message(&message),
            other => RecommendError::Unknown(other.to_string()),
        }
    }
}

fn message_or_fallback(message: &str) -> &str {
    if message.trim().is_empty() {
        FALLBACK_MESSAGE
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_to_fetch_is_unreachable() {
        let err = RecommendError::from_transport_message("Failed to fetch");
        assert_eq!(err, RecommendError::NetworkUnreachable);
        assert!(err.to_string().contains("recommendation backend is running"));

        assert_eq!(
            RecommendError::from_transport_message("NetworkError when attempting to fetch resource."),
            RecommendError::NetworkUnreachable
        );
    }

    #[test]
    fn test_other_errors_surface_own_message() {
        let err = RecommendError::from_transport_message("The operation was aborted.");
        assert_eq!(err.to_string(), "The operation was aborted.");
    }

    #[test]
    fn test_empty_message_uses_fallback() {
        assert_eq!(RecommendError::Unknown(String::new()).to_string(), FALLBACK_MESSAGE);
        assert_eq!(RecommendError::Service("  ".to_string()).to_string(), FALLBACK_MESSAGE);
    }

    #[test]
    fn test_transport_error_conversion() {
        let err = RecommendError::from(gloo_net::Error::GlooError("Failed to fetch".to_string()));
        assert_eq!(err, RecommendError::NetworkUnreachable);

        let err = RecommendError::from(gloo_net::Error::GlooError("Load failed".to_string()));
        assert_eq!(err, RecommendError::NetworkUnreachable);

        let err = RecommendError::from(gloo_net::Error::GlooError("body already used".to_string()));
        assert_eq!(err.to_string(), "body already used");
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            RecommendError::Server { status: 500 }.to_string(),
            "Error processing your request."
        );
        assert_eq!(
            RecommendError::from(UseCaseValidationError::Empty).to_string(),
            "Please describe the use case."
        );
        assert_eq!(
            RecommendError::Service("Erro na API: 503".to_string()).to_string(),
            "Erro na API: 503"
        );
    }
}
