use super::error::RecommendError;
use crate::shared::api_utils::recommend_url;
use contracts::usecases::u101_recommend_patterns::{
    RecommendRequest, RecommendResponse, Recommendation,
};
use gloo_net::http::Request;

/// Заголовки, которые клиент всегда отправляет сервису
pub const SECURITY_HEADERS: [(&str, &str); 4] = [
    ("X-Requested-With", "XMLHttpRequest"),
    ("X-Content-Type-Options", "nosniff"),
    ("X-Frame-Options", "DENY"),
    ("X-XSS-Protection", "1; mode=block"),
];

/// API клиент для UseCase u101: `POST /recommend`
pub async fn recommend(request: &RecommendRequest) -> Result<Recommendation, RecommendError> {
    let url = recommend_url();

    let mut builder = Request::post(&url);
    for (name, value) in SECURITY_HEADERS {
        builder = builder.header(name, value);
    }

    // `.json()` выставляет Content-Type: application/json
    let response = builder.json(request)?.send().await?;

    let status = response.status();
    let body = response.text().await?;
    if !response.ok() {
        log::warn!("u101: {} answered HTTP {}: {}", url, status, body);
    }
    classify_response(status, &body)
}

/// Разбирает ответ сервиса по статусу и телу.
///
/// Статус вне 2xx даёт `Server` без чтения тела, `{"error": ...}` даёт
/// `Service`, тело неизвестной формы даёт `Unknown` с текстом ошибки разбора.
pub fn classify_response(status: u16, body: &str) -> Result<Recommendation, RecommendError> {
    if !(200..300).contains(&status) {
        return Err(RecommendError::Server { status });
    }

    let decoded: RecommendResponse =
        serde_json::from_str(body).map_err(|e| RecommendError::Unknown(e.to_string()))?;
    decoded.into_result().map_err(RecommendError::Service)
}
