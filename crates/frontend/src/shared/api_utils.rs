//! API utilities for talking to the recommendation service
//!
//! The service runs next to the page host on its own port over plain HTTP, so
//! the base URL is `http://<page host>:<port>` whatever the page protocol is.

/// Default port of the recommendation service
pub const DEFAULT_RECOMMENDER_PORT: u16 = 5000;

/// Protocol of the recommendation service
pub const RECOMMENDER_PROTOCOL: &str = "http:";

/// Path of the recommendation endpoint
pub const RECOMMEND_PATH: &str = "/recommend";

/// Port of the recommendation service.
///
/// Can be overridden at build time with `RECOMMENDER_PORT=8080 trunk build`.
/// Invalid values fall back to [`DEFAULT_RECOMMENDER_PORT`].
pub fn recommender_port() -> u16 {
    parse_port(option_env!("RECOMMENDER_PORT"))
}

fn parse_port(raw: Option<&str>) -> u16 {
    raw.and_then(|p| p.trim().parse::<u16>().ok())
        .filter(|p| *p != 0)
        .unwrap_or(DEFAULT_RECOMMENDER_PORT)
}

/// Build the service base URL from host and port
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::build_base;
/// assert_eq!(build_base("localhost", 5000), "http://localhost:5000");
/// ```
pub fn build_base(hostname: &str, port: u16) -> String {
    format!("{}//{}:{}", RECOMMENDER_PROTOCOL, hostname, port)
}

/// Get the base URL for recommendation requests
///
/// # Returns
/// - Base URL like "http://localhost:5000"
/// - Falls back to "http://127.0.0.1:<port>" if window is not available
pub fn api_base() -> String {
    let port = recommender_port();
    let window = match web_sys::window() {
        Some(w) => w,
        None => return build_base("127.0.0.1", port),
    };
    let hostname = window
        .location()
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    build_base(&hostname, port)
}

/// Full URL of `POST /recommend`
pub fn recommend_url() -> String {
    format!("{}{}", api_base(), RECOMMEND_PATH)
}
