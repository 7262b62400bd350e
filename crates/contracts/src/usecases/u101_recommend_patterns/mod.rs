pub mod request;
pub mod response;
pub mod validation;

pub use request::RecommendRequest;
pub use response::{Pattern, Recommendation, RecommendResponse, ServiceError};
pub use validation::{validate_use_case, UseCaseValidationError};

use crate::usecases::common::UseCaseMetadata;

/// Минимальная длина описания (после trim), в символах
pub const MIN_USE_CASE_CHARS: usize = 10;

/// Максимальная длина описания, в символах
pub const MAX_USE_CASE_CHARS: usize = 5000;

pub struct RecommendPatterns;

impl UseCaseMetadata for RecommendPatterns {
    fn usecase_index() -> &'static str {
        "u101"
    }

    fn usecase_name() -> &'static str {
        "recommend_patterns"
    }

    fn display_name() -> &'static str {
        "Design Pattern Recommender"
    }

    fn description() -> &'static str {
        "Describe your use case and get design pattern recommendations"
    }
}
