//! Клиентская проверка описания перед отправкой на сервис

use super::{MAX_USE_CASE_CHARS, MIN_USE_CASE_CHARS};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UseCaseValidationError {
    #[error("Please describe the use case.")]
    Empty,

    #[error("Please provide a more detailed description of the use case.")]
    TooShort,

    #[error("The use case description is too long. Please be more concise.")]
    TooLong,
}

/// Проверяет описание и возвращает его обрезанную (trim) версию.
///
/// Порядок проверок: пустое, слишком короткое, слишком длинное. Первая
/// неудачная проверка определяет ошибку. Минимум считается по обрезанному
/// тексту, максимум по исходному.
pub fn validate_use_case(input: &str) -> Result<&str, UseCaseValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UseCaseValidationError::Empty);
    }
    if trimmed.chars().count() < MIN_USE_CASE_CHARS {
        return Err(UseCaseValidationError::TooShort);
    }
    if input.chars().count() > MAX_USE_CASE_CHARS {
        return Err(UseCaseValidationError::TooLong);
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(validate_use_case(""), Err(UseCaseValidationError::Empty));
        assert_eq!(validate_use_case("  \n\t "), Err(UseCaseValidationError::Empty));
    }

    #[test]
    fn test_too_short_counts_trimmed_chars() {
        assert_eq!(validate_use_case("short"), Err(UseCaseValidationError::TooShort));
        // 9 символов, окружённых пробелами
        assert_eq!(
            validate_use_case("     123456789     "),
            Err(UseCaseValidationError::TooShort)
        );
        // 10 многобайтовых символов проходят
        assert_eq!(validate_use_case("ççççççççãã"), Ok("ççççççççãã"));
    }

    #[test]
    fn test_too_long() {
        let long = "a".repeat(MAX_USE_CASE_CHARS + 1);
        assert_eq!(validate_use_case(&long), Err(UseCaseValidationError::TooLong));

        let max = "a".repeat(MAX_USE_CASE_CHARS);
        assert_eq!(validate_use_case(&max), Ok(max.as_str()));
    }

    #[test]
    fn test_returns_trimmed_text() {
        assert_eq!(
            validate_use_case("  An online shop with many payment providers \n"),
            Ok("An online shop with many payment providers")
        );
    }
}
