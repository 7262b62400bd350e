//! Утилиты форматирования чисел для карточек рекомендаций

/// Форматирует уверенность (0..=1) как процент.
///
/// Значение округляется до одного знака после запятой; если после округления
/// получилось целое число, дробная часть не выводится.
///
/// # Примеры
///
/// ```
/// use frontend::shared::number_format::format_confidence;
/// assert_eq!(format_confidence(0.8), "80%");
/// assert_eq!(format_confidence(0.755), "75.5%");
/// ```
pub fn format_confidence(confidence: f64) -> String {
    if !confidence.is_finite() {
        return "0%".to_string();
    }
    let percent = (confidence * 1000.0).round() / 10.0;
    if percent.fract() == 0.0 {
        format!("{:.0}%", percent)
    } else {
        format!("{:.1}%", percent)
    }
}
