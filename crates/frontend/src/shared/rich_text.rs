//! Разбор свободного текста рекомендаций для отображения.
//!
//! Сервис возвращает `explanation` и `implementation` как обычный текст:
//! шаги реализации иногда оказываются внутри объяснения, нумерованные списки
//! приходят одной строкой, а код выделен обратными кавычками. Функции здесь
//! чистые и никогда не паникуют; рендер живёт в `usecases::u101_recommend_patterns::view`.

use once_cell::sync::Lazy;
use regex::Regex;

/// Начало блока реализации внутри объяснения
static SECTION_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)implementa[cç][aã]o:|passos:|exemplo:|[0-9]+\.\s")
        .expect("section marker regex is valid")
});

/// Разделитель пунктов нумерованного списка ("1. ", "\n2. ")
static LIST_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n?\s*[0-9]+\.\s+").expect("list marker regex is valid"));

/// Фрагмент кода в обратных кавычках
static INLINE_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`[^`]+`").expect("inline code regex is valid"));

/// Минимальная длина `implementation`, при которой текст не переразбивается
const MIN_SEPARATE_IMPLEMENTATION_CHARS: usize = 10;

/// Объяснение и реализация после разделения
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitText {
    pub explanation: String,
    pub implementation: String,
}

/// Часть строки: обычный текст или inline-код
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineSegment {
    Text(String),
    Code(String),
}

/// Структура для рендера поля `implementation`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImplementationView {
    /// Нумерованный список, по одному пункту на шаг
    List(Vec<Vec<InlineSegment>>),
    /// Один блок текста
    Block(Vec<InlineSegment>),
}

/// Отделяет шаги реализации, если сервис вписал их в объяснение.
///
/// Если `implementation` содержит больше 10 символов (после trim), пара
/// возвращается как есть. Иначе ищется первый маркер ("Implementação:",
/// "Passos:", "Exemplo:" или "N. ") без учёта регистра: всё до маркера
/// становится объяснением, всё начиная с маркера (плюс исходная реализация,
/// если она не пустая) становится реализацией. Без маркера пара не меняется.
pub fn split_explanation_and_implementation(explanation: &str, implementation: &str) -> SplitText {
    let unchanged = || SplitText {
        explanation: explanation.to_string(),
        implementation: implementation.to_string(),
    };

    if implementation.trim().chars().count() > MIN_SEPARATE_IMPLEMENTATION_CHARS {
        return unchanged();
    }

    let Some(marker) = SECTION_MARKER.find(explanation) else {
        return unchanged();
    };

    let mut steps = explanation[marker.start()..].trim().to_string();
    if !implementation.is_empty() {
        steps.push('\n');
        steps.push_str(implementation);
    }

    SplitText {
        explanation: explanation[..marker.start()].trim().to_string(),
        implementation: steps,
    }
}

/// Превращает текст реализации в список шагов или в один блок.
///
/// Два и более непустых пункта, разделённых "N. ", дают нумерованный список;
/// иначе весь текст становится одним блоком. В обоих случаях фрагменты в
/// обратных кавычках выделяются как код.
pub fn format_implementation(text: &str) -> ImplementationView {
    let items: Vec<&str> = LIST_MARKER
        .split(text)
        .filter(|item| !item.is_empty())
        .collect();

    if items.len() > 1 {
        ImplementationView::List(items.into_iter().map(parse_inline_code).collect())
    } else {
        ImplementationView::Block(parse_inline_code(text))
    }
}

/// Разбивает строку на обычный текст и фрагменты кода (без обратных кавычек)
pub fn parse_inline_code(text: &str) -> Vec<InlineSegment> {
    let mut segments = Vec::new();
    let mut last = 0;

    for code in INLINE_CODE.find_iter(text) {
        if code.start() > last {
            segments.push(InlineSegment::Text(text[last..code.start()].to_string()));
        }
        let quoted = code.as_str();
        segments.push(InlineSegment::Code(quoted[1..quoted.len() - 1].to_string()));
        last = code.end();
    }

    if last < text.len() {
        segments.push(InlineSegment::Text(text[last..].to_string()));
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> InlineSegment {
        InlineSegment::Text(s.to_string())
    }

    fn code(s: &str) -> InlineSegment {
        InlineSegment::Code(s.to_string())
    }

    #[test]
    fn test_split_keeps_long_implementation() {
        let split = split_explanation_and_implementation(
            "Use it when 1. things change",
            "Create an interface per algorithm",
        );
        assert_eq!(split.explanation, "Use it when 1. things change");
        assert_eq!(split.implementation, "Create an interface per algorithm");
    }

    #[test]
    fn test_split_on_implementacao_marker() {
        let split =
            split_explanation_and_implementation("Context text\nImplementação: step one", "");
        assert_eq!(split.explanation, "Context text");
        assert!(split.implementation.starts_with("Implementação: step one"));
    }

    #[test]
    fn test_split_is_case_insensitive_and_accepts_variants() {
        let split = split_explanation_and_implementation("Intro IMPLEMENTACAO: do it", "");
        assert_eq!(split.explanation, "Intro");
        assert_eq!(split.implementation, "IMPLEMENTACAO: do it");

        let split = split_explanation_and_implementation("Intro\n\npassos: a, b", "");
        assert_eq!(split.explanation, "Intro");
        assert_eq!(split.implementation, "passos: a, b");
    }

    #[test]
    fn test_split_uses_first_marker() {
        let split = split_explanation_and_implementation(
            "Decouples senders. Exemplo: queue\n1. define handler",
            "",
        );
        assert_eq!(split.explanation, "Decouples senders.");
        assert_eq!(split.implementation, "Exemplo: queue\n1. define handler");
    }

    #[test]
    fn test_split_appends_short_implementation() {
        let split = split_explanation_and_implementation("Why.\n1. first step", "see docs");
        assert_eq!(split.explanation, "Why.");
        assert_eq!(split.implementation, "1. first step\nsee docs");
    }

    #[test]
    fn test_split_without_marker_is_unchanged() {
        let split = split_explanation_and_implementation("Plain explanation", " ");
        assert_eq!(split.explanation, "Plain explanation");
        assert_eq!(split.implementation, " ");
    }

    #[test]
    fn test_format_numbered_list_with_code() {
        let view = format_implementation("1. do `X`\n2. do Y");
        assert_eq!(
            view,
            ImplementationView::List(vec![vec![text("do "), code("X")], vec![text("do Y")]])
        );
    }

    #[test]
    fn test_format_single_item_is_block() {
        let view = format_implementation("1. only one step with `code()` here");
        assert_eq!(
            view,
            ImplementationView::Block(vec![
                text("1. only one step with "),
                code("code()"),
                text(" here"),
            ])
        );
    }

    #[test]
    fn test_format_plain_block() {
        assert_eq!(
            format_implementation("Just wrap the service"),
            ImplementationView::Block(vec![text("Just wrap the service")])
        );
        assert_eq!(format_implementation(""), ImplementationView::Block(vec![]));
    }

    #[test]
    fn test_parse_inline_code_edges() {
        assert_eq!(parse_inline_code("`a``b`"), vec![code("a"), code("b")]);
        // Пустые и незакрытые кавычки остаются текстом
        assert_eq!(parse_inline_code("`` empty"), vec![text("`` empty")]);
        assert_eq!(parse_inline_code("open `quote"), vec![text("open `quote")]);
    }
}
