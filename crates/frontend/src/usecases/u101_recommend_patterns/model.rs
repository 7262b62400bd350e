//! Состояние формы рекомендаций.
//!
//! Жизненный цикл запроса — явный автомат `Idle → Pending → Settled`:
//! пока запрос в полёте, новая отправка отклоняется, а ответ применяется
//! только если его `request_id` совпадает с ожидаемым.

use super::error::RecommendError;
use crate::shared::number_format::format_confidence;
use crate::shared::rich_text::{
    format_implementation, split_explanation_and_implementation, ImplementationView,
};
use contracts::usecases::u101_recommend_patterns::{
    validate_use_case, Pattern, RecommendRequest, Recommendation, UseCaseValidationError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Pending {
        request_id: u64,
    },
    Settled,
}

/// Почему отправка не началась
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejected {
    Invalid(UseCaseValidationError),
    AlreadyPending,
}

/// Запрос, который нужно отправить, и его номер
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmit {
    pub request_id: u64,
    pub request: RecommendRequest,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecommendFormState {
    input: String,
    phase: SubmitPhase,
    error: Option<RecommendError>,
    recommendation: Option<Recommendation>,
    last_request_id: u64,
}

impl RecommendFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Заменяет текст описания, без проверок
    pub fn update_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, SubmitPhase::Pending { .. })
    }

    pub fn error(&self) -> Option<&RecommendError> {
        self.error.as_ref()
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(|e| e.to_string())
    }

    pub fn recommendation(&self) -> Option<&Recommendation> {
        self.recommendation.as_ref()
    }

    /// Проверяет описание и переводит форму в `Pending`.
    ///
    /// При ошибке проверки запрос не создаётся: ошибка сохраняется, прошлая
    /// рекомендация сбрасывается. Во время `Pending` состояние не меняется.
    pub fn begin_submit(&mut self) -> Result<PendingSubmit, SubmitRejected> {
        if self.is_loading() {
            return Err(SubmitRejected::AlreadyPending);
        }

        let use_case = match validate_use_case(&self.input) {
            Ok(trimmed) => trimmed.to_string(),
            Err(e) => {
                self.error = Some(RecommendError::Validation(e));
                self.recommendation = None;
                self.phase = SubmitPhase::Settled;
                return Err(SubmitRejected::Invalid(e));
            }
        };

        self.last_request_id += 1;
        let request_id = self.last_request_id;
        self.error = None;
        self.recommendation = None;
        self.phase = SubmitPhase::Pending { request_id };

        Ok(PendingSubmit {
            request_id,
            request: RecommendRequest::new(use_case),
        })
    }

    /// Применяет результат запроса `request_id`.
    ///
    /// Возвращает `false` для устаревшего ответа, который ничего не меняет.
    /// Фаза `Settled` выставляется последней при любом исходе.
    pub fn settle(
        &mut self,
        request_id: u64,
        outcome: Result<Recommendation, RecommendError>,
    ) -> bool {
        if self.phase != (SubmitPhase::Pending { request_id }) {
            return false;
        }

        match outcome {
            Ok(recommendation) => {
                self.error = None;
                self.recommendation = Some(recommendation);
            }
            Err(e) => {
                self.error = Some(e);
                self.recommendation = None;
            }
        }
        self.phase = SubmitPhase::Settled;
        true
    }
}

/// Готовая к отображению карточка паттерна
#[derive(Debug, Clone, PartialEq)]
pub struct PatternCard {
    /// Номер в списке, с 1
    pub position: usize,
    pub name: String,
    pub confidence_label: String,
    pub explanation: String,
    pub implementation: ImplementationView,
}

impl PatternCard {
    pub fn from_pattern(index: usize, pattern: &Pattern) -> Self {
        let split =
            split_explanation_and_implementation(&pattern.explanation, &pattern.implementation);
        Self {
            position: index + 1,
            name: pattern.name.clone(),
            confidence_label: format_confidence(pattern.normalized_confidence()),
            explanation: split.explanation,
            implementation: format_implementation(&split.implementation),
        }
    }
}

/// Карточки в порядке ответа сервиса
pub fn pattern_cards(recommendation: &Recommendation) -> Vec<PatternCard> {
    recommendation
        .patterns
        .iter()
        .enumerate()
        .map(|(i, p)| PatternCard::from_pattern(i, p))
        .collect()
}
