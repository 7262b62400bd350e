/// Метаданные UseCase для идентификации и отображения в UI
pub trait UseCaseMetadata {
    /// Индекс UseCase (например, "u101")
    fn usecase_index() -> &'static str;

    /// Техническое имя (например, "recommend_patterns")
    fn usecase_name() -> &'static str;

    /// Заголовок страницы
    fn display_name() -> &'static str;

    /// Подзаголовок / краткое описание
    fn description() -> &'static str {
        ""
    }

    /// Полное имя вида "u101_recommend_patterns"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
