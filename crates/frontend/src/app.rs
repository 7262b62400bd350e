use crate::shared::components::matrix_background::MatrixBackground;
use crate::usecases::u101_recommend_patterns::view::RecommendForm;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            // Фон рисуется независимо от формы и не делит с ней состояние
            <MatrixBackground />
            <RecommendForm />
        </ConfigProvider>
    }
}
