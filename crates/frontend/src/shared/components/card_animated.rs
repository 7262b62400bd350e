//! CardAnimated — обёртка над Thaw Card с анимацией появления.
//!
//! Анимация определена в `style.css` (`@keyframes card-appear`).
//!
//! # Пример
//! ```rust,ignore
//! <CardAnimated delay_ms=200 class="recommendation">
//!     <h2>"Recommendation"</h2>
//! </CardAnimated>
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Обёртка над Thaw [`Card`] с анимацией `card-appear`.
#[component]
pub fn CardAnimated(
    /// Задержка анимации в миллисекундах.
    #[prop(optional)]
    delay_ms: u32,
    /// Дополнительный CSS-класс карточки.
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.5s ease-out {}ms both;", delay_ms);
    let class = format!("card-animated {}", class);

    view! {
        <Card class=class attr:style=style>
            {children()}
        </Card>
    }
}
