use super::api;
use super::model::{pattern_cards, PatternCard, RecommendFormState, SubmitRejected};
use crate::shared::components::ui::{Button, Textarea};
use crate::shared::components::CardAnimated;
use crate::shared::rich_text::{ImplementationView, InlineSegment};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u101_recommend_patterns::RecommendPatterns;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Badge, BadgeAppearance, BadgeColor, MessageBar, MessageBarIntent};

#[component]
pub fn RecommendForm() -> impl IntoView {
    let form = RwSignal::new(RecommendFormState::new());

    let input = Signal::derive(move || form.with(|f| f.input().to_string()));
    let is_loading = Signal::derive(move || form.with(|f| f.is_loading()));
    let error_msg = Memo::new(move |_| form.with(|f| f.error_message()));
    // Memo, чтобы ввод текста не перерисовывал список карточек
    let recommendation = Memo::new(move |_| form.with(|f| f.recommendation().cloned()));

    let on_input = Callback::new(move |text: String| {
        form.update(|f| f.update_input(text));
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(started) = form.try_update(|f| f.begin_submit()) else {
            return;
        };
        let pending = match started {
            Ok(pending) => pending,
            Err(SubmitRejected::AlreadyPending) => {
                log::warn!(
                    "{}: submit ignored, request already in flight",
                    RecommendPatterns::full_name()
                );
                return;
            }
            Err(SubmitRejected::Invalid(e)) => {
                log::info!("{}: validation failed: {:?}", RecommendPatterns::full_name(), e);
                return;
            }
        };

        log::info!(
            "{}: request #{} dispatched ({} chars)",
            RecommendPatterns::full_name(),
            pending.request_id,
            pending.request.use_case.chars().count()
        );

        spawn_local(async move {
            let outcome = api::recommend(&pending.request).await;
            if let Err(e) = &outcome {
                log::warn!(
                    "{}: request #{} failed: {:?}",
                    RecommendPatterns::full_name(),
                    pending.request_id,
                    e
                );
            }
            let applied = form
                .try_update(|f| f.settle(pending.request_id, outcome))
                .unwrap_or(false);
            if applied {
                log::info!(
                    "{}: request #{} settled",
                    RecommendPatterns::full_name(),
                    pending.request_id
                );
            } else {
                log::warn!(
                    "{}: stale response for request #{} dropped",
                    RecommendPatterns::full_name(),
                    pending.request_id
                );
            }
        });
    };

    view! {
        <div class="recommender">
            <header class="recommender__header">
                <h1 class="recommender__title">
                    <span class="recommender__sparkle">"✨"</span>
                    " "
                    {RecommendPatterns::display_name()}
                </h1>
                <p class="recommender__subtitle">{RecommendPatterns::description()}</p>
            </header>

            <CardAnimated delay_ms=200 class="recommender__panel">
                <form class="recommender__form" on:submit=on_submit>
                    <Textarea
                        id="useCase"
                        label="Use Case"
                        value=input
                        on_input=on_input
                        placeholder="Describe your use case here..."
                        rows=6
                    />
                    <Button
                        button_type="submit"
                        busy=is_loading
                        busy_label="Analyzing..."
                        class="recommender__submit"
                    >
                        "Recommend Patterns"
                    </Button>
                </form>

                {move || error_msg.get().map(|message| view! {
                    <div class="recommender__error">
                        <MessageBar intent=MessageBarIntent::Error>
                            {message}
                        </MessageBar>
                    </div>
                })}

                {move || recommendation.get().map(|rec| view! {
                    <RecommendationList cards=pattern_cards(&rec) />
                })}
            </CardAnimated>
        </div>
    }
}

#[component]
fn RecommendationList(cards: Vec<PatternCard>) -> impl IntoView {
    view! {
        <section class="recommendation">
            <h2 class="recommendation__title">"Recommendation"</h2>
            <div class="recommendation__list">
                {cards.into_iter().map(|card| view! { <PatternEntry card=card /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn PatternEntry(card: PatternCard) -> impl IntoView {
    view! {
        <article class="pattern-entry">
            <h3 class="pattern-entry__title">
                {format!("{}. ", card.position)}
                <span class="pattern-entry__name">{card.name}</span>
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>
                    {card.confidence_label}
                </Badge>
            </h3>
            <p class="pattern-entry__explanation">{card.explanation}</p>
            <div class="pattern-entry__implementation">
                {render_implementation(card.implementation)}
            </div>
        </article>
    }
}

fn render_implementation(implementation: ImplementationView) -> AnyView {
    match implementation {
        ImplementationView::List(items) => view! {
            <ol class="pattern-entry__steps">
                {items.into_iter().map(|item| view! { <li>{render_inline(item)}</li> }).collect_view()}
            </ol>
        }
        .into_any(),
        ImplementationView::Block(segments) => view! {
            <span class="pattern-entry__block">{render_inline(segments)}</span>
        }
        .into_any(),
    }
}

fn render_inline(segments: Vec<InlineSegment>) -> impl IntoView {
    segments
        .into_iter()
        .map(|segment| match segment {
            InlineSegment::Text(text) => text.into_any(),
            InlineSegment::Code(code) => view! { <code class="inline-code">{code}</code> }.into_any(),
        })
        .collect_view()
}
