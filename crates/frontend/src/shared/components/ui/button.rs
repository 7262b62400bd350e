use leptos::prelude::*;
use thaw::Spinner;

/// Button with a busy state: while `busy` is true it is disabled and shows a
/// spinner with `busy_label` instead of its children
#[component]
pub fn Button(
    /// Button type attribute ("button" by default, "submit" inside forms)
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Busy state (reactive)
    #[prop(optional, into)]
    busy: MaybeProp<bool>,
    /// Text shown next to the spinner while busy
    #[prop(optional, into)]
    busy_label: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Button children (content)
    children: ChildrenFn,
) -> impl IntoView {
    let is_busy = move || busy.get().unwrap_or(false);
    let additional_class = move || class.get().unwrap_or_default();
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            class=move || button_class(is_busy(), &additional_class())
            disabled=is_busy
        >
            {move || if is_busy() {
                view! {
                    <span class="button__busy">
                        <Spinner />
                        {busy_label.get().unwrap_or_default()}
                    </span>
                }.into_any()
            } else {
                children()
            }}
        </button>
    }
}

fn button_class(busy: bool, extra: &str) -> String {
    let mut class = String::from("button button--primary");
    if busy {
        class.push_str(" button--busy");
    }
    if !extra.trim().is_empty() {
        class.push(' ');
        class.push_str(extra.trim());
    }
    class
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_class() {
        assert_eq!(button_class(false, ""), "button button--primary");
        assert_eq!(
            button_class(true, "recommender__submit"),
            "button button--primary button--busy recommender__submit"
        );
        assert_eq!(button_class(false, "  wide "), "button button--primary wide");
    }
}
