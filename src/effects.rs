use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};
use yew::prelude::*;
use yew_hooks::use_interval;

use crate::config;

const BUTTON_LIFT_PX: i32 = -2;
const CARD_LIFT_PX: i32 = -5;

/// Decorative layer: staggers the floating elements' animation starts and
/// attaches the hover lift handlers. Headless.
#[function_component(HoverLayer)]
pub fn hover_layer() -> Html {
    use_effect_with_deps(
        |_| {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                stagger_floating(&document);
                attach_lift(&document, ".btn", BUTTON_LIFT_PX);
                attach_lift(&document, ".service-card, .feature-item, .info-card", CARD_LIFT_PX);
            }
            || ()
        },
        (),
    );

    html! {}
}

fn stagger_floating(document: &Document) {
    let Ok(elements) = document.query_selector_all(".floating-element, .floating-card") else {
        return;
    };
    for i in 0..elements.length() {
        let Some(element) = elements.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        let delay = i as f64 * config::FLOAT_STAGGER_SECS;
        let _ = element.style().set_property("animation-delay", &format!("{delay}s"));
    }
}

fn attach_lift(document: &Document, selector: &str, lift_px: i32) {
    let Ok(elements) = document.query_selector_all(selector) else { return };
    for i in 0..elements.length() {
        let Some(element) = elements.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };

        let lifted = element.clone();
        let enter = Closure::wrap(Box::new(move || {
            let _ = lifted
                .style()
                .set_property("transform", &format!("translateY({lift_px}px)"));
        }) as Box<dyn FnMut()>);

        let rested = element.clone();
        let leave = Closure::wrap(Box::new(move || {
            let _ = rested.style().set_property("transform", "translateY(0)");
        }) as Box<dyn FnMut()>);

        let _ = element.add_event_listener_with_callback("mouseenter", enter.as_ref().unchecked_ref());
        let _ = element.add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref());
        enter.forget();
        leave.forget();
    }
}

#[derive(Properties, PartialEq)]
pub struct TypewriterProps {
    pub text: AttrValue,
    #[prop_or(false)]
    pub enabled: bool,
}

/// Reveals the heading one character per tick, keeping a cursor border until
/// the text is complete. Renders the plain heading when not enabled.
#[function_component(Typewriter)]
pub fn typewriter(props: &TypewriterProps) -> Html {
    let shown = use_state(|| 0usize);
    let total = props.text.chars().count();
    let done = *shown >= total;

    let millis = if props.enabled && !done { config::TYPEWRITER_TICK_MS } else { 0 };
    {
        let shown = shown.clone();
        use_interval(move || shown.set(*shown + 1), millis);
    }

    if !props.enabled {
        return html! { <h1 class="hero-title">{ props.text.clone() }</h1> };
    }

    html! {
        <h1 class={classes!("hero-title", (!done).then(|| "typing"))}>
            { reveal_prefix(&props.text, *shown) }
        </h1>
    }
}

/// Char-boundary-safe prefix of `text` with `count` characters revealed.
fn reveal_prefix(text: &str, count: usize) -> String {
    text.chars().take(count).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_starts_empty_and_ends_complete() {
        assert_eq!(reveal_prefix("Vitalis", 0), "");
        assert_eq!(reveal_prefix("Vitalis", 3), "Vit");
        assert_eq!(reveal_prefix("Vitalis", 7), "Vitalis");
        assert_eq!(reveal_prefix("Vitalis", 99), "Vitalis");
    }

    #[test]
    fn reveal_respects_char_boundaries() {
        assert_eq!(reveal_prefix("héllo", 2), "hé");
        assert_eq!(reveal_prefix("日本語", 1), "日");
    }
}
