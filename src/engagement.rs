use std::cell::Cell;
use std::rc::Rc;

use chrono::Utc;
use log::info;
use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// What gets logged when the visitor leaves. An analytics collaborator would
/// pick this up from here.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EngagementSummary {
    time_spent: i64,
    interactions: u64,
}

/// Counts clicks and scrolls from page load and logs a session summary on
/// unload. Shipping the numbers anywhere is a collaborator's job.
#[function_component(EngagementTracker)]
pub fn engagement_tracker() -> Html {
    use_effect_with_deps(
        |_| {
            attach();
            || ()
        },
        (),
    );

    html! {}
}

fn attach() {
    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };

    let interactions = Rc::new(Cell::new(0u64));
    let started = Utc::now();

    let clicks = interactions.clone();
    let on_click = Closure::wrap(Box::new(move || {
        clicks.set(clicks.get() + 1);
    }) as Box<dyn FnMut()>);

    let scrolls = interactions.clone();
    let on_scroll = Closure::wrap(Box::new(move || {
        scrolls.set(scrolls.get() + 1);
    }) as Box<dyn FnMut()>);

    let counter = interactions;
    let on_unload = Closure::wrap(Box::new(move || {
        let summary = EngagementSummary {
            time_spent: (Utc::now() - started).num_seconds(),
            interactions: counter.get(),
        };
        info!(
            "User engagement: {}",
            serde_json::to_string(&summary).unwrap_or_default()
        );
    }) as Box<dyn FnMut()>);

    let _ = document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    let _ = document.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
    let _ =
        window.add_event_listener_with_callback("beforeunload", on_unload.as_ref().unchecked_ref());

    // All three live for the rest of the page.
    on_click.forget();
    on_scroll.forget();
    on_unload.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_uses_the_reporting_field_names() {
        let summary = EngagementSummary { time_spent: 42, interactions: 7 };
        assert_eq!(
            serde_json::to_string(&summary).unwrap(),
            r#"{"timeSpent":42,"interactions":7}"#
        );
    }
}
