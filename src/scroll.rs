use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions,
};
use yew::prelude::*;

use crate::config;
use crate::nav::SectionSpy;
use crate::utils;

const SECTION_SELECTOR: &str = "section, .hero-content, .about-content";
const REVEAL_CHILD_SELECTOR: &str = ".feature-item, .service-card, .info-card";

#[derive(Properties, PartialEq)]
pub struct ScrollEffectsProps {
    pub spy: SectionSpy,
}

/// Headless component wiring the viewport observer, the parallax handler and
/// the scroll-indicator shortcut.
#[function_component(ScrollEffects)]
pub fn scroll_effects(props: &ScrollEffectsProps) -> Html {
    let spy = props.spy.clone();
    use_effect_with_deps(
        move |_| {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                observe_sections(&document, spy);
                attach_parallax(&document);
                attach_scroll_indicator(&document);
            }
            || ()
        },
        (),
    );

    html! {}
}

fn observe_sections(document: &Document, spy: SectionSpy) {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else { continue };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                // The reveal fires once per element; the spy fires on every
                // (re-)entry so the nav keeps following the scroll.
                if !target.class_list().contains("animate-fade-in") {
                    reveal(&target);
                }
                let id = target.id();
                if !id.is_empty() {
                    spy.activate(&id);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
    options.set_root_margin(config::REVEAL_ROOT_MARGIN);

    let Ok(observer) =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    else {
        return;
    };
    callback.forget();

    if let Ok(sections) = document.query_selector_all(SECTION_SELECTOR) {
        for i in 0..sections.length() {
            if let Some(section) = sections.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                observer.observe(&section);
            }
        }
    }
}

/// Fades the section in and staggers its cards upward, 100ms apart.
fn reveal(section: &Element) {
    let _ = section.class_list().add_1("animate-fade-in");

    let Ok(children) = section.query_selector_all(REVEAL_CHILD_SELECTOR) else { return };
    for i in 0..children.length() {
        let Some(child) = children.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        Timeout::new(i * config::REVEAL_STAGGER_MS, move || {
            let _ = child.class_list().add_1("animate-slide-up");
        })
        .forget();
    }
}

fn attach_parallax(document: &Document) {
    let Some(window) = web_sys::window() else { return };
    let Ok(Some(_)) = document.query_selector(".hero-background") else { return };

    let enabled = Rc::new(Cell::new(viewport_wide_enough()));

    let scroll_enabled = enabled.clone();
    let on_scroll = Closure::wrap(Box::new(move || {
        if !scroll_enabled.get() {
            return;
        }
        let Some(hero) = hero_background() else { return };
        let rate = utils::scroll_offset() * config::PARALLAX_RATE;
        let _ = hero.set_attribute("style", &format!("transform: translateY({rate}px)"));
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
    on_scroll.forget();

    // Resize only decides whether the parallax runs at all, so it can afford
    // to wait out the storm of events a window drag produces.
    let mut recompute = utils::debounce(
        move || {
            let wide = viewport_wide_enough();
            enabled.set(wide);
            if !wide {
                if let Some(hero) = hero_background() {
                    let _ = hero.remove_attribute("style");
                }
            }
        },
        config::RESIZE_DEBOUNCE_MS,
    );
    let on_resize = Closure::wrap(Box::new(move || recompute()) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    on_resize.forget();
}

fn attach_scroll_indicator(document: &Document) {
    let Ok(Some(indicator)) = document.query_selector(".scroll-indicator") else { return };

    let onclick = Closure::wrap(Box::new(move || {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else { return };
        let Ok(Some(about)) = document.query_selector("#about") else { return };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        about.scroll_into_view_with_scroll_into_view_options(&options);
    }) as Box<dyn FnMut()>);
    let _ = indicator.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref());
    onclick.forget();
}

fn hero_background() -> Option<HtmlElement> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(".hero-background").ok())
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn viewport_wide_enough() -> bool {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|width| width.as_f64())
        .map(|width| width >= config::PARALLAX_MIN_VIEWPORT_PX)
        .unwrap_or(true)
}
