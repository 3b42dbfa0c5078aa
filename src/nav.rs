use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::config;
use crate::utils;

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#about", "About"),
    ("#predict", "Prediction"),
    ("#contact", "Contact"),
];

/// Injection point for whatever tracks the visible section. The nav binds its
/// active-link setter here; a producer calls `activate` with a section id.
#[derive(Clone, Default)]
pub struct SectionSpy {
    inner: Rc<RefCell<Option<Callback<String>>>>,
}

impl PartialEq for SectionSpy {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl SectionSpy {
    pub fn activate(&self, section_id: &str) {
        if let Some(listener) = self.inner.borrow().as_ref() {
            listener.emit(format!("#{section_id}"));
        }
    }

    fn bind(&self, listener: Callback<String>) {
        *self.inner.borrow_mut() = Some(listener);
    }
}

fn is_active(href: &str, active: Option<&str>) -> bool {
    active == Some(href)
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub spy: SectionSpy,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let is_scrolled = use_state(|| false);
    let active = use_state(|| None::<String>);
    let menu_open = use_state(|| false);
    let toggler_ref = use_node_ref();

    // Whatever the spy reports becomes the single active link.
    {
        let spy = props.spy.clone();
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                spy.bind(Callback::from(move |href: String| active.set(Some(href))));
                || ()
            },
            (),
        );
    }

    // Two listeners feed the same flag: a plain one and one capped at ~60Hz.
    // Either may fire first; the assignment is idempotent.
    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listeners = web_sys::window().map(|window| {
                    let flag = is_scrolled.clone();
                    let plain = Closure::wrap(Box::new(move || {
                        flag.set(utils::scroll_offset() > config::NAV_SCROLL_THRESHOLD_PX);
                    }) as Box<dyn FnMut()>);

                    let flag = is_scrolled.clone();
                    let mut limited = utils::throttle(
                        move || flag.set(utils::scroll_offset() > config::NAV_SCROLL_THRESHOLD_PX),
                        config::NAV_SCROLL_THROTTLE_MS,
                    );
                    let throttled = Closure::wrap(Box::new(move || limited()) as Box<dyn FnMut()>);

                    let _ = window
                        .add_event_listener_with_callback("scroll", plain.as_ref().unchecked_ref());
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        throttled.as_ref().unchecked_ref(),
                    );
                    (window, plain, throttled)
                });

                move || {
                    if let Some((window, plain, throttled)) = listeners {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            plain.as_ref().unchecked_ref(),
                        );
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            throttled.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let nav_click = |href: &'static str| -> Callback<MouseEvent> {
        let active = active.clone();
        let menu_open = menu_open.clone();
        let toggler_ref = toggler_ref.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_section(href);
            active.set(Some(href.to_string()));
            // Collapse the mobile menu, but only when the toggler is shown.
            if *menu_open && toggler_visible(&toggler_ref) {
                menu_open.set(false);
            }
        })
    };

    html! {
        <nav id="mainNav" class={classes!("navbar", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#home" class="nav-brand" onclick={nav_click("#home")}>{"Vitalis"}</a>

                <button class="navbar-toggler" ref={toggler_ref.clone()} onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <div id="navbarNav" class={classes!("nav-menu", (*menu_open).then(|| "mobile-menu-open"))}>
                    { for NAV_LINKS.iter().map(|&(href, label)| {
                        let active_class = is_active(href, active.as_deref()).then(|| "active");
                        html! {
                            <a href={href} class={classes!("nav-link", active_class)} onclick={nav_click(href)}>
                                { label }
                            </a>
                        }
                    }) }
                </div>
            </div>
        </nav>
    }
}

/// Smooth-scrolls so the section lands just below the fixed navbar.
fn scroll_to_section(href: &str) {
    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };
    let Ok(Some(target)) = document.query_selector(href) else { return };

    let top = target.get_bounding_client_rect().top() + utils::scroll_offset()
        - config::NAV_HEADER_OFFSET_PX;
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

fn toggler_visible(toggler: &NodeRef) -> bool {
    let Some(element) = toggler.cast::<Element>() else { return false };
    web_sys::window()
        .and_then(|w| w.get_computed_style(&element).ok())
        .flatten()
        .and_then(|style| style.get_property_value("display").ok())
        .map(|display| display != "none")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_count(active: Option<&str>) -> usize {
        NAV_LINKS
            .iter()
            .filter(|&&(href, _)| is_active(href, active))
            .count()
    }

    #[test]
    fn exactly_one_link_matches_the_activated_section() {
        assert_eq!(active_count(Some("#about")), 1);
    }

    #[test]
    fn no_link_is_active_before_any_activation() {
        assert_eq!(active_count(None), 0);
    }

    #[test]
    fn unknown_sections_activate_nothing() {
        assert_eq!(active_count(Some("#careers")), 0);
    }
}
