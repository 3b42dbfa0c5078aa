use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config;
use crate::forms::validation::{self, FieldRule, Verdict};

/// Footer micro-form. Only checks that something was entered; the confirmed
/// button state is cosmetic and nothing is transmitted from here.
#[function_component(NewsletterForm)]
pub fn newsletter_form() -> Html {
    let email = use_state(String::new);
    let verdict = use_state(|| None::<Verdict>);
    let confirmed = use_state(|| false);
    let pending = use_mut_ref(|| None::<Timeout>);

    let oninput = {
        let email = email.clone();
        let verdict = verdict.clone();
        Callback::from(move |e: InputEvent| {
            email.set(e.target_unchecked_into::<HtmlInputElement>().value());
            verdict.set(None);
        })
    };

    let onblur = {
        let email = email.clone();
        let verdict = verdict.clone();
        Callback::from(move |_: FocusEvent| {
            verdict.set(Some(validation::validate(&FieldRule::email(false), &email)));
        })
    };

    let onsubmit = {
        let email = email.clone();
        let verdict = verdict.clone();
        let confirmed = confirmed.clone();
        let pending = pending.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if email.trim().is_empty() {
                return;
            }

            confirmed.set(true);
            let timer = {
                let email = email.clone();
                let verdict = verdict.clone();
                let confirmed = confirmed.clone();
                Timeout::new(config::NEWSLETTER_REVERT_MS, move || {
                    confirmed.set(false);
                    email.set(String::new());
                    verdict.set(None);
                })
            };
            *pending.borrow_mut() = Some(timer);
        })
    };

    html! {
        <form class="newsletter-form" onsubmit={onsubmit}>
            <input
                type="email"
                name="newsletter_email"
                class={classes!("newsletter-input", validation::verdict_class(verdict.as_ref()))}
                placeholder="Your email address"
                value={(*email).clone()}
                oninput={oninput}
                onblur={onblur}
            />
            <button type="submit" class={classes!("btn", "btn-newsletter", (*confirmed).then(|| "sent"))}>
                { if *confirmed { "✓" } else { "Subscribe" } }
            </button>
        </form>
    }
}
