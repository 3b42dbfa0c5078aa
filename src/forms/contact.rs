use std::collections::BTreeMap;

use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::forms::validation::{self, FieldRule, Verdict};

/// The simulated send transition. Actual transport belongs to a collaborator;
/// this component only acts out the feedback sequence.
#[derive(Clone, Copy, PartialEq, Debug)]
enum Phase {
    Idle,
    Sending,
    Sent,
}

impl Phase {
    fn label(self) -> &'static str {
        match self {
            Phase::Idle => "Send Message",
            Phase::Sending => "Sending...",
            Phase::Sent => "Message Sent!",
        }
    }

    fn class(self) -> Option<&'static str> {
        match self {
            Phase::Idle => None,
            Phase::Sending => Some("loading"),
            Phase::Sent => Some("sent"),
        }
    }
}

fn rule_for(name: &str) -> FieldRule {
    match name {
        "email" => FieldRule::email(true),
        _ => FieldRule::text(true),
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let verdicts = use_state(BTreeMap::<String, Verdict>::new);
    let phase = use_state(|| Phase::Idle);
    // Owns whichever transition timer is live. Dropping it cancels the timer,
    // so a resubmission restarts the sequence instead of interleaving with it.
    let pending = use_mut_ref(|| None::<Timeout>);
    let form_ref = use_node_ref();

    let edit = |field: &'static str, state: &UseStateHandle<String>| -> Callback<String> {
        let state = state.clone();
        let verdicts = verdicts.clone();
        Callback::from(move |value: String| {
            state.set(value);
            let mut next = (*verdicts).clone();
            if next.remove(field).is_some() {
                verdicts.set(next);
            }
        })
    };

    let blur = |field: &'static str, state: &UseStateHandle<String>| -> Callback<FocusEvent> {
        let state = state.clone();
        let verdicts = verdicts.clone();
        Callback::from(move |_| {
            let mut next = (*verdicts).clone();
            next.insert(field.to_string(), validation::validate(&rule_for(field), &state));
            verdicts.set(next);
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let verdicts = verdicts.clone();
        let phase = phase.clone();
        let pending = pending.clone();
        let form_ref = form_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let entries = [
                ("name", (*name).clone()),
                ("email", (*email).clone()),
                ("message", (*message).clone()),
            ];
            let mut all = BTreeMap::new();
            let mut first_invalid = None;
            for (field, value) in &entries {
                let verdict = validation::validate(&rule_for(field), value);
                if verdict.is_err() && first_invalid.is_none() {
                    first_invalid = Some(*field);
                }
                all.insert(field.to_string(), verdict);
            }

            if let Some(field) = first_invalid {
                verdicts.set(all);
                validation::focus_field(&form_ref, field);
                return;
            }

            // Fields clear right away; only the button narrates the send.
            name.set(String::new());
            email.set(String::new());
            message.set(String::new());
            verdicts.set(BTreeMap::new());
            phase.set(Phase::Sending);

            let timer = {
                let phase = phase.clone();
                let pending = pending.clone();
                Timeout::new(config::CONTACT_SENDING_MS, move || {
                    phase.set(Phase::Sent);
                    let phase = phase.clone();
                    let revert = Timeout::new(config::CONTACT_REVERT_MS, move || {
                        phase.set(Phase::Idle);
                    });
                    *pending.borrow_mut() = Some(revert);
                })
            };
            *pending.borrow_mut() = Some(timer);
        })
    };

    let field_class = |field: &str| classes!("form-control", validation::verdict_class(verdicts.get(field)));
    let feedback = |field: &str| match verdicts.get(field) {
        Some(Err(message)) => html! { <div class="invalid-feedback">{ message.clone() }</div> },
        _ => html! {},
    };

    html! {
        <form ref={form_ref} class="contact-form" novalidate=true onsubmit={onsubmit}>
            <div class="form-group">
                <label for="contact-name">{"Name"}</label>
                <input
                    type="text"
                    id="contact-name"
                    name="name"
                    class={field_class("name")}
                    value={(*name).clone()}
                    required=true
                    oninput={
                        let edit = edit("name", &name);
                        Callback::from(move |e: InputEvent| {
                            edit.emit(e.target_unchecked_into::<HtmlInputElement>().value())
                        })
                    }
                    onblur={blur("name", &name)}
                />
                { feedback("name") }
            </div>
            <div class="form-group">
                <label for="contact-email">{"Email"}</label>
                <input
                    type="email"
                    id="contact-email"
                    name="email"
                    class={field_class("email")}
                    value={(*email).clone()}
                    required=true
                    oninput={
                        let edit = edit("email", &email);
                        Callback::from(move |e: InputEvent| {
                            edit.emit(e.target_unchecked_into::<HtmlInputElement>().value())
                        })
                    }
                    onblur={blur("email", &email)}
                />
                { feedback("email") }
            </div>
            <div class="form-group">
                <label for="contact-message">{"Message"}</label>
                <textarea
                    id="contact-message"
                    name="message"
                    class={field_class("message")}
                    value={(*message).clone()}
                    required=true
                    oninput={
                        let edit = edit("message", &message);
                        Callback::from(move |e: InputEvent| {
                            edit.emit(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                        })
                    }
                    onblur={blur("message", &message)}
                />
                { feedback("message") }
            </div>
            <button
                type="submit"
                class={classes!("btn", "btn-contact", phase.class())}
                disabled={*phase != Phase::Idle}
            >
                { phase.label() }
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_narrates_the_phase() {
        assert_eq!(Phase::Idle.label(), "Send Message");
        assert_eq!(Phase::Sending.label(), "Sending...");
        assert_eq!(Phase::Sent.label(), "Message Sent!");
    }

    #[test]
    fn only_transition_phases_restyle_the_button() {
        assert_eq!(Phase::Idle.class(), None);
        assert_eq!(Phase::Sending.class(), Some("loading"));
        assert_eq!(Phase::Sent.class(), Some("sent"));
    }

    #[test]
    fn contact_rules() {
        assert!(validation::validate(&rule_for("email"), "user@example.com").is_ok());
        assert!(validation::validate(&rule_for("email"), "not-an-email").is_err());
        assert!(validation::validate(&rule_for("message"), "").is_err());
    }
}
