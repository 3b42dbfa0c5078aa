use log::{info, Level};
use stylist::yew::Global;
use yew::prelude::*;

mod config;
mod effects;
mod engagement;
mod nav;
mod scroll;
mod utils;
mod forms {
    pub mod contact;
    pub mod draft;
    pub mod newsletter;
    pub mod prediction;
    pub mod progress;
    pub mod validation;
}
mod pages {
    pub mod home;
}

use effects::HoverLayer;
use engagement::EngagementTracker;
use nav::{Nav, SectionSpy};
use pages::home::Home;
use scroll::ScrollEffects;

// Presentation classes the behavior layer toggles at runtime, plus the
// reduced-motion escape hatch.
const GLOBAL_CSS: &str = r#"
    .navbar.scrolled {
        background: rgba(10, 10, 10, 0.98);
        box-shadow: 0 2px 20px rgba(0, 0, 0, 0.4);
    }

    .is-invalid {
        border-color: #ef4444 !important;
        box-shadow: 0 0 0 3px rgba(239, 68, 68, 0.1) !important;
    }

    .is-valid {
        border-color: #10b981 !important;
        box-shadow: 0 0 0 3px rgba(16, 185, 129, 0.1) !important;
    }

    .invalid-feedback {
        color: #ef4444;
        font-size: 0.85rem;
        margin-top: 0.25rem;
    }

    .loading {
        pointer-events: none;
        opacity: 0.8;
    }

    .sent {
        background: #10b981 !important;
        color: #fff !important;
    }

    .btn-predict:disabled {
        opacity: 0.6;
        cursor: not-allowed;
    }

    .progress-text.complete {
        color: #10b981;
    }

    .animate-fade-in {
        animation: fade-in 0.6s ease forwards;
    }

    .animate-slide-up {
        animation: slide-up 0.5s ease both;
    }

    @keyframes fade-in {
        from { opacity: 0; }
        to { opacity: 1; }
    }

    @keyframes slide-up {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: translateY(0); }
    }

    .typing {
        border-right: 2px solid currentColor;
    }

    @media (prefers-reduced-motion: reduce) {
        * {
            animation-duration: 0.01ms !important;
            animation-iteration-count: 1 !important;
            transition-duration: 0.01ms !important;
        }
    }
"#;

#[function_component(App)]
fn app() -> Html {
    // One spy instance links the nav (consumer) to the scroll engine
    // (producer); both get clones of the same handle.
    let spy = use_state(SectionSpy::default);

    html! {
        <>
            <Global css={GLOBAL_CSS} />
            <Nav spy={(*spy).clone()} />
            <Home />
            <ScrollEffects spy={(*spy).clone()} />
            <HoverLayer />
            <EngagementTracker />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Vitalis page initialized");
    yew::Renderer::<App>::new().render();
}
