// Fixed tuning values for the page enhancers. Everything the behavior layer
// needs to agree on lives here so the components never hard-code numbers.

/// Scroll offset past which the navbar picks up the `scrolled` class.
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Height of the fixed navbar, subtracted when smooth-scrolling to a section.
pub const NAV_HEADER_OFFSET_PX: f64 = 80.0;

/// Minimum interval for the throttled navbar scroll listener (~60 Hz).
pub const NAV_SCROLL_THROTTLE_MS: u32 = 16;

/// Visibility fraction at which a section counts as entered.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Pulls the trigger line 50px above the viewport bottom.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Delay step between staggered child reveals.
pub const REVEAL_STAGGER_MS: u32 = 100;

/// Hero background moves at half scroll speed, upwards.
pub const PARALLAX_RATE: f64 = -0.5;

/// Parallax is switched off below this viewport width.
pub const PARALLAX_MIN_VIEWPORT_PX: f64 = 768.0;

pub const RESIZE_DEBOUNCE_MS: u32 = 150;

/// Animation-start stagger between floating decorative elements.
pub const FLOAT_STAGGER_SECS: f64 = 0.5;

pub const TYPEWRITER_TICK_MS: u32 = 100;

/// localStorage key for the prediction form draft.
pub const DRAFT_KEY: &str = "vitalis-prediction-form";

/// Contact form: simulated send duration, then confirmation hold time.
pub const CONTACT_SENDING_MS: u32 = 2_000;
pub const CONTACT_REVERT_MS: u32 = 3_000;

/// Newsletter button holds its confirmed state this long.
pub const NEWSLETTER_REVERT_MS: u32 = 2_000;
