use once_cell::sync::Lazy;
use regex::Regex;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::NodeRef;

/// Outcome of validating one field; `Err` holds the inline message.
pub type Verdict = Result<(), String>;

// Shape check only: something before the @, something after, a dot in the
// domain part. The server remains the authority on deliverability.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

#[derive(Clone, PartialEq, Debug)]
pub enum FieldKind {
    Text,
    Email,
    Number { min: Option<f64>, max: Option<f64> },
}

#[derive(Clone, PartialEq, Debug)]
pub struct FieldRule {
    pub required: bool,
    pub kind: FieldKind,
}

impl FieldRule {
    pub fn text(required: bool) -> Self {
        Self { required, kind: FieldKind::Text }
    }

    pub fn email(required: bool) -> Self {
        Self { required, kind: FieldKind::Email }
    }

    pub fn number(required: bool, min: f64, max: f64) -> Self {
        Self {
            required,
            kind: FieldKind::Number { min: Some(min), max: Some(max) },
        }
    }
}

/// Validates a raw field value against its rule. `Err` carries the message
/// shown inline under the field.
pub fn validate(rule: &FieldRule, raw: &str) -> Result<(), String> {
    let value = raw.trim();

    if value.is_empty() {
        return if rule.required {
            Err("This field is required".to_string())
        } else {
            Ok(())
        };
    }

    match &rule.kind {
        FieldKind::Text => Ok(()),
        FieldKind::Email => {
            if EMAIL_RE.is_match(value) {
                Ok(())
            } else {
                Err("Please enter a valid email address".to_string())
            }
        }
        FieldKind::Number { min, max } => {
            let number: f64 = match value.parse() {
                Ok(n) if f64::is_finite(n) => n,
                _ => return Err("Please enter a valid number".to_string()),
            };
            if let Some(min) = min {
                if number < *min {
                    return Err(format!("Value must be at least {min}"));
                }
            }
            if let Some(max) = max {
                if number > *max {
                    return Err(format!("Value must be no more than {max}"));
                }
            }
            Ok(())
        }
    }
}

/// Visual state class for a field: untouched fields carry neither mark.
pub fn verdict_class(verdict: Option<&Verdict>) -> Option<&'static str> {
    match verdict {
        Some(Ok(())) => Some("is-valid"),
        Some(Err(_)) => Some("is-invalid"),
        None => None,
    }
}

/// Brings the named field into view and gives it focus. Used after a blocked
/// submission to point the user at the first offender.
pub fn focus_field(form: &NodeRef, name: &str) {
    let Some(root) = form.cast::<Element>() else { return };
    let Ok(Some(node)) = root.query_selector(&format!("[name='{name}']")) else { return };
    let Ok(field) = node.dyn_into::<HtmlElement>() else { return };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Center);
    field.scroll_into_view_with_scroll_into_view_options(&options);
    let _ = field.focus();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_and_empty_is_invalid() {
        let rule = FieldRule::text(true);
        assert_eq!(validate(&rule, ""), Err("This field is required".into()));
        assert_eq!(validate(&rule, "   "), Err("This field is required".into()));
    }

    #[test]
    fn optional_and_empty_is_valid() {
        assert!(validate(&FieldRule::text(false), "").is_ok());
        assert!(validate(&FieldRule::email(false), "").is_ok());
        assert!(validate(&FieldRule::number(false, 0.0, 100.0), "  ").is_ok());
    }

    #[test]
    fn email_shape() {
        let rule = FieldRule::email(true);
        assert!(validate(&rule, "user@example.com").is_ok());
        assert!(validate(&rule, "  user@example.com  ").is_ok());

        let err = Err("Please enter a valid email address".to_string());
        assert_eq!(validate(&rule, "userexample.com"), err);
        assert_eq!(validate(&rule, "user@example"), err);
        assert_eq!(validate(&rule, "us er@example.com"), err);
        assert_eq!(validate(&rule, "user@"), err);
    }

    #[test]
    fn number_parse_failures() {
        let rule = FieldRule::number(true, 0.0, 100.0);
        let err = Err("Please enter a valid number".to_string());
        assert_eq!(validate(&rule, "abc"), err);
        assert_eq!(validate(&rule, "12abc"), err);
        assert_eq!(validate(&rule, "inf"), err);
        assert_eq!(validate(&rule, "NaN"), err);
    }

    #[test]
    fn number_range() {
        let rule = FieldRule::number(true, 0.0, 100.0);
        assert!(validate(&rule, "50").is_ok());
        assert!(validate(&rule, "0").is_ok());
        assert!(validate(&rule, "100").is_ok());
        assert_eq!(
            validate(&rule, "150"),
            Err("Value must be no more than 100".to_string())
        );
        assert_eq!(
            validate(&rule, "-5"),
            Err("Value must be at least 0".to_string())
        );
    }

    #[test]
    fn unbounded_number_accepts_any_finite() {
        let rule = FieldRule { required: true, kind: FieldKind::Number { min: None, max: None } };
        assert!(validate(&rule, "-123456.789").is_ok());
    }
}
