use std::collections::BTreeMap;

use gloo_console::warn;

/// Field name -> current value. Absent key means the field was never edited.
pub type Draft = BTreeMap<String, String>;

pub fn encode(draft: &Draft) -> String {
    serde_json::to_string(draft).unwrap_or_default()
}

pub fn decode(raw: &str) -> Result<Draft, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Drops draft keys that no longer correspond to a tracked field, so a stale
/// draft cannot inject values into fields that do not exist.
pub fn matching_fields(mut draft: Draft, names: &[&str]) -> Draft {
    draft.retain(|key, _| names.contains(&key.as_str()));
    draft
}

pub fn save(key: &str, draft: &Draft) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, &encode(draft));
    }
}

/// Reads the stored draft. A malformed blob is logged and treated as absent,
/// never surfaced to the page.
pub fn load(key: &str) -> Option<Draft> {
    let storage = local_storage()?;
    let raw = storage.get_item(key).ok().flatten()?;
    match decode(&raw) {
        Ok(draft) => Some(draft),
        Err(e) => {
            warn!("Failed to load saved form data:", e.to_string());
            None
        }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok()).flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let mut draft = Draft::new();
        draft.insert("age".into(), "45".into());
        draft.insert("sex".into(), "M".into());

        let restored = decode(&encode(&draft)).unwrap();
        assert_eq!(restored, draft);
    }

    #[test]
    fn malformed_blob_is_an_error_not_a_panic() {
        assert!(decode("not json").is_err());
        assert!(decode("[1, 2, 3]").is_err());
        assert!(decode(r#"{"age": 45}"#).is_err()); // values must be strings
    }

    #[test]
    fn empty_object_is_a_valid_empty_draft() {
        assert_eq!(decode("{}").unwrap(), Draft::new());
    }

    #[test]
    fn unknown_keys_are_dropped_on_restore() {
        let mut draft = Draft::new();
        draft.insert("age".into(), "45".into());
        draft.insert("legacy_field".into(), "x".into());

        let filtered = matching_fields(draft, &["age", "sex"]);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.get("age").map(String::as_str), Some("45"));
    }
}
