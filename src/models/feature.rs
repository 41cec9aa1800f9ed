use serde::{Deserialize, Serialize};

use super::product::ItemList;

// ---------------------------------------------------------------------------
// CaptureFlag: the `takeScreenshot` marker
// ---------------------------------------------------------------------------

/// Whether a feature should be captured. Published documents carry either a
/// JSON boolean or a string here, so both are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CaptureFlag {
    Bool(bool),
    Text(String),
}

impl CaptureFlag {
    pub fn is_enabled(&self) -> bool {
        match self {
            CaptureFlag::Bool(b) => *b,
            CaptureFlag::Text(s) => matches!(
                s.trim().to_ascii_lowercase().as_str(),
                "true" | "yes" | "1"
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// Screenshot
// ---------------------------------------------------------------------------

/// Metadata about one captured image of a feature (not the image bytes).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Screenshot {
    pub status: Option<String>,
    pub mode: Option<String>,
    pub time_of_capture: Option<String>,
    pub filekey_raw: Option<String>,
    pub filekey_styled: Option<String>,
    pub filesize: Option<f64>,
}

// ---------------------------------------------------------------------------
// EditionRef / FeatureEdition
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditionRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureEdition {
    pub edition: EditionRef,
}

// ---------------------------------------------------------------------------
// Feature
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub id: String,
    pub name: String,
    pub active: bool,
    pub description: String,
    #[serde(rename = "URL")]
    pub url: Option<String>,
    pub selector: Option<String>,
    pub take_screenshot: Option<CaptureFlag>,
    pub filename: Option<String>,
    pub screenshots: ItemList<Screenshot>,
    #[serde(rename = "FeatureEditions")]
    pub feature_editions: ItemList<FeatureEdition>,
}

impl Feature {
    /// `true` only when the capture flag is present and enabled.
    pub fn wants_screenshot(&self) -> bool {
        self.take_screenshot
            .as_ref()
            .is_some_and(CaptureFlag::is_enabled)
    }

    /// Identifiers of the editions this feature claims to belong to.
    pub fn edition_ids(&self) -> impl Iterator<Item = &str> {
        self.feature_editions.iter().map(|fe| fe.edition.id.as_str())
    }

    pub fn in_edition(&self, edition_id: &str) -> bool {
        self.edition_ids().any(|id| id == edition_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_flag_accepts_bool_and_string() {
        let b: CaptureFlag = serde_json::from_str("true").unwrap();
        let s: CaptureFlag = serde_json::from_str("\"Yes\"").unwrap();
        let off: CaptureFlag = serde_json::from_str("\"false\"").unwrap();
        assert_eq!(b, CaptureFlag::Bool(true));
        assert!(b.is_enabled());
        assert!(s.is_enabled());
        assert!(!off.is_enabled());
    }

    #[test]
    fn screenshot_null_and_absent_fields_are_none() {
        let shot: Screenshot =
            serde_json::from_str(r#"{"status": null, "filesize": 2048}"#).unwrap();
        assert_eq!(shot.status, None);
        assert_eq!(shot.mode, None);
        assert_eq!(shot.filesize, Some(2048.0));
    }

    #[test]
    fn feature_editions_use_capitalized_key() {
        let feature: Feature = serde_json::from_value(serde_json::json!({
            "id": "f1",
            "name": "Dashboards",
            "active": true,
            "description": "Revenue dashboards",
            "URL": null,
            "screenshots": { "items": [] },
            "FeatureEditions": { "items": [ { "edition": { "id": "e1", "name": "Starter" } } ] }
        }))
        .unwrap();
        assert!(feature.in_edition("e1"));
        assert!(!feature.in_edition("e2"));
        assert!(!feature.wants_screenshot());
        assert_eq!(feature.url, None);
    }
}
