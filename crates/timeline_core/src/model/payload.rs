//! Top-level timeline payload.
//!
//! Missing or `null` members degrade to empty collections instead of failing
//! the whole load.

use crate::model::category::CategoryMap;
use crate::model::era::Era;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Parsed content of the timeline data file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePayload {
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: CategoryMap,
    #[serde(default, deserialize_with = "null_as_default")]
    pub timeline_data: Vec<Era>,
}

impl TimelinePayload {
    /// Parses a payload from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Total number of events across all eras, including dangling ones.
    pub fn event_count(&self) -> usize {
        self.timeline_data.iter().map(|era| era.events.len()).sum()
    }
}

pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reads a display string: numbers and booleans are stringified, anything
/// else that is not text reads as empty.
pub(crate) fn display_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_display_text(deserializer)?.unwrap_or_default())
}

pub(crate) fn optional_display_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    // Why: one malformed field must not fail the whole payload and push the
    // page into the fallback message; the entry still renders with what it has.
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

#[cfg(test)]
mod tests {
    use super::TimelinePayload;

    #[test]
    fn keeps_category_insertion_order() {
        let payload = TimelinePayload::from_json_str(
            r##"{"categories":{"zeta":{"label":"Z","color":"#000"},"alpha":{"label":"A","color":"#fff"}},"timelineData":[]}"##,
        )
        .expect("payload should parse");

        let keys = payload.categories.keys().cloned().collect::<Vec<_>>();
        assert_eq!(keys, vec!["zeta".to_string(), "alpha".to_string()]);
    }

    #[test]
    fn missing_members_degrade_to_empty() {
        let payload = TimelinePayload::from_json_str("{}").expect("empty object should parse");
        assert!(payload.categories.is_empty());
        assert!(payload.timeline_data.is_empty());

        let payload = TimelinePayload::from_json_str(r#"{"categories":null,"timelineData":null}"#)
            .expect("null members should parse");
        assert_eq!(payload, TimelinePayload::default());
    }

    #[test]
    fn counts_events_across_eras() {
        let payload = TimelinePayload::from_json_str(
            r#"{"timelineData":[{"era":"Han","events":[{"category":"a"},{"category":"b"}]},{"era":"Tang","events":[{"category":"a"}]}]}"#,
        )
        .expect("payload should parse");
        assert_eq!(payload.event_count(), 3);
    }

    #[test]
    fn loose_text_fields_keep_the_timeline_loadable() {
        let payload = TimelinePayload::from_json_str(
            r#"{
                "categories": {"a": {"label": 7, "color": null}},
                "timelineData": [{"era": 1911, "events": [
                    {"category": "a", "year": "1911", "title": 1911, "desc": null}
                ]}]
            }"#,
        )
        .expect("null and numeric text fields should not fail the payload");

        assert_eq!(payload.categories["a"].label, "7");
        assert_eq!(payload.categories["a"].color, "");
        assert_eq!(payload.timeline_data[0].name, "1911");
        let event = &payload.timeline_data[0].events[0];
        assert_eq!(event.title, "1911");
        assert_eq!(event.description, "");
    }
}
