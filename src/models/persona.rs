use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ============================================================================
// PersonaRecord
// ============================================================================

/// One simulated audience member: demographic attributes plus the generated
/// reaction to the advertisement under test. Records are produced by the
/// persona-generation backend (or the bundled fixture set) and are treated as
/// read-only by the query filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PersonaRecord {
    /// Opaque unique token assigned at generation time.
    pub id: String,
    pub name: String,
    /// Expected range roughly 18-100; not enforced at filter time.
    pub age: i32,
    /// Free-text label, e.g. "Men" / "Women".
    pub gender: String,
    /// Free-text label, e.g. "Gen Z" / "Millennial" / "Gen X".
    pub generation: String,
    /// Free-text city/province/country string, e.g. "Toronto, ON".
    pub location: String,
    pub industry: String,
    /// Verbatim feedback quote shown in the persona card.
    pub feedback: String,
    /// Short reaction tag, e.g. "Intrigued".
    pub reaction_label: String,
    /// Longer reaction narrative for the detail modal.
    pub reaction_narrative: String,
}

impl PersonaRecord {
    /// Build a record with a freshly generated v4 UUID id. Callers that
    /// already hold a backend-assigned id construct the struct directly.
    pub fn new(
        name: impl Into<String>,
        age: i32,
        gender: impl Into<String>,
        generation: impl Into<String>,
        location: impl Into<String>,
        industry: impl Into<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            age,
            gender: gender.into(),
            generation: generation.into(),
            location: location.into(),
            industry: industry.into(),
            feedback: String::new(),
            reaction_label: String::new(),
            reaction_narrative: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_assigns_unique_ids() {
        let a = PersonaRecord::new("Avery", 24, "Women", "Gen Z", "Toronto, ON", "Fintech");
        let b = PersonaRecord::new("Avery", 24, "Women", "Gen Z", "Toronto, ON", "Fintech");
        assert_ne!(a.id, b.id);
        assert_eq!(a.name, "Avery");
        assert_eq!(a.age, 24);
    }

    #[test]
    fn test_camel_case_wire_format() {
        let p = PersonaRecord {
            id: "p-1".into(),
            name: "Morgan".into(),
            age: 41,
            gender: "Men".into(),
            generation: "Gen X".into(),
            location: "Calgary, AB".into(),
            industry: "Construction".into(),
            feedback: "The pacing lost me halfway through.".into(),
            reaction_label: "Skeptical".into(),
            reaction_narrative: "Tuned out once the jingle started.".into(),
        };
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["reactionLabel"], "Skeptical");
        assert_eq!(json["reactionNarrative"], "Tuned out once the jingle started.");
        assert!(json.get("reaction_label").is_none());
    }

    #[test]
    fn test_round_trips_through_json() {
        let p = PersonaRecord::new("Sam", 30, "Women", "Millennial", "Halifax, NS", "Education");
        let json = serde_json::to_string(&p).unwrap();
        let back: PersonaRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
