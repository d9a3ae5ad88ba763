//! Bundled sample personas for the demo panel, plus a loader for
//! caller-supplied JSON files. Both paths validate records before handing
//! them to the UI: the filter itself tolerates anything, but shipping or
//! ingesting a persona with a blank id or an impossible age is a data bug
//! worth surfacing early.

use std::collections::HashSet;
use std::path::Path;

use crate::error::AppError;
use crate::models::PersonaRecord;
use crate::validation;

const SAMPLE_PERSONAS_JSON: &str = include_str!("../fixtures/personas.json");

/// The built-in demo panel, parsed from the embedded fixture.
pub fn sample_personas() -> Result<Vec<PersonaRecord>, AppError> {
    let personas: Vec<PersonaRecord> = serde_json::from_str(SAMPLE_PERSONAS_JSON)?;
    validate_panel(&personas)?;
    Ok(personas)
}

/// Load a persona panel from a JSON file on disk.
pub fn load_personas(path: &Path) -> Result<Vec<PersonaRecord>, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let personas: Vec<PersonaRecord> = serde_json::from_str(&raw)?;
    validate_panel(&personas)?;
    Ok(personas)
}

/// Reject blank ids/names, implausible ages, and duplicate ids.
fn validate_panel(personas: &[PersonaRecord]) -> Result<(), AppError> {
    let mut seen: HashSet<&str> = HashSet::new();
    for p in personas {
        validation::require_non_empty("persona id", &p.id)?;
        validation::require_non_empty("persona name", &p.name)?;
        validation::require_plausible_age("persona age", p.age)?;
        if !seen.insert(p.id.as_str()) {
            return Err(AppError::Validation(format!(
                "duplicate persona id: {}",
                p.id
            )));
        }
    }
    Ok(())
}
