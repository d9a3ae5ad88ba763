//! Free-text audience query parsing and filtering.
//!
//! `parse_and_filter` is the one entry point the UI calls: a sentence like
//! "Gen Z fintech founders in Toronto" becomes a [`QueryCriteria`] which is
//! then applied as a conjunctive filter over the candidate personas. The
//! parser is a best-effort keyword classifier, deliberately total: text it
//! does not recognize simply contributes no constraint, so an unparseable
//! sentence degrades to "show everyone", never to an error or an empty panel.

pub mod catalog;
mod extract;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::PersonaRecord;

/// Country-wide location marker. Recorded when the sentence mentions Canada
/// without a more specific city/province, and deliberately skipped at filter
/// time. Product has not decided whether it should ever filter; until then
/// the observed set-but-ignored behavior is kept.
pub const COUNTRY_SENTINEL: &str = "canada";

/// Structured filter derived from one query sentence. Absent fields impose
/// no constraint; a fully-empty value matches every candidate.
///
/// One-shot lifecycle: built by [`parse_query`], applied once, discarded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QueryCriteria {
    pub age_min: Option<i32>,
    pub age_max: Option<i32>,
    pub gender: Option<String>,
    pub generation: Option<String>,
    /// Substring to match against the candidate location (case-insensitive),
    /// or the [`COUNTRY_SENTINEL`] which matches everything.
    pub location: Option<String>,
    /// Substring to match against the candidate industry (case-insensitive).
    pub industry: Option<String>,
}

impl QueryCriteria {
    /// True when no dimension extracted anything.
    pub fn is_empty(&self) -> bool {
        self.age_min.is_none()
            && self.age_max.is_none()
            && self.gender.is_none()
            && self.generation.is_none()
            && self.location.is_none()
            && self.industry.is_none()
    }

    /// Conjunction of every present criterion.
    pub fn matches(&self, candidate: &PersonaRecord) -> bool {
        // Age applies only when both bounds are present. Extraction never
        // produces a half-open pair, but a hand-built value must degrade to
        // "no constraint" instead of crashing or guessing a bound.
        if let (Some(min), Some(max)) = (self.age_min, self.age_max) {
            if candidate.age < min || candidate.age > max {
                return false;
            }
        }
        if let Some(ref gender) = self.gender {
            if !candidate.gender.eq_ignore_ascii_case(gender) {
                return false;
            }
        }
        if let Some(ref generation) = self.generation {
            if !candidate.generation.eq_ignore_ascii_case(generation) {
                return false;
            }
        }
        if let Some(ref location) = self.location {
            // parse_query emits lowercase, but this type is deserializable;
            // normalize here so hand-built values match the same way.
            let location = location.to_lowercase();
            if location != COUNTRY_SENTINEL
                && !candidate.location.to_lowercase().contains(&location)
            {
                return false;
            }
        }
        if let Some(ref industry) = self.industry {
            if !candidate
                .industry
                .to_lowercase()
                .contains(&industry.to_lowercase())
            {
                return false;
            }
        }
        true
    }
}

/// Extract structured criteria from one free-text sentence.
///
/// Dimensions are independent; one sentence can set several at once. Never
/// fails: unrecognized text yields no constraint for that dimension.
pub fn parse_query(sentence: &str) -> QueryCriteria {
    let lower = sentence.to_lowercase();

    let (age_min, age_max) = extract::age(sentence);
    let criteria = QueryCriteria {
        age_min,
        age_max,
        gender: extract::gender(&lower).map(String::from),
        generation: extract::generation(&lower).map(String::from),
        location: extract::location(&lower).map(String::from),
        industry: extract::industry(&lower).map(String::from),
    };

    tracing::debug!(?criteria, sentence, "parsed audience query");
    criteria
}

/// Parse `sentence` and return the candidates that satisfy every extracted
/// criterion, in their original order.
///
/// Pure function of its two inputs: no side effects, no failure modes. An
/// empty or unrecognized sentence returns the full candidate list.
pub fn parse_and_filter(sentence: &str, candidates: &[PersonaRecord]) -> Vec<PersonaRecord> {
    let criteria = parse_query(sentence);
    let matched: Vec<PersonaRecord> = candidates
        .iter()
        .filter(|p| criteria.matches(p))
        .cloned()
        .collect();

    tracing::debug!(
        total = candidates.len(),
        matched = matched.len(),
        "audience filter applied"
    );
    matched
}
