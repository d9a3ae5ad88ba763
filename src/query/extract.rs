//! Per-dimension criterion extraction.
//!
//! Each function inspects the (lowercased) sentence independently; a sentence
//! can set several criteria at once. Within a dimension the rules form an
//! ordered chain and the first matching rule wins.

use std::sync::OnceLock;

use regex::Regex;

use super::catalog;
use super::COUNTRY_SENTINEL;

/// Spread applied around a single "age around N" mention.
const SINGLE_AGE_SPREAD: i32 = 2;

/// "age [range] [around|between] N [to|–|-] M"
fn age_range_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)age\s*(?:range\s*)?(?:around|between)?\s*(\d+)\s*(?:to|–|-)\s*(\d+)")
            .expect("age range regex")
    })
}

/// "age [around|about] N"
fn age_single_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)age\s*(?:around|about)?\s*(\d+)").expect("single age regex")
    })
}

/// Extract an (age_min, age_max) pair. The two-number range pattern is tried
/// first and short-circuits the single-number pattern. Bounds are passed
/// through as written, even inverted; the filter side handles that.
pub(super) fn age(sentence: &str) -> (Option<i32>, Option<i32>) {
    if let Some(caps) = age_range_re().captures(sentence) {
        // Overflowing bounds parse to None; the filter treats a half-set
        // pair as unconstrained. Either way the single pattern is skipped.
        return (caps[1].parse().ok(), caps[2].parse().ok());
    }
    if let Some(caps) = age_single_re().captures(sentence) {
        if let Ok(n) = caps[1].parse::<i32>() {
            // Saturate at the i32 edges; "age 2147483647" must not panic.
            return (
                Some(n.saturating_sub(SINGLE_AGE_SPREAD)),
                Some(n.saturating_add(SINGLE_AGE_SPREAD)),
            );
        }
    }
    (None, None)
}

/// "women"/"female" is checked before "men"/"male": "men" is a substring of
/// "women", so the ordering is load-bearing, not cosmetic.
pub(super) fn gender(lower: &str) -> Option<&'static str> {
    if lower.contains("women") || lower.contains("female") {
        Some("Women")
    } else if lower.contains("men") || lower.contains("male") {
        Some("Men")
    } else {
        None
    }
}

pub(super) fn generation(lower: &str) -> Option<&'static str> {
    for (keywords, label) in catalog::GENERATIONS {
        if keywords.iter().any(|kw| lower.contains(kw)) {
            return Some(label);
        }
    }
    None
}

/// Cities first, then provinces, then the country sentinel. The sentinel is
/// only recorded when nothing more specific matched; the filter side treats
/// it as a no-op rather than a constraint.
pub(super) fn location(lower: &str) -> Option<&'static str> {
    if let Some(city) = catalog::find_keyword(lower, catalog::CITIES) {
        return Some(city);
    }
    if let Some(province) = catalog::find_keyword(lower, catalog::PROVINCES) {
        return Some(province);
    }
    if lower.contains("canada") || lower.contains("canadian") {
        return Some(COUNTRY_SENTINEL);
    }
    None
}

pub(super) fn industry(lower: &str) -> Option<&'static str> {
    catalog::find_keyword(lower, catalog::INDUSTRIES)
}
