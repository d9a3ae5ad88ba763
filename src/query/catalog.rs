//! Fixed keyword tables for query extraction.
//!
//! Every table is an explicit ordered slice and is scanned front to back;
//! the first substring hit wins. Order is part of the contract: longer or
//! more specific keywords must precede any keyword they contain (e.g.
//! "fintech" before "tech", "quebec city" in the city table before the
//! "quebec" province entry is ever consulted).

/// Known city keywords, lowercase. Scanned before provinces.
pub const CITIES: &[&str] = &[
    "toronto",
    "vancouver",
    "montreal",
    "calgary",
    "ottawa",
    "edmonton",
    "winnipeg",
    "quebec city",
    "hamilton",
    "halifax",
];

/// Known province/region keywords, lowercase. Scanned only when no city hit.
pub const PROVINCES: &[&str] = &[
    "ontario",
    "quebec",
    "british columbia",
    "alberta",
    "manitoba",
    "saskatchewan",
    "nova scotia",
    "new brunswick",
];

/// Industry keywords, lowercase. "fintech" must stay ahead of "tech".
pub const INDUSTRIES: &[&str] = &[
    "fintech",
    "healthcare",
    "education",
    "retail",
    "finance",
    "marketing",
    "gaming",
    "hospitality",
    "construction",
    "tech",
];

/// Generation labels: (trigger keywords, canonical label). Scanned in order,
/// first group with any keyword hit wins.
pub const GENERATIONS: &[(&[&str], &str)] = &[
    (&["gen z", "generation z"], "Gen Z"),
    (&["millennial", "gen y"], "Millennial"),
    (&["gen x", "generation x"], "Gen X"),
];

/// First keyword from `table` that occurs as a substring of `haystack`.
/// `haystack` must already be lowercased.
pub fn find_keyword(haystack: &str, table: &[&'static str]) -> Option<&'static str> {
    table.iter().copied().find(|kw| haystack.contains(kw))
}
