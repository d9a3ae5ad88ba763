//! Property tests for the audience filter invariants: the result is always a
//! subsequence of the input, filtering is idempotent, and the empty sentence
//! is the identity. Sentences are assembled from fragments the parser does
//! and does not recognize, so criteria land in every combination.

use audience_query::{parse_and_filter, parse_query, PersonaRecord};
use proptest::prelude::*;

fn arb_persona() -> impl Strategy<Value = PersonaRecord> {
    (
        "[a-z0-9]{8}",
        prop::sample::select(vec!["Avery", "Marcus", "Priya", "Jake", "Sophie", "Omar"]),
        16..=85i32,
        prop::sample::select(vec!["Men", "Women"]),
        prop::sample::select(vec!["Gen Z", "Millennial", "Gen X"]),
        prop::sample::select(vec![
            "Toronto, ON",
            "Toronto, Canada",
            "Vancouver, BC",
            "Montreal, QC",
            "Austin, TX",
            "",
        ]),
        prop::sample::select(vec![
            "Fintech",
            "Healthcare",
            "Retail",
            "Technology",
            "Agriculture",
        ]),
    )
        .prop_map(
            |(id, name, age, gender, generation, location, industry)| PersonaRecord {
                id,
                name: name.to_string(),
                age,
                gender: gender.to_string(),
                generation: generation.to_string(),
                location: location.to_string(),
                industry: industry.to_string(),
                feedback: String::new(),
                reaction_label: String::new(),
                reaction_narrative: String::new(),
            },
        )
}

fn arb_sentence() -> impl Strategy<Value = String> {
    let fragment = prop::sample::select(vec![
        "find",
        "women",
        "men",
        "female",
        "gen z",
        "millennial",
        "generation x",
        "age around 25",
        "age range 30-45",
        "age range 45-30",
        "age 2147483647",
        "age range 99999999999-100000000000",
        "in toronto",
        "ontario",
        "canadian",
        "fintech",
        "tech",
        "founders",
        "purple monkey dishwasher",
    ]);
    prop::collection::vec(fragment, 0..4).prop_map(|parts| parts.join(" "))
}

/// True when `result` can be produced by deleting elements from `input`
/// without reordering.
fn is_subsequence(result: &[PersonaRecord], input: &[PersonaRecord]) -> bool {
    let mut it = input.iter();
    result.iter().all(|r| it.any(|i| i == r))
}

proptest! {
    #[test]
    fn result_is_ordered_subsequence(
        sentence in arb_sentence(),
        panel in prop::collection::vec(arb_persona(), 0..20),
    ) {
        let out = parse_and_filter(&sentence, &panel);
        prop_assert!(out.len() <= panel.len());
        prop_assert!(is_subsequence(&out, &panel));
    }

    #[test]
    fn filtering_is_idempotent(
        sentence in arb_sentence(),
        panel in prop::collection::vec(arb_persona(), 0..20),
    ) {
        let once = parse_and_filter(&sentence, &panel);
        let twice = parse_and_filter(&sentence, &once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn empty_sentence_is_identity(
        panel in prop::collection::vec(arb_persona(), 0..20),
    ) {
        prop_assert_eq!(parse_and_filter("", &panel), panel);
    }

    #[test]
    fn every_survivor_satisfies_the_criteria(
        sentence in arb_sentence(),
        panel in prop::collection::vec(arb_persona(), 0..20),
    ) {
        let criteria = parse_query(&sentence);
        for p in parse_and_filter(&sentence, &panel) {
            prop_assert!(criteria.matches(&p));
        }
    }

    #[test]
    fn parser_is_total_on_recognized_fragments(
        sentence in arb_sentence(),
        panel in prop::collection::vec(arb_persona(), 0..8),
    ) {
        // Includes the i32-edge ages; must never panic on any combination.
        let _ = parse_and_filter(&sentence, &panel);
    }

    #[test]
    fn parser_is_total(sentence in ".{0,200}") {
        // Arbitrary unicode input never panics and never invents criteria
        // out of thin air for the age dimension without a digit present.
        let criteria = parse_query(&sentence);
        if !sentence.chars().any(|c| c.is_ascii_digit()) {
            prop_assert!(criteria.age_min.is_none());
        }
    }
}
