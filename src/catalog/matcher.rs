use std::collections::HashSet;

use serde::Serialize;

use super::reference::{normalize_token, Catalog};

/// One reference record that shares at least one symptom with the query.
/// `matched_symptoms` lists the shared tokens in the record's own order,
/// joined for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub disease: String,
    pub treatment: String,
    pub matched_symptoms: String,
}

/// Outcome of a symptom match. `NoMatch` is a designated value, not an
/// error and not an empty result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    Matches(Vec<MatchResult>),
    NoMatch,
}

impl Catalog {
    /// Match raw user symptom tokens against the table.
    ///
    /// Tokens are trimmed, lowercased and deduplicated before lookup, so
    /// arbitrary free-text fragments degrade to an empty query rather
    /// than an error. Results preserve table row order and carry no
    /// relevance ranking.
    pub fn match_symptoms(&self, raw_tokens: &[&str]) -> MatchOutcome {
        let query: HashSet<String> = raw_tokens
            .iter()
            .map(|t| normalize_token(t))
            .filter(|t| !t.is_empty())
            .collect();

        if query.is_empty() {
            return MatchOutcome::NoMatch;
        }

        let mut results = Vec::new();
        for record in self.records() {
            let matched: Vec<&str> = record
                .symptoms
                .iter()
                .filter(|s| query.contains(*s))
                .map(String::as_str)
                .collect();

            if !matched.is_empty() {
                results.push(MatchResult {
                    disease: record.disease.clone(),
                    treatment: record.treatment.clone(),
                    matched_symptoms: matched.join(", "),
                });
            }
        }

        if results.is_empty() {
            MatchOutcome::NoMatch
        } else {
            MatchOutcome::Matches(results)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(outcome: MatchOutcome) -> Vec<MatchResult> {
        match outcome {
            MatchOutcome::Matches(results) => results,
            MatchOutcome::NoMatch => panic!("expected matches"),
        }
    }

    #[test]
    fn matching_is_case_insensitive() {
        let catalog = Catalog::load_test();
        let upper = catalog.match_symptoms(&["Fever"]);
        let lower = catalog.match_symptoms(&["fever"]);
        assert_eq!(upper, lower);
        assert!(!results(upper).is_empty());
    }

    #[test]
    fn results_preserve_table_order() {
        let catalog = Catalog::load_test();
        // "irritability" sits in the last row, "fever" in the first two.
        let matched = results(catalog.match_symptoms(&["irritability", "fever"]));
        let diseases: Vec<&str> = matched.iter().map(|r| r.disease.as_str()).collect();
        assert_eq!(diseases, vec!["Common Cold", "Influenza", "Insomnia"]);
    }

    #[test]
    fn duplicate_query_tokens_collapse() {
        let catalog = Catalog::load_test();
        let once = catalog.match_symptoms(&["fever"]);
        let twice = catalog.match_symptoms(&["fever", "Fever", " fever "]);
        assert_eq!(once, twice);
    }

    #[test]
    fn matched_symptoms_follow_record_order() {
        let catalog = Catalog::parse(
            "Disease,Symptoms,Ayurvedic Treatment\n\
             Cold,\"cough, fever\",Ginger tea\n",
        )
        .unwrap();

        // Query order is reversed relative to the record; output follows
        // the record.
        let matched = results(catalog.match_symptoms(&["Fever", " cough "]));
        assert_eq!(matched.len(), 1);
        assert_eq!(
            matched[0],
            MatchResult {
                disease: "Cold".into(),
                treatment: "Ginger tea".into(),
                matched_symptoms: "cough, fever".into(),
            }
        );
    }

    #[test]
    fn matched_symptoms_are_subset_of_record_and_query() {
        let catalog = Catalog::load_test();
        let query = vec!["fever", "bloating", "chills"];
        let matched = results(catalog.match_symptoms(&query));

        for result in &matched {
            let record = catalog
                .records()
                .iter()
                .find(|r| r.disease == result.disease)
                .unwrap();
            for token in result.matched_symptoms.split(", ") {
                assert!(record.symptoms.iter().any(|s| s == token));
                assert!(query.contains(&token));
            }
        }
    }

    #[test]
    fn partial_overlap_still_matches() {
        let catalog = Catalog::load_test();
        // "chills" appears only in the Influenza row alongside two other
        // symptoms the query does not mention.
        let matched = results(catalog.match_symptoms(&["chills", "telepathy"]));
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].disease, "Influenza");
        assert_eq!(matched[0].matched_symptoms, "chills");
    }

    #[test]
    fn duplicate_disease_names_stay_separate_rows() {
        // Disease names are labels, not keys; rows sharing a name are
        // matched and reported independently.
        let catalog = Catalog::parse(
            "Disease,Symptoms,Ayurvedic Treatment\n\
             Fever,\"high temperature, chills\",Tulsi decoction\n\
             Fever,\"mild temperature\",Rest and fluids\n",
        )
        .unwrap();

        let matched = results(catalog.match_symptoms(&["chills", "mild temperature"]));
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].treatment, "Tulsi decoction");
        assert_eq!(matched[1].treatment, "Rest and fluids");
    }

    #[test]
    fn empty_input_is_no_match() {
        let catalog = Catalog::load_test();
        assert_eq!(catalog.match_symptoms(&[]), MatchOutcome::NoMatch);
    }

    #[test]
    fn whitespace_only_input_is_no_match() {
        let catalog = Catalog::load_test();
        assert_eq!(
            catalog.match_symptoms(&["  ", "", "\t"]),
            MatchOutcome::NoMatch
        );
    }

    #[test]
    fn unknown_symptoms_are_no_match() {
        let catalog = Catalog::load_test();
        assert_eq!(
            catalog.match_symptoms(&["levitation", "x-ray vision"]),
            MatchOutcome::NoMatch
        );
    }

    #[test]
    fn no_match_is_distinguishable_from_matches() {
        let catalog = Catalog::load_test();
        let hit = catalog.match_symptoms(&["fever"]);
        let miss = catalog.match_symptoms(&["levitation"]);
        assert!(matches!(hit, MatchOutcome::Matches(_)));
        assert!(matches!(miss, MatchOutcome::NoMatch));
        assert_ne!(hit, miss);
    }
}
