//! Relationship analysis over a set of arguments

use dialectic_domain::{Argument, ArgumentId, TextAnalyzer};
use dialectic_text::overlap;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Two related but non-identical premises from different arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplementaryPair {
    /// Argument owning `first_premise`
    pub first: ArgumentId,
    /// Argument owning `second_premise`
    pub second: ArgumentId,
    /// Premise from `first`
    pub first_premise: String,
    /// Premise from `second`
    pub second_premise: String,
}

/// Two claims on the same topic where exactly one is negated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimConflict {
    /// First argument of the pair
    pub first: ArgumentId,
    /// Second argument of the pair
    pub second: ArgumentId,
    /// Claim of `first`
    pub first_claim: String,
    /// Claim of `second`
    pub second_claim: String,
    /// Value terms both claims mention
    pub shared_values: Vec<String>,
}

/// Everything the synthesizer learned about its inputs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SynthesisAnalysis {
    /// Themes found in more than one argument, in order of first appearance
    pub shared_themes: Vec<String>,
    /// Premises (compared case-insensitively) held by more than one argument
    pub shared_premises: Vec<String>,
    /// Related-but-distinct premise pairs
    pub complementary: Vec<ComplementaryPair>,
    /// Conflicts with a hedge and a shared value
    pub reconcilable: Vec<ClaimConflict>,
    /// Conflicts without common ground
    pub irreconcilable: Vec<ClaimConflict>,
    /// Direct contradicts edges among the inputs in the graph
    pub direct_contradictions: usize,
}

/// Themes and premises present in more than one argument, plus pairwise findings
pub(crate) fn analyze<A: TextAnalyzer>(analyzer: &A, arguments: &[&Argument]) -> SynthesisAnalysis {
    let theme_lists: Vec<Vec<String>> = arguments
        .iter()
        .map(|a| analyzer.themes(&a.full_text()))
        .collect();
    let shared_themes = shared_across(theme_lists.iter().map(|themes| {
        themes.iter().map(|t| (t.clone(), t.clone())).collect::<Vec<_>>()
    }));

    let shared_premises = shared_across(arguments.iter().map(|a| {
        a.premises()
            .iter()
            .map(|p| (p.trim().to_lowercase(), p.trim().to_string()))
            .collect::<Vec<_>>()
    }));

    let mut analysis = SynthesisAnalysis {
        shared_themes,
        shared_premises,
        ..Default::default()
    };

    for (i, first) in arguments.iter().enumerate() {
        for second in &arguments[i + 1..] {
            analysis
                .complementary
                .extend(complementary_premises(analyzer, first, second));

            if let Some(conflict) = claim_conflict(analyzer, first, second) {
                let hedged =
                    analyzer.has_hedge(first.claim()) || analyzer.has_hedge(second.claim());
                if hedged && !conflict.shared_values.is_empty() {
                    analysis.reconcilable.push(conflict);
                } else {
                    analysis.irreconcilable.push(conflict);
                }
            }
        }
    }

    analysis
}

/// Items (by normalized key) appearing in more than one list, first display form wins
fn shared_across<I>(lists: I) -> Vec<String>
where
    I: IntoIterator<Item = Vec<(String, String)>>,
{
    let mut order: Vec<(String, String)> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for list in lists {
        let mut seen: BTreeSet<String> = BTreeSet::new();
        for (key, display) in list {
            if !seen.insert(key.clone()) {
                continue;
            }
            let count = counts.entry(key.clone()).or_insert(0);
            if *count == 0 {
                order.push((key, display));
            }
            *count += 1;
        }
    }

    order
        .into_iter()
        .filter(|(key, _)| counts.get(key).copied().unwrap_or(0) > 1)
        .map(|(_, display)| display)
        .collect()
}

/// Premise pairs whose keyword sets overlap partially
fn complementary_premises<A: TextAnalyzer>(
    analyzer: &A,
    first: &Argument,
    second: &Argument,
) -> Vec<ComplementaryPair> {
    let mut pairs = Vec::new();
    for p1 in first.premises() {
        let k1 = analyzer.keywords(p1);
        for p2 in second.premises() {
            let k2 = analyzer.keywords(p2);
            let shared = overlap(&k1, &k2);
            if shared > 0 && shared < k1.len().min(k2.len()) {
                pairs.push(ComplementaryPair {
                    first: first.id().clone(),
                    second: second.id().clone(),
                    first_premise: p1.clone(),
                    second_premise: p2.clone(),
                });
            }
        }
    }
    pairs
}

/// Exactly one claim negated and more than half the shorter keyword set shared
fn claim_conflict<A: TextAnalyzer>(
    analyzer: &A,
    first: &Argument,
    second: &Argument,
) -> Option<ClaimConflict> {
    let negated_first = analyzer.has_negation(first.claim());
    let negated_second = analyzer.has_negation(second.claim());
    if negated_first == negated_second {
        return None;
    }

    let k1 = analyzer.keywords(first.claim());
    let k2 = analyzer.keywords(second.claim());
    let shorter = k1.len().min(k2.len()) as f64;
    if (overlap(&k1, &k2) as f64) <= shorter / 2.0 {
        return None;
    }

    let v1 = analyzer.value_terms(first.claim());
    let v2 = analyzer.value_terms(second.claim());
    Some(ClaimConflict {
        first: first.id().clone(),
        second: second.id().clone(),
        first_claim: first.claim().to_string(),
        second_claim: second.claim().to_string(),
        shared_values: v1.intersection(&v2).cloned().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dialectic_domain::{ArgumentDraft, ArgumentType};
    use dialectic_text::LexicalAnalyzer;

    fn argument(id: &str, claim: &str, premises: &[&str]) -> Argument {
        Argument::from_draft(
            ArgumentDraft::new(ArgumentType::Thesis, claim, "Therefore act").with_id(id)
                .with_premises(premises.iter().copied()),
        )
        .unwrap()
    }

    #[test]
    fn test_shared_across_counts_lists_not_occurrences() {
        let lists = vec![
            vec![("a".to_string(), "A".to_string()), ("a".to_string(), "A".to_string())],
            vec![("b".to_string(), "B".to_string())],
        ];
        assert!(shared_across(lists).is_empty());

        let lists = vec![
            vec![("b".to_string(), "B".to_string()), ("a".to_string(), "A".to_string())],
            vec![("a".to_string(), "a".to_string()), ("b".to_string(), "b".to_string())],
        ];
        assert_eq!(shared_across(lists), vec!["B", "A"]);
    }

    #[test]
    fn test_complementary_requires_partial_overlap() {
        let analyzer = LexicalAnalyzer::new();
        let a = argument(
            "a",
            "x claim",
            &["public transit reduces traffic", "identical premise text"],
        );
        let b = argument(
            "b",
            "y claim",
            &["traffic harms public health", "identical premise text"],
        );
        let pairs = complementary_premises(&analyzer, &a, &b);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].first_premise, "public transit reduces traffic");
        assert_eq!(pairs[0].second_premise, "traffic harms public health");
    }

    #[test]
    fn test_conflict_needs_single_negation_and_topic_overlap() {
        let analyzer = LexicalAnalyzer::new();
        let a = argument("a", "Nuclear power is safe", &[]);
        let b = argument("b", "Nuclear power is not safe", &[]);
        let c = argument("c", "Nuclear power is never cheap", &[]);
        let d = argument("d", "Wind farms are not reliable", &[]);

        assert!(claim_conflict(&analyzer, &a, &b).is_some());
        // both negated
        assert!(claim_conflict(&analyzer, &b, &c).is_none());
        // no topic overlap
        assert!(claim_conflict(&analyzer, &a, &d).is_none());
    }

    #[test]
    fn test_reconcilable_needs_hedge_and_shared_value() {
        let analyzer = LexicalAnalyzer::new();
        let a = argument("a", "Surveillance may improve public security", &[]);
        let b = argument("b", "Surveillance does not improve public security", &[]);
        let c = argument("c", "Surveillance cameras improve public security", &[]);

        let analysis = analyze(&analyzer, &[&a, &b]);
        assert_eq!(analysis.reconcilable.len(), 1);
        assert_eq!(analysis.reconcilable[0].shared_values, vec!["security"]);

        let analysis = analyze(&analyzer, &[&c, &b]);
        assert!(analysis.reconcilable.is_empty());
        assert_eq!(analysis.irreconcilable.len(), 1);
    }

    #[test]
    fn test_shared_premises_case_insensitive() {
        let analyzer = LexicalAnalyzer::new();
        let a = argument("a", "first claim", &["Housing costs are rising"]);
        let b = argument("b", "second claim", &["housing costs are rising "]);
        let analysis = analyze(&analyzer, &[&a, &b]);
        assert_eq!(analysis.shared_premises, vec!["Housing costs are rising"]);
    }
}
