//! Association rule store for market basket recommendations.
//!
//! Rules are precomputed upstream (e.g. by Apriori mining over historical
//! transactions) and delivered as a static dataset. This module ingests raw
//! dataset rows into a normalized, immutable [`RuleStore`] that the
//! recommendation engine queries.
//!
//! # Example
//!
//! ```
//! use canasta::rules::{RawRuleRecord, RuleStore};
//!
//! let records = vec![RawRuleRecord {
//!     antecedents: Some("{'milk', 'bread'}".to_string()),
//!     consequents: Some("{'butter'}".to_string()),
//!     confidence: Some(0.8),
//!     lift: Some(2.1),
//!     ..Default::default()
//! }];
//!
//! let store = RuleStore::from_records(records);
//! assert_eq!(store.len(), 1);
//! assert_eq!(store.catalog(), vec!["BREAD".to_string(), "MILK".to_string()]);
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub mod parse;

use parse::parse_item_set;

/// Canonical form of an item identifier: trimmed and upper-cased.
///
/// Applied once at rule ingestion and once per basket item at query time,
/// so basket/rule comparisons are case-insensitive by construction.
#[must_use]
pub fn normalize_item(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Association rule: antecedent => consequent.
///
/// "Customers who buy the antecedent set tend to also buy the consequent
/// set." Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Items in the antecedent (left side), normalized. Never empty in a store.
    pub antecedent: BTreeSet<String>,
    /// Items in the consequent (right side), normalized. Never empty in a store.
    pub consequent: BTreeSet<String>,
    /// Confidence: P(consequent | antecedent), conventionally in [0, 1].
    pub confidence: f64,
    /// Lift: confidence / P(consequent); 1.0 means no association.
    pub lift: f64,
}

impl Rule {
    /// Combined ranking signal: confidence × lift.
    ///
    /// An invalid (NaN) product is demoted to negative infinity so that
    /// rules with missing statistics sort last instead of poisoning the
    /// ranking.
    #[must_use]
    pub fn score(&self) -> f64 {
        let score = self.confidence * self.lift;
        if score.is_nan() {
            f64::NEG_INFINITY
        } else {
            score
        }
    }
}

/// Raw dataset row, as materialized by an external loader.
///
/// Mirrors the logical columns of the mined-rules dataset: each item-set
/// field may be encoded as a structured set literal (`antecedents` /
/// `consequents`) or as a `|`-delimited string (`antecedents_str` /
/// `consequents_str`); the literal encoding is tried first. Numeric fields
/// may be absent; an absent confidence or lift demotes the rule's candidates
/// to the bottom of the ranking rather than failing the load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRuleRecord {
    /// Antecedent item-set as a set literal, e.g. `frozenset({'MILK'})`.
    #[serde(default)]
    pub antecedents: Option<String>,
    /// Antecedent item-set as a `|`-delimited string, e.g. `MILK|BREAD`.
    #[serde(default)]
    pub antecedents_str: Option<String>,
    /// Consequent item-set as a set literal.
    #[serde(default)]
    pub consequents: Option<String>,
    /// Consequent item-set as a `|`-delimited string.
    #[serde(default)]
    pub consequents_str: Option<String>,
    /// Confidence column.
    #[serde(default)]
    pub confidence: Option<f64>,
    /// Lift column.
    #[serde(default)]
    pub lift: Option<f64>,
}

/// Immutable store of normalized association rules.
///
/// Built once at startup, queried repeatedly by the recommendation engine.
/// Safe to share read-only across threads; nothing mutates it after load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleStore {
    rules: Vec<Rule>,
}

impl RuleStore {
    /// Build a store from raw dataset rows.
    ///
    /// Each item-set field is decoded by [`parse::parse_item_set`]: set
    /// literal first, `|`-delimited fallback, empty set if both fail. Rows
    /// whose antecedent or consequent normalizes to empty are dropped,
    /// since they could never match a basket. This is a silent degrade,
    /// never a load failure. Input order of surviving rules is preserved;
    /// it is the substrate for the engine's stable tie-breaking.
    #[must_use]
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = RawRuleRecord>,
    {
        let rules = records
            .into_iter()
            .filter_map(|record| {
                let antecedent = parse_item_set(
                    record.antecedents.as_deref(),
                    record.antecedents_str.as_deref(),
                );
                let consequent = parse_item_set(
                    record.consequents.as_deref(),
                    record.consequents_str.as_deref(),
                );
                if antecedent.is_empty() || consequent.is_empty() {
                    return None;
                }
                Some(Rule {
                    antecedent,
                    consequent,
                    confidence: record.confidence.unwrap_or(f64::NAN),
                    lift: record.lift.unwrap_or(f64::NAN),
                })
            })
            .collect();

        Self { rules }
    }

    /// Build a store from already-constructed rules.
    ///
    /// Item tokens are re-normalized and rules with an empty antecedent or
    /// consequent are dropped, so the store invariant holds regardless of
    /// how the rules were produced.
    #[must_use]
    pub fn from_rules<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = Rule>,
    {
        let rules = rules
            .into_iter()
            .filter_map(|rule| {
                let antecedent: BTreeSet<String> = rule
                    .antecedent
                    .iter()
                    .map(|item| normalize_item(item))
                    .filter(|item| !item.is_empty())
                    .collect();
                let consequent: BTreeSet<String> = rule
                    .consequent
                    .iter()
                    .map(|item| normalize_item(item))
                    .filter(|item| !item.is_empty())
                    .collect();
                if antecedent.is_empty() || consequent.is_empty() {
                    return None;
                }
                Some(Rule {
                    antecedent,
                    consequent,
                    ..rule
                })
            })
            .collect();

        Self { rules }
    }

    /// Returns the normalized rules in load order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Returns the number of rules in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the store holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Distinct items appearing in any rule antecedent, sorted.
    ///
    /// This is the selectable product list for a UI shell: only items that
    /// act as rule triggers are useful to pre-select. Consequent-only items
    /// are excluded.
    #[must_use]
    pub fn catalog(&self) -> Vec<String> {
        let items: BTreeSet<&String> = self
            .rules
            .iter()
            .flat_map(|rule| rule.antecedent.iter())
            .collect();
        items.into_iter().cloned().collect()
    }
}
