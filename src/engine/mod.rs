//! Recommendation engine: top-N complementary products for a basket.
//!
//! A pure function over (basket, rule store, limit). Matching is per basket
//! item against rule antecedent membership, scoring is confidence × lift,
//! and results are deduplicated so each item appears once with the
//! statistics of its best-scoring candidate.
//!
//! # Example
//!
//! ```
//! use canasta::engine::recommend;
//! use canasta::rules::{RawRuleRecord, RuleStore};
//!
//! let store = RuleStore::from_records(vec![RawRuleRecord {
//!     antecedents: Some("{'milk'}".to_string()),
//!     consequents: Some("{'bread'}".to_string()),
//!     confidence: Some(0.8),
//!     lift: Some(2.0),
//!     ..Default::default()
//! }]);
//!
//! let results = recommend(&["milk"], &store, 5);
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].item, "BREAD");
//! ```

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{CanastaError, Result};
use crate::rules::{normalize_item, Rule, RuleStore};

/// One recommended product with the statistics of the rule that ranked it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Normalized item identifier. Never a member of the query basket.
    pub item: String,
    /// Confidence of the best-scoring rule that produced this item.
    pub confidence: f64,
    /// Lift of the best-scoring rule that produced this item.
    pub lift: f64,
}

/// Scored candidate emitted per (matched rule, consequent item) pair before
/// the global sort and dedup.
struct Candidate {
    item: String,
    score: f64,
    confidence: f64,
    lift: f64,
}

/// Rank the top `limit` complementary items for `basket`.
///
/// Basket items are normalized (trim + uppercase) exactly as rule items were
/// at load time. A rule matches a basket item when its antecedent CONTAINS
/// that item; a multi-item antecedent need not be fully covered by the
/// basket. Every consequent item not already in the basket becomes a
/// candidate scored by the rule's confidence × lift; candidates are sorted
/// descending by score (stable, invalid scores last) and deduplicated by
/// item, first occurrence kept.
///
/// An empty basket or a zero limit yields an empty result, never a panic.
/// Each call allocates fresh candidate buffers; the store is only read.
#[must_use]
pub fn recommend<S: AsRef<str>>(
    basket: &[S],
    store: &RuleStore,
    limit: usize,
) -> Vec<Recommendation> {
    let mut selected: Vec<String> = Vec::with_capacity(basket.len());
    for item in basket {
        let token = normalize_item(item.as_ref());
        if !token.is_empty() && !selected.contains(&token) {
            selected.push(token);
        }
    }
    if selected.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut candidates: Vec<Candidate> = Vec::new();
    for item in &selected {
        let mut matched: Vec<&Rule> = store
            .rules()
            .iter()
            .filter(|rule| rule.antecedent.contains(item))
            .collect();

        // Per-item pre-order by (confidence desc, lift desc). The global
        // score sort below supersedes it, but it fixes the arrival order
        // that stable sorting preserves among equal scores.
        matched.sort_by(|a, b| {
            descending(a.confidence, b.confidence).then_with(|| descending(a.lift, b.lift))
        });

        for rule in matched {
            for product in &rule.consequent {
                if selected.contains(product) {
                    continue;
                }
                candidates.push(Candidate {
                    item: product.clone(),
                    score: rule.score(),
                    confidence: rule.confidence,
                    lift: rule.lift,
                });
            }
        }
    }

    candidates.sort_by(|a, b| descending(a.score, b.score));

    let mut results: Vec<Recommendation> = Vec::with_capacity(limit.min(candidates.len()));
    for candidate in candidates {
        if results.iter().any(|r| r.item == candidate.item) {
            continue;
        }
        results.push(Recommendation {
            item: candidate.item,
            confidence: candidate.confidence,
            lift: candidate.lift,
        });
        if results.len() == limit {
            break;
        }
    }
    results
}

/// Checked variant for caller-facing use: an empty basket (after
/// normalization) is reported as [`CanastaError::EmptyBasket`] instead of an
/// empty result, so a shell can distinguish "please select at least one
/// product" from "no strong recommendations".
pub fn recommend_checked<S: AsRef<str>>(
    basket: &[S],
    store: &RuleStore,
    limit: usize,
) -> Result<Vec<Recommendation>> {
    let has_item = basket
        .iter()
        .any(|item| !normalize_item(item.as_ref()).is_empty());
    if !has_item {
        return Err(CanastaError::EmptyBasket);
    }
    Ok(recommend(basket, store, limit))
}

/// Descending comparator tolerant of NaN: incomparable values rank equal,
/// so a NaN never aborts the sort.
fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
