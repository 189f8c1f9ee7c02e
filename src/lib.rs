//! Canasta: market basket recommendations in pure Rust.
//!
//! Canasta ranks complementary products for a customer's current selections
//! using precomputed association rules (antecedent item-set to consequent
//! item-set, weighted by confidence and lift). Rule mining happens upstream;
//! this crate ingests the mined dataset once into an immutable store and
//! answers top-N queries with a pure, allocation-per-call engine.
//!
//! # Quick Start
//!
//! ```
//! use canasta::prelude::*;
//!
//! // Rows as exported by the rule-mining step.
//! let records = vec![
//!     RawRuleRecord {
//!         antecedents: Some("frozenset({'MILK'})".to_string()),
//!         consequents: Some("frozenset({'BREAD', 'BUTTER'})".to_string()),
//!         confidence: Some(0.72),
//!         lift: Some(1.8),
//!         ..Default::default()
//!     },
//!     RawRuleRecord {
//!         antecedents: Some("frozenset({'MILK'})".to_string()),
//!         consequents: Some("frozenset({'EGGS'})".to_string()),
//!         confidence: Some(0.55),
//!         lift: Some(1.2),
//!         ..Default::default()
//!     },
//! ];
//!
//! let store = RuleStore::from_records(records);
//! assert_eq!(store.catalog(), vec!["MILK".to_string()]);
//!
//! let results = recommend(&["milk"], &store, 3);
//! assert_eq!(results[0].item, "BREAD");
//! assert!(results.iter().all(|r| r.item != "MILK"));
//! ```
//!
//! # Modules
//!
//! - [`rules`]: Rule store (dataset-row ingestion, normalization, catalog)
//! - [`engine`]: Recommendation engine (matching, scoring, ranking)
//! - [`error`]: Error types

pub mod engine;
pub mod error;
pub mod prelude;
pub mod rules;

pub use engine::{recommend, recommend_checked, Recommendation};
pub use error::{CanastaError, Result};
pub use rules::{RawRuleRecord, Rule, RuleStore};
