//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use canasta::prelude::*;
//! ```

pub use crate::engine::{recommend, recommend_checked, Recommendation};
pub use crate::error::{CanastaError, Result};
pub use crate::rules::{normalize_item, RawRuleRecord, Rule, RuleStore};
