//! CLI command implementations.

pub(crate) mod catalog;
pub(crate) mod recommend;
