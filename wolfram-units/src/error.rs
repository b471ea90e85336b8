//! Taxonomy integrity errors
//!
//! These only surface while the table is being built. A request never sees
//! one: an unknown unit is a normal lookup miss, not an error.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxonomyError {
    #[error("unit '{unit}' is listed in both '{first}' and '{second}'")]
    DuplicateUnit {
        unit: String,
        first: String,
        second: String,
    },

    #[error("category '{0}' is defined more than once")]
    DuplicateCategory(String),

    #[error("category '{category}' contains an empty unit string")]
    EmptyUnit { category: String },
}
