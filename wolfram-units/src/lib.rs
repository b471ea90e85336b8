//! Wolfram Units - Unit Taxonomy and Completion
//!
//! Provides the unit vocabulary offered to clients when they fill in a
//! conversion request:
//! - `UnitTaxonomy`: category name -> unit strings, validated at construction
//! - `UnitTaxonomy::resolve_category`: exact, case-sensitive category lookup
//! - `CompletionEngine`: context-narrowed, tiered completion of unit names
//!
//! Categories:
//! - Mechanics (length, weight, time, speed, acceleration, force, ...)
//! - Thermal (temperature, specific heat, thermal conductivity)
//! - Electrical (current, voltage, resistance, capacitance, ...)
//! - Fluids (density, viscosity, flow rate, surface tension)
//! - Other (currency, concentration, radioactivity, ...)

mod catalog;
mod error;
mod taxonomy;
mod completion;

pub use error::TaxonomyError;
pub use taxonomy::{Category, UnitTaxonomy};
pub use completion::{
    Completion, CompletionContext, CompletionEngine, UnitArgument, MAX_COMPLETIONS,
};
