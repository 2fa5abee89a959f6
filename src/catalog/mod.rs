//! Disease/symptom/treatment reference table.
//!
//! The table is loaded from CSV exactly once at startup and shared
//! immutably for the life of the process. Matching walks the table in
//! row order and never reorders or ranks results.

mod matcher;
mod reference;

pub use matcher::{MatchOutcome, MatchResult};
pub use reference::{Catalog, CatalogError, ReferenceRecord};
