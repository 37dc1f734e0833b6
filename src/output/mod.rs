//! Rendering of toolkit reports.
//!
//! The toolkit itself only computes; these helpers turn its result records
//! into terminal tables or JSON for whatever notebook or CLI sits on top.

pub mod json;
pub mod terminal;
