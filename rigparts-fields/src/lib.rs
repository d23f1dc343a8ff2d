//! Category schema registry and record validator
//!
//! `rigparts-fields` is a standalone, schema-only crate: it owns the closed
//! set of component categories, the per-category field lists, and the
//! validation/coercion rules applied to form input before persistence. It
//! knows nothing about storage or orchestration — consumers feed it raw
//! input and get back typed, schema-ordered record values.
//!
//! # Architecture
//!
//! - **Closed categories**: the 8 component kinds are an enum, so a
//!   category/schema mismatch cannot compile
//! - **Data-driven validation**: required-ness and numeric coercion come
//!   from `FieldSpec`, never from per-category code
//! - **Fail fast**: the first missing required field (schema order) fails
//!   the record; numeric fields reject unparsable input outright

pub mod category;
pub mod error;
pub mod schema;
pub mod types;
pub mod validate;

pub use category::{Category, UnknownCategory};
pub use error::{Result, ValidationError};
pub use schema::fields_for;
pub use types::{
    CoercedRecord, ComponentRecord, FieldKind, FieldSpec, FieldValue, RawRecord, RecordId,
};
pub use validate::validate;
