//! Data model and text rendering for the course registrar.
//!
//! The types here mirror the rows the registrar store hands back: class
//! overviews for searches and the composite class detail record. Rendering
//! is pure string building so both binaries (and tests) share it.

pub mod display;
pub mod types;
pub mod wrap;

pub use display::{render_details, render_overviews, WRAP_WIDTH};
pub use types::{ClassDetail, ClassLookup, ClassRecord, Crosslisting, OverviewRow};
pub use wrap::{wrap, WrapOptions};
