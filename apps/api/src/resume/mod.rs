//! Resume field extraction.
//!
//! A deterministic regex heuristic that turns raw resume text into an
//! [`ExtractedResume`]. Nothing here performs I/O or returns errors: a field
//! that cannot be found keeps its default.

pub mod contact;
pub mod entries;
pub mod extractor;
pub mod identity;
pub mod model;
pub mod patterns;
pub mod sections;
pub mod skills;
pub mod text;

pub use extractor::extract;
pub use model::{ExtractedResume, ExtractionPreview};
