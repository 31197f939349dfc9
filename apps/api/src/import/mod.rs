//! Resume import: turns an upload or pasted text into extraction input.
//!
//! Uploads are classified, size checked and decoded to text (PDFs through the
//! backend chain in [`pdf`]). The text then goes through the resume extractor
//! and the result is returned for confirmation. Nothing is persisted.

pub mod decode;
pub mod handlers;
pub mod pdf;
