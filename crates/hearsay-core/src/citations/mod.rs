//! Citation extraction.
//!
//! URLs and quoted spans are evidence. Each is tied to the nearest
//! preceding claim inside a bounded lookback window; what stays untied
//! still counts, it just covers no claim.

mod extractor;
mod types;

pub use extractor::{domain_of, CitationExtractor};
pub use types::{Citation, CitationKind};
