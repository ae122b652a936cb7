// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Disposable Email Detection
//!
//! Classifies email-address domains against a refreshable set of known
//! disposable ("throwaway") email providers and produces a normalized,
//! provider-aware canonical form for deduplication.
//!
//! # Features
//!
//! - Provider-aware local-part folding (dot-insensitivity, plus-aliasing)
//! - Sub-domain-aware disposable-domain classification
//! - Lock-free snapshot reads with atomic whole-set replacement
//! - Sequential or parallel multi-source list fetching over HTTP
//!
//! # Example
//!
//! ```rust
//! use disposable_email::{parse_email, DomainIndex};
//!
//! let index = DomainIndex::with_domains(["mailto.plus"]);
//!
//! let parsed = parse_email(&index, "R2.D2+junk@gmail.com").unwrap();
//! assert_eq!(parsed.normalized, "r2d2");
//! assert_eq!(parsed.extra, "junk");
//! assert!(!parsed.disposable);
//!
//! assert!(parse_email(&index, "anyone@mailto.plus").unwrap().disposable);
//! ```
//!
//! Keeping the index current is the caller's job: build [`ListSource`]s
//! (typically [`HttpSource`]s) and run [`refresh`] on whatever schedule
//! fits, e.g. from a periodic task. A failed refresh leaves the previous
//! snapshot in place.

mod error;
mod fetch;
mod index;
mod parser;
mod types;

pub use error::{FetchError, ParseError, Result};
pub use fetch::{
    DEFAULT_LIST_URL, FetchMode, HttpSource, ListSource, fetch_merged, fetch_merged_parallel,
    refresh,
};
pub use index::DomainIndex;
pub use parser::parse_email;
pub use types::{FoldedLocalPart, FoldingRule, ParsedEmail};
