//! Core types for parsed addresses and provider folding rules

use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed email address with its provider-aware canonical forms
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParsedEmail {
    /// Original input, unmodified
    pub email: String,

    /// Substring before the last `@`, case preserved
    pub local_part: String,

    /// Substring after the last `@`, lowercased
    pub domain: String,

    /// Canonical-cased local part with any alias suffix removed
    pub preferred: String,

    /// The alias suffix removed from `local_part`, empty if none applied
    pub extra: String,

    /// Fully case- and alias-folded local part for identity comparison
    pub normalized: String,

    /// Whether `domain` is, or is a sub-domain of, a known disposable domain
    pub disposable: bool,
}

impl ParsedEmail {
    /// The normalized identity `normalized@domain`, suitable as a
    /// deduplication key across aliases of the same inbox.
    #[must_use]
    pub fn canonical_address(&self) -> String {
        format!("{}@{}", self.normalized, self.domain)
    }
}

impl fmt::Display for ParsedEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.email)
    }
}

/// Local-part folding behavior, keyed by provider domain.
///
/// A closed table: adding a provider means adding a domain to
/// [`Self::for_domain`], not new control flow.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum FoldingRule {
    /// Case folding only; dots and plus segments are routing-significant
    #[default]
    Standard,

    /// Dots are ignored and everything after the first `+` is an alias tag
    DotInsensitivePlusAliasing,
}

/// Outcome of applying a folding rule to a local part
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldedLocalPart {
    pub preferred: String,
    pub extra: String,
    pub normalized: String,
}

impl FoldingRule {
    /// Look up the folding rule for a lowercased domain.
    #[must_use]
    pub fn for_domain(domain: &str) -> Self {
        match domain {
            "gmail.com" | "googlemail.com" => Self::DotInsensitivePlusAliasing,
            _ => Self::Standard,
        }
    }

    /// Apply this rule to a local part, preserving the input's case in
    /// `preferred` and `extra`.
    #[must_use]
    pub fn fold(self, local_part: &str) -> FoldedLocalPart {
        match self {
            Self::Standard => FoldedLocalPart {
                preferred: local_part.to_string(),
                extra: String::new(),
                normalized: local_part.to_lowercase(),
            },
            Self::DotInsensitivePlusAliasing => {
                let (preferred, extra) = match local_part.split_once('+') {
                    Some((before, after)) => (before.to_string(), after.to_string()),
                    None => (local_part.to_string(), String::new()),
                };
                let normalized = preferred.to_lowercase().replace('.', "");
                FoldedLocalPart {
                    preferred,
                    extra,
                    normalized,
                }
            }
        }
    }
}
