//! Email address parsing and normalization

use crate::error::{ParseError, Result};
use crate::index::DomainIndex;
use crate::types::{FoldingRule, ParsedEmail};
use tracing::debug;

/// Parse an email address into its normalized, provider-aware form and
/// classify its domain against `index`.
///
/// The split happens at the last `@`; a missing `@`, an empty local part,
/// or an empty domain is malformed. The index is consulted once, so the
/// whole call observes a single snapshot. Never blocks, never performs I/O.
pub fn parse_email(index: &DomainIndex, address: &str) -> Result<ParsedEmail> {
    let (local_part, domain) = address
        .rsplit_once('@')
        .filter(|(local, domain)| !local.is_empty() && !domain.is_empty())
        .ok_or_else(|| ParseError::Malformed(address.to_string()))?;

    let domain = domain.to_lowercase();
    let disposable = index.is_disposable(&domain);

    let folded = FoldingRule::for_domain(&domain).fold(local_part);

    debug!(
        "parsed {address}: normalized={} disposable={disposable}",
        folded.normalized
    );

    Ok(ParsedEmail {
        email: address.to_string(),
        local_part: local_part.to_string(),
        domain,
        preferred: folded.preferred,
        extra: folded.extra,
        normalized: folded.normalized,
        disposable,
    })
}
