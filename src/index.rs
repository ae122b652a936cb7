//! Shared index of known disposable domains
//!
//! The index is a handle around an immutable snapshot. Readers clone the
//! current `Arc` and keep working against it even if a refresh swaps in a
//! new set mid-call; mutation only ever happens by whole-set replacement.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

/// Concurrently readable set of disposable domains with atomic replacement.
///
/// Construct one per process (or per test) and share it by reference; there
/// is deliberately no global instance.
#[derive(Debug, Default)]
pub struct DomainIndex {
    active: RwLock<Arc<HashSet<String>>>,
}

impl DomainIndex {
    /// Create an empty index. Every query classifies as not disposable
    /// until the first [`Self::replace`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an index seeded with the given domains, lowercased.
    pub fn with_domains<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set: HashSet<String> = domains
            .into_iter()
            .map(|d| d.as_ref().to_lowercase())
            .collect();
        Self {
            active: RwLock::new(Arc::new(set)),
        }
    }

    /// The currently active snapshot. O(1); the returned `Arc` stays valid
    /// across later replacements.
    #[must_use]
    pub fn snapshot(&self) -> Arc<HashSet<String>> {
        self.read_active()
    }

    /// Atomically install `domains` as the active set. Concurrent snapshots
    /// observe either the old or the new set in full. Last write wins.
    pub fn replace(&self, domains: HashSet<String>) {
        let next = Arc::new(domains);
        let mut active = self
            .active
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *active = next;
    }

    /// Whether `domain` is a known disposable domain or a sub-domain of one.
    ///
    /// Matching is on whole dot-separated labels: `a.b.example.com` matches
    /// an entry `example.com`, but `notexample.com` does not, and a listed
    /// domain never marks its own parents.
    #[must_use]
    pub fn is_disposable(&self, domain: &str) -> bool {
        let domain = domain.to_lowercase();
        let snapshot = self.read_active();

        if snapshot.contains(&domain) {
            return true;
        }

        // Check every label boundary so the suffix match cannot cross into
        // the middle of a label.
        domain
            .char_indices()
            .filter(|&(_, c)| c == '.')
            .any(|(i, _)| snapshot.contains(&domain[i + 1..]))
    }

    /// Number of domains in the active snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read_active().len()
    }

    /// Whether the active snapshot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read_active().is_empty()
    }

    fn read_active(&self) -> Arc<HashSet<String>> {
        Arc::clone(
            &self
                .active
                .read()
                .unwrap_or_else(std::sync::PoisonError::into_inner),
        )
    }
}
