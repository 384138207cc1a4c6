//! Whitelist/blacklist decision logic over candidate identities.

use descriptor::Identity;
use std::collections::HashSet;
use tracing::trace;

/// Accept/reject predicate combining an optional whitelist and an
/// optional blacklist of identities.
///
/// ## Decision rule
/// Evaluated per identity:
/// 1. An identity on the blacklist is rejected, even when it is also
///    on the whitelist; the blacklist always wins.
/// 2. When a whitelist is configured, the identity must be on it.
/// 3. With neither list configured, every identity is accepted.
///
/// An absent list and an empty list mean the same thing: no
/// restriction of that kind. The setters normalize empty collections,
/// so a configured list is always non-empty.
#[derive(Debug, Clone, Default)]
pub struct FilterPolicy {
    whitelist: Option<HashSet<Identity>>,
    blacklist: Option<HashSet<Identity>>,
}

impl FilterPolicy {
    /// Policy with no restrictions: accepts every identity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whitelist wholesale.
    ///
    /// The identities are copied out of the caller's collection; later
    /// changes to that collection do not affect the policy. An empty
    /// collection clears the whitelist.
    pub fn set_whitelist<I, S>(&mut self, identities: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<Identity>,
    {
        self.whitelist = Self::normalize(identities);
    }

    /// Replace the blacklist wholesale. Same copy and normalization
    /// semantics as [`set_whitelist`](Self::set_whitelist).
    pub fn set_blacklist<I, S>(&mut self, identities: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<Identity>,
    {
        self.blacklist = Self::normalize(identities);
    }

    /// Builder-style variant of [`set_whitelist`](Self::set_whitelist).
    pub fn with_whitelist<I, S>(mut self, identities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Identity>,
    {
        self.set_whitelist(identities);
        self
    }

    /// Builder-style variant of [`set_blacklist`](Self::set_blacklist).
    pub fn with_blacklist<I, S>(mut self, identities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Identity>,
    {
        self.set_blacklist(identities);
        self
    }

    /// Decide whether a candidate identity may be instantiated.
    ///
    /// Pure and total: any string is a valid input, including the
    /// empty string, and the call never fails.
    pub fn accepts(&self, identity: &str) -> bool {
        if let Some(blacklist) = &self.blacklist {
            if blacklist.contains(identity) {
                trace!("'{}' rejected by blacklist", identity);
                return false;
            }
        }
        if let Some(whitelist) = &self.whitelist {
            if !whitelist.contains(identity) {
                trace!("'{}' not on whitelist", identity);
                return false;
            }
        }
        true
    }

    /// True when neither list is configured.
    pub fn is_unrestricted(&self) -> bool {
        self.whitelist.is_none() && self.blacklist.is_none()
    }

    fn normalize<I, S>(identities: I) -> Option<HashSet<Identity>>
    where
        I: IntoIterator<Item = S>,
        S: Into<Identity>,
    {
        let set: HashSet<Identity> = identities.into_iter().map(Into::into).collect();
        if set.is_empty() { None } else { Some(set) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrestricted_policy_accepts_everything() {
        let policy = FilterPolicy::new();
        assert!(policy.is_unrestricted());
        assert!(policy.accepts("pkg.Foo"));
        assert!(policy.accepts(""));
        assert!(policy.accepts("not a type name"));
    }

    #[test]
    fn whitelist_restricts_to_members() {
        let policy = FilterPolicy::new().with_whitelist(["A"]);
        assert!(policy.accepts("A"));
        assert!(!policy.accepts("B"));
    }

    #[test]
    fn blacklist_rejects_members() {
        let policy = FilterPolicy::new().with_blacklist(["pkg.Bad"]);
        assert!(!policy.accepts("pkg.Bad"));
        assert!(policy.accepts("pkg.Good"));
    }

    #[test]
    fn blacklist_overrides_whitelist() {
        // The one subtle rule: an identity on both lists is rejected.
        let policy = FilterPolicy::new()
            .with_whitelist(["pkg.Foo", "pkg.Bar"])
            .with_blacklist(["pkg.Bar"]);

        assert!(policy.accepts("pkg.Foo"));
        assert!(!policy.accepts("pkg.Bar"));
        assert!(!policy.accepts("pkg.Baz"));
    }

    #[test]
    fn empty_collections_mean_no_restriction() {
        let mut policy = FilterPolicy::new();
        policy.set_whitelist(Vec::<String>::new());
        policy.set_blacklist(Vec::<String>::new());

        assert!(policy.is_unrestricted());
        assert!(policy.accepts("anything"));
    }

    #[test]
    fn setters_replace_not_merge() {
        let mut policy = FilterPolicy::new();
        policy.set_whitelist(["pkg.Old"]);
        policy.set_whitelist(["pkg.New"]);

        assert!(policy.accepts("pkg.New"));
        assert!(!policy.accepts("pkg.Old"));
    }

    #[test]
    fn clearing_the_whitelist_lifts_the_restriction() {
        let mut policy = FilterPolicy::new();
        policy.set_whitelist(["pkg.Only"]);
        assert!(!policy.accepts("pkg.Other"));

        policy.set_whitelist(Vec::<String>::new());
        assert!(policy.accepts("pkg.Other"));
    }

    #[test]
    fn policy_copies_the_callers_collection() {
        let mut wanted = vec!["pkg.Foo".to_string()];
        let mut policy = FilterPolicy::new();
        policy.set_whitelist(wanted.iter().cloned());

        // Mutating the original collection must not affect the policy
        wanted.push("pkg.Bar".to_string());
        assert!(policy.accepts("pkg.Foo"));
        assert!(!policy.accepts("pkg.Bar"));
    }

    #[test]
    fn malformed_identities_are_ordinary_strings() {
        let policy = FilterPolicy::new().with_blacklist([""]);
        assert!(!policy.accepts(""));
        assert!(policy.accepts("pkg.Foo"));
    }
}
