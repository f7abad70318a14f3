//! Cache key registry.
//!
//! Keys are ordered token sequences compared structurally, never by
//! identity. The family root key is a strict prefix of every more specific
//! key in that family, which is what makes bulk invalidation by prefix work.

use std::fmt;

/// The resource families served by the recruiter portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceFamily {
    RecruiterApplications,
    RecruiterJobs,
}

impl ResourceFamily {
    /// Root token for the family.
    pub const fn root_token(self) -> &'static str {
        match self {
            Self::RecruiterApplications => "recruiter-applications",
            Self::RecruiterJobs => "recruiter-jobs",
        }
    }
}

/// An immutable, structurally-compared cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    /// Root key for a family: `[root]`. Prefix of every key in the family.
    pub fn all(family: ResourceFamily) -> Self {
        Self(vec![family.root_token().to_string()])
    }

    /// List-view key for a family: `[root, "list"]`.
    pub fn list(family: ResourceFamily) -> Self {
        Self::all(family).child("list")
    }

    /// Extend the key with one more token.
    pub fn child(mut self, token: impl Into<String>) -> Self {
        self.0.push(token.into());
        self
    }

    /// The ordered tokens.
    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    /// Whether `prefix` is a (non-strict) prefix of this key.
    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.len() >= prefix.0.len() && self.0[..prefix.0.len()] == prefix.0[..]
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_extends_all() {
        for family in [
            ResourceFamily::RecruiterApplications,
            ResourceFamily::RecruiterJobs,
        ] {
            let expected = QueryKey::all(family).child("list");
            assert_eq!(QueryKey::list(family), expected);
        }
    }

    #[test]
    fn test_jobs_list_tokens() {
        assert_eq!(
            QueryKey::list(ResourceFamily::RecruiterJobs).tokens(),
            ["recruiter-jobs", "list"]
        );
    }

    #[test]
    fn test_families_never_collide() {
        assert_ne!(
            QueryKey::list(ResourceFamily::RecruiterJobs),
            QueryKey::list(ResourceFamily::RecruiterApplications)
        );
        assert_ne!(
            QueryKey::all(ResourceFamily::RecruiterJobs),
            QueryKey::all(ResourceFamily::RecruiterApplications)
        );
    }

    #[test]
    fn test_construction_is_deterministic() {
        // Two independently built keys are structurally equal and hash alike
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(QueryKey::list(ResourceFamily::RecruiterJobs));
        assert!(set.contains(&QueryKey::list(ResourceFamily::RecruiterJobs)));
    }

    #[test]
    fn test_root_is_strict_prefix_of_list() {
        let all = QueryKey::all(ResourceFamily::RecruiterApplications);
        let list = QueryKey::list(ResourceFamily::RecruiterApplications);
        assert!(list.starts_with(&all));
        assert!(!all.starts_with(&list));
        assert!(list.starts_with(&list));
    }

    #[test]
    fn test_prefix_does_not_cross_families() {
        let jobs_root = QueryKey::all(ResourceFamily::RecruiterJobs);
        let apps_list = QueryKey::list(ResourceFamily::RecruiterApplications);
        assert!(!apps_list.starts_with(&jobs_root));
    }

    #[test]
    fn test_display_joins_tokens() {
        assert_eq!(
            QueryKey::list(ResourceFamily::RecruiterApplications).to_string(),
            "recruiter-applications/list"
        );
    }
}
