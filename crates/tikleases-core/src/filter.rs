// ── Lease view filtering ──
//
// Pure functions over a fetched lease slice. Nothing here allocates
// leases or touches the network; a filter change never triggers a fetch.

use std::collections::BTreeSet;
use std::fmt;

use crate::Lease;

/// Which VLAN the view is restricted to.
///
/// "All VLANs" is a variant, not a magic string, so a router scope that
/// happens to be named `all` is still selectable as a concrete VLAN.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum VlanSelection {
    #[default]
    All,
    /// Exact, case-sensitive match on the lease's `active-server`.
    Only(String),
}

impl VlanSelection {
    pub fn matches(&self, lease: &Lease) -> bool {
        match self {
            Self::All => true,
            Self::Only(vlan) => lease.active_server.as_deref() == Some(vlan.as_str()),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl From<Option<String>> for VlanSelection {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::All, Self::Only)
    }
}

impl fmt::Display for VlanSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All VLANs"),
            Self::Only(vlan) => f.write_str(vlan),
        }
    }
}

/// Compound filter: VLAN selection AND hostname substring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaseFilter {
    pub vlan: VlanSelection,
    /// Case-insensitive substring of `host-name`. Empty means no restriction.
    pub hostname: String,
}

impl LeaseFilter {
    pub fn new(vlan: VlanSelection, hostname: impl Into<String>) -> Self {
        Self {
            vlan,
            hostname: hostname.into(),
        }
    }

    pub fn matches(&self, lease: &Lease) -> bool {
        self.vlan.matches(lease) && HostnameQuery::new(&self.hostname).matches(lease)
    }

    /// Apply the filter, keeping input order.
    pub fn apply<'a>(&self, leases: &'a [Lease]) -> Vec<&'a Lease> {
        filter_leases(leases, &self.vlan, &self.hostname)
    }

    /// `true` when neither predicate restricts anything.
    pub fn is_unrestricted(&self) -> bool {
        self.vlan.is_all() && self.hostname.is_empty()
    }
}

/// Upper-cased hostname query, computed once per filter pass.
struct HostnameQuery(Option<String>);

impl HostnameQuery {
    fn new(query: &str) -> Self {
        Self((!query.is_empty()).then(|| query.to_uppercase()))
    }

    fn matches(&self, lease: &Lease) -> bool {
        let Some(needle) = &self.0 else {
            return true;
        };
        lease
            .host_name
            .as_deref()
            .is_some_and(|name| name.to_uppercase().contains(needle.as_str()))
    }
}

/// Distinct non-empty `active-server` values, in ascending lexical order.
pub fn derive_vlans(leases: &[Lease]) -> Vec<String> {
    leases
        .iter()
        .filter_map(Lease::vlan)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// Leases matching `vlan` and containing `hostname` (case-insensitive).
///
/// An empty `hostname` applies no hostname restriction; a non-empty one
/// excludes leases without a hostname. Survivors keep their input order.
pub fn filter_leases<'a>(
    leases: &'a [Lease],
    vlan: &VlanSelection,
    hostname: &str,
) -> Vec<&'a Lease> {
    let query = HostnameQuery::new(hostname);
    leases
        .iter()
        .filter(|lease| vlan.matches(lease) && query.matches(lease))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn lease(id: &str, server: Option<&str>, host: Option<&str>, status: &str) -> Lease {
        let mut value = json!({ ".id": id, "status": status });
        if let Some(server) = server {
            value["active-server"] = json!(server);
        }
        if let Some(host) = host {
            value["host-name"] = json!(host);
        }
        serde_json::from_value(value).expect("valid lease")
    }

    /// Two VLANs, one lease without a hostname.
    fn sample() -> Vec<Lease> {
        vec![
            lease("1", Some("vlan10"), Some("alice-pc"), "bound"),
            lease("2", Some("vlan20"), Some("bob-phone"), "bound"),
            lease("3", Some("vlan10"), None, "waiting"),
        ]
    }

    fn ids(leases: &[&Lease]) -> Vec<String> {
        leases.iter().map(|l| l.id.clone()).collect()
    }

    fn only(vlan: &str) -> VlanSelection {
        VlanSelection::Only(vlan.into())
    }

    // ── derive_vlans ────────────────────────────────────────────────

    #[test]
    fn sample_vlans() {
        assert_eq!(derive_vlans(&sample()), vec!["vlan10", "vlan20"]);
    }

    #[test]
    fn vlans_ignore_absent_and_empty_servers() {
        let leases = vec![
            lease("1", None, Some("a"), "bound"),
            lease("2", Some(""), Some("b"), "bound"),
            lease("3", Some("guest"), None, "bound"),
        ];
        assert_eq!(derive_vlans(&leases), vec!["guest"]);
    }

    #[test]
    fn vlans_independent_of_input_order() {
        let mut leases = vec![
            lease("1", Some("vlan30"), None, "bound"),
            lease("2", Some("Lab"), None, "bound"),
            lease("3", Some("vlan10"), None, "bound"),
            lease("4", Some("vlan30"), None, "bound"),
            lease("5", Some("lab"), None, "bound"),
        ];
        let forward = derive_vlans(&leases);
        leases.reverse();
        let backward = derive_vlans(&leases);
        leases.rotate_left(2);
        let rotated = derive_vlans(&leases);

        // Byte-wise ordering: upper case sorts before lower case.
        assert_eq!(forward, vec!["Lab", "lab", "vlan10", "vlan30"]);
        assert_eq!(forward, backward);
        assert_eq!(forward, rotated);
    }

    #[test]
    fn empty_collection_has_no_vlans() {
        assert!(derive_vlans(&[]).is_empty());
    }

    // ── filter_leases ───────────────────────────────────────────────

    #[test]
    fn sample_vlan_filter() {
        let leases = sample();
        assert_eq!(ids(&filter_leases(&leases, &only("vlan10"), "")), vec!["1", "3"]);
    }

    #[test]
    fn sample_hostname_filter_ignores_case() {
        let leases = sample();
        assert_eq!(ids(&filter_leases(&leases, &VlanSelection::All, "ALICE")), vec!["1"]);
    }

    #[test]
    fn no_restriction_returns_everything_in_order() {
        let leases = sample();
        assert_eq!(
            ids(&filter_leases(&leases, &VlanSelection::All, "")),
            vec!["1", "2", "3"]
        );
    }

    #[test]
    fn vlan_match_is_exact_and_case_sensitive() {
        let leases = vec![
            lease("1", Some("vlan1"), None, "bound"),
            lease("2", Some("vlan10"), None, "bound"),
            lease("3", Some("VLAN1"), None, "bound"),
        ];
        assert_eq!(ids(&filter_leases(&leases, &only("vlan1"), "")), vec!["1"]);
        assert!(filter_leases(&leases, &only("vlan"), "").is_empty());
    }

    #[test]
    fn hostname_query_excludes_leases_without_hostname() {
        let leases = vec![
            lease("1", Some("v"), None, "bound"),
            lease("2", Some("v"), Some(""), "bound"),
            lease("3", Some("v"), Some("printer"), "bound"),
        ];
        assert_eq!(ids(&filter_leases(&leases, &VlanSelection::All, "r")), vec!["3"]);
        assert_eq!(ids(&filter_leases(&leases, &VlanSelection::All, "Print")), vec!["3"]);
    }

    #[test]
    fn predicates_compose_with_and() {
        let leases = vec![
            lease("1", Some("vlan10"), Some("alice-pc"), "bound"),
            lease("2", Some("vlan20"), Some("alice-phone"), "bound"),
            lease("3", Some("vlan10"), Some("bob-pc"), "bound"),
            lease("4", Some("vlan10"), None, "bound"),
        ];
        let vlan = only("vlan10");

        let combined = ids(&filter_leases(&leases, &vlan, "alice"));
        let by_vlan = ids(&filter_leases(&leases, &vlan, ""));
        let by_host = ids(&filter_leases(&leases, &VlanSelection::All, "alice"));
        let intersection: Vec<String> = by_vlan
            .iter()
            .filter(|id| by_host.contains(id))
            .cloned()
            .collect();

        assert_eq!(combined, vec!["1"]);
        assert_eq!(combined, intersection);
    }

    #[test]
    fn output_is_an_ordered_subsequence() {
        let leases = vec![
            lease("9", Some("b"), Some("x-ray"), "bound"),
            lease("2", Some("a"), Some("box"), "bound"),
            lease("7", Some("b"), Some("xbox"), "offered"),
            lease("1", Some("b"), Some("lamp"), "bound"),
            lease("5", Some("b"), Some("BOX"), "bound"),
        ];
        let kept = filter_leases(&leases, &only("b"), "x");
        assert_eq!(ids(&kept), vec!["9", "7", "5"]);
    }

    #[test]
    fn empty_collection_filters_to_empty() {
        assert!(filter_leases(&[], &VlanSelection::All, "").is_empty());
        assert!(filter_leases(&[], &only("vlan10"), "alice").is_empty());
    }

    #[test]
    fn vlan_literally_named_all_is_selectable() {
        let leases = vec![
            lease("1", Some("all"), None, "bound"),
            lease("2", Some("vlan10"), None, "bound"),
        ];
        assert_eq!(ids(&filter_leases(&leases, &only("all"), "")), vec!["1"]);
        assert_eq!(filter_leases(&leases, &VlanSelection::All, "").len(), 2);
    }

    // ── LeaseFilter / VlanSelection ─────────────────────────────────

    #[test]
    fn lease_filter_matches_free_function() {
        let leases = sample();
        let filter = LeaseFilter::new(only("vlan10"), "alice");
        assert_eq!(ids(&filter.apply(&leases)), vec!["1"]);
        assert!(filter.matches(&leases[0]));
        assert!(!filter.matches(&leases[2]));
        assert!(!filter.is_unrestricted());
        assert!(LeaseFilter::default().is_unrestricted());
    }

    #[test]
    fn selection_from_optional_flag() {
        assert_eq!(VlanSelection::from(None), VlanSelection::All);
        assert_eq!(VlanSelection::from(Some("vlan10".to_string())), only("vlan10"));
        assert_eq!(VlanSelection::All.to_string(), "All VLANs");
        assert_eq!(only("vlan10").to_string(), "vlan10");
    }
}
