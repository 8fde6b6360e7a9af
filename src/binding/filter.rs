//! Method filter: selects the operations exposed on a client surface

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::ResolverConfig;
use crate::model::Operation;

/// Qualifier appended to an operation's client-name tag before matching
pub const CLIENT_SUFFIX: &str = "Client";

/// Meta-operation never exposed on an unversioned surface
pub const RESERVED_VERSIONS_OPERATION: &str = "GetVersions";

static VERSIONED_ROUTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/v[0-9]+\.[0-9]+").expect("versioned route pattern is valid"));

/// True when the URL template starts with `/v<major>.<minor>`
pub fn is_versioned_route(url: &str) -> bool {
    VERSIONED_ROUTE.is_match(url)
}

/// Stage 1 predicate: not deprecated and tagged for the target client
pub fn matches_client(operation: &Operation, client_name: &str, config: &ResolverConfig) -> bool {
    if operation.deprecated {
        return false;
    }
    if !config.filter_by_client_name {
        return true;
    }
    // An untagged operation belongs to the client named by the bare suffix.
    let tag = operation.client_name().unwrap_or_default();
    format!("{tag}{CLIENT_SUFFIX}") == client_name
}

/// Computes the exposed method set for `client_name`.
///
/// Versioned routes, when any survive the client match, are the whole
/// result. Otherwise every survivor is kept except the reserved
/// `GetVersions` operation.
pub fn filter_methods<'a>(
    operations: &'a [Operation],
    client_name: &str,
    config: &ResolverConfig,
) -> Vec<&'a Operation> {
    let candidates: Vec<&Operation> = operations
        .iter()
        .filter(|op| matches_client(op, client_name, config))
        .collect();

    let versioned: Vec<&Operation> = candidates
        .iter()
        .copied()
        .filter(|op| is_versioned_route(&op.url))
        .collect();

    tracing::debug!(
        client = client_name,
        total = operations.len(),
        matched = candidates.len(),
        versioned = versioned.len(),
        "Filtered client operations"
    );

    if !versioned.is_empty() {
        return versioned;
    }

    candidates
        .into_iter()
        .filter(|op| !op.name.eq_ignore_ascii_case(RESERVED_VERSIONS_OPERATION))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HttpMethod;
    use tracing_test::traced_test;

    fn op(name: &str, url: &str) -> Operation {
        Operation::new(name, HttpMethod::Get, url).for_client("Widgets")
    }

    fn names(ops: &[&Operation]) -> Vec<String> {
        ops.iter().map(|o| o.name.clone()).collect()
    }

    #[test]
    fn test_versioned_route_pattern() {
        assert!(is_versioned_route("/v1.0/widgets"));
        assert!(is_versioned_route("/v12.34"));
        assert!(!is_versioned_route("/v1/widgets"));
        assert!(!is_versioned_route("/v1x0/widgets"));
        assert!(!is_versioned_route("/api/v1.0/widgets"));
        assert!(!is_versioned_route("/widgets"));
    }

    #[test]
    fn test_versioned_routes_shadow_unscoped_routes() {
        let ops = vec![op("ListV1", "/v1.0/widgets"), op("List", "/widgets")];
        let config = ResolverConfig::default();

        assert_eq!(
            names(&filter_methods(&ops, "WidgetsClient", &config)),
            vec!["ListV1"]
        );
    }

    #[test]
    fn test_get_versions_is_excluded() {
        let ops = vec![op("GetVersions", "/versions")];
        let config = ResolverConfig::default();
        assert!(filter_methods(&ops, "WidgetsClient", &config).is_empty());

        let ops = vec![op("getversions", "/versions"), op("List", "/widgets")];
        assert_eq!(
            names(&filter_methods(&ops, "WidgetsClient", &config)),
            vec!["List"]
        );
    }

    #[test]
    fn test_get_versions_survives_among_versioned_routes() {
        let ops = vec![op("GetVersions", "/v1.0/versions"), op("List", "/widgets")];
        let config = ResolverConfig::default();
        assert_eq!(
            names(&filter_methods(&ops, "WidgetsClient", &config)),
            vec!["GetVersions"]
        );
    }

    #[test]
    fn test_client_match_and_deprecation() {
        let ops = vec![
            op("List", "/widgets"),
            op("Old", "/widgets/old").deprecated(),
            Operation::new("Other", HttpMethod::Get, "/gadgets").for_client("Gadgets"),
            Operation::new("Untagged", HttpMethod::Get, "/untagged"),
        ];

        let config = ResolverConfig::default();
        assert_eq!(
            names(&filter_methods(&ops, "WidgetsClient", &config)),
            vec!["List"]
        );
        assert!(filter_methods(&ops, "Widgets", &config).is_empty());

        let unfiltered = ResolverConfig {
            filter_by_client_name: false,
            ..Default::default()
        };
        assert_eq!(
            names(&filter_methods(&ops, "ignored", &unfiltered)),
            vec!["List", "Other", "Untagged"]
        );
    }

    #[test]
    fn test_untagged_operation_matches_bare_client() {
        let untagged = Operation::new("Ping", HttpMethod::Get, "/ping");
        let config = ResolverConfig::default();

        assert!(matches_client(&untagged, "Client", &config));
        assert!(!matches_client(&untagged, "WidgetsClient", &config));
        assert!(!matches_client(&untagged.deprecated(), "Client", &config));
    }

    #[test]
    fn test_client_name_from_extension() {
        let tagged = Operation::new("List", HttpMethod::Get, "/widgets").with_extension(
            crate::model::CLIENT_NAME_EXTENSION,
            serde_json::json!("Widgets"),
        );
        assert!(matches_client(
            &tagged,
            "WidgetsClient",
            &ResolverConfig::default()
        ));
    }

    #[traced_test]
    #[test]
    fn test_filter_logs_stage_counts() {
        let ops = vec![op("List", "/widgets")];
        filter_methods(&ops, "WidgetsClient", &ResolverConfig::default());
        assert!(logs_contain("Filtered client operations"));
    }
}
