//! Contract every tracking source must honor before the resolver
//! normalizes its output.

use std::sync::Arc;

use shiptrack_core::{
    Backend, IdentifierRule, IdentifierValidator, RemoteSource, SimulatedSource,
    TrackingErrorKind, TrackingQuery, TrackingSource, ValidatedQuery,
};
use shiptrack_tests::support::{lookup_body, package_json, ScriptedHttpClient, BASE_URL};

const KNOWN_ID: &str = "PKG123456789";

struct SourceCase {
    name: &'static str,
    backend: Backend,
    source: Arc<dyn TrackingSource>,
    /// Same kind of source, primed so that the lookup finds nothing.
    empty_source: Arc<dyn TrackingSource>,
    empty_query: ValidatedQuery,
}

fn validated(tracking_id: &str, rule: IdentifierRule) -> ValidatedQuery {
    IdentifierValidator::new(rule)
        .validate(&TrackingQuery::new(tracking_id))
        .expect("valid query")
}

fn remote(client: Arc<ScriptedHttpClient>) -> Arc<dyn TrackingSource> {
    Arc::new(RemoteSource::with_http_client(client, BASE_URL, None))
}

fn source_cases() -> Vec<SourceCase> {
    let foreign_rule = IdentifierRule::default()
        .with_prefix("SHP")
        .expect("valid prefix");

    vec![
        SourceCase {
            name: "simulated",
            backend: Backend::Simulated,
            source: Arc::new(SimulatedSource::new()),
            empty_source: Arc::new(SimulatedSource::new()),
            empty_query: validated("SHP123456789", foreign_rule),
        },
        SourceCase {
            name: "remote",
            backend: Backend::Remote,
            source: remote(ScriptedHttpClient::status(
                200,
                &lookup_body(vec![package_json(KNOWN_ID)]),
            )),
            empty_source: remote(ScriptedHttpClient::status(404, "")),
            empty_query: validated(KNOWN_ID, IdentifierRule::default()),
        },
    ]
}

#[tokio::test]
async fn every_source_reports_its_backend() {
    for case in source_cases() {
        assert_eq!(case.source.backend(), case.backend, "source '{}'", case.name);
    }
}

#[tokio::test]
async fn every_source_returns_packages_for_the_requested_id_only() {
    let query = validated(KNOWN_ID, IdentifierRule::default());

    for case in source_cases() {
        let packages = case
            .source
            .fetch(&query)
            .await
            .unwrap_or_else(|error| panic!("source '{}' fetch failed: {error}", case.name));

        assert!(!packages.is_empty(), "source '{}': no packages", case.name);
        for package in &packages {
            assert_eq!(
                package.tracking_id, KNOWN_ID,
                "source '{}': tracking id",
                case.name
            );
            assert_eq!(
                package.item_count,
                package.items.len(),
                "source '{}': itemCount",
                case.name
            );
            package
                .validate()
                .unwrap_or_else(|error| panic!("source '{}': invalid package: {error}", case.name));
        }
    }
}

#[tokio::test]
async fn every_source_signals_absence_with_not_found() {
    for case in source_cases() {
        let error = case
            .empty_source
            .fetch(&case.empty_query)
            .await
            .expect_err("nothing to find");
        assert_eq!(
            error.kind(),
            TrackingErrorKind::NotFound,
            "source '{}'",
            case.name
        );
        assert!(!error.retryable(), "source '{}'", case.name);
    }
}
