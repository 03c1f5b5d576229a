use recserve::config::{
    AppConfig, RemoteResolverSection, ResolverBackendKind, ResolverSection, TableResolverSection,
};
use recserve::resolver::ResolverConfig;

#[test]
fn default_backend_is_an_empty_table() {
    let config = AppConfig::default();

    let resolver_config = config
        .resolver_runtime()
        .expect("default configuration should be valid");

    match resolver_config {
        ResolverConfig::Table {
            scores_path,
            default_score,
        } => {
            assert!(scores_path.is_none());
            assert_eq!(default_score, 0.0);
        }
        other => panic!("Unexpected resolver config: {other:?}"),
    }
}

#[test]
fn remote_backend_requires_endpoint() {
    let config = AppConfig {
        resolver: ResolverSection {
            backend: ResolverBackendKind::Remote,
            table: None,
            remote: Some(RemoteResolverSection {
                endpoint: "  ".into(),
                ..Default::default()
            }),
        },
        ..Default::default()
    };

    assert!(
        config.resolver_runtime().is_err(),
        "Expected blank remote endpoint to fail validation"
    );
}

#[test]
fn remote_backend_requires_section() {
    let config = AppConfig {
        resolver: ResolverSection {
            backend: ResolverBackendKind::Remote,
            table: None,
            remote: None,
        },
        ..Default::default()
    };

    assert!(config.resolver_runtime().is_err());
}

#[test]
fn remote_backend_rejects_zero_timeout() {
    let config = AppConfig {
        resolver: ResolverSection {
            backend: ResolverBackendKind::Remote,
            table: None,
            remote: Some(RemoteResolverSection {
                endpoint: "http://scores.local".into(),
                timeout_secs: 0,
            }),
        },
        ..Default::default()
    };

    assert!(config.resolver_runtime().is_err());
}

#[test]
fn table_backend_rejects_non_finite_default_score() {
    let config = AppConfig {
        resolver: ResolverSection {
            backend: ResolverBackendKind::Table,
            table: Some(TableResolverSection {
                scores_path: None,
                default_score: f64::NAN,
            }),
            remote: None,
        },
        ..Default::default()
    };

    assert!(config.resolver_runtime().is_err());
}

#[test]
fn table_backend_propagates_scores_path() {
    let config = AppConfig {
        resolver: ResolverSection {
            backend: ResolverBackendKind::Table,
            table: Some(TableResolverSection {
                scores_path: Some("./data/scores.json".into()),
                default_score: 0.25,
            }),
            remote: None,
        },
        ..Default::default()
    };

    let resolver_config = config
        .resolver_runtime()
        .expect("table configuration should be valid");

    match resolver_config {
        ResolverConfig::Table {
            scores_path,
            default_score,
        } => {
            assert_eq!(
                scores_path.as_deref(),
                Some(std::path::Path::new("./data/scores.json"))
            );
            assert_eq!(default_score, 0.25);
        }
        other => panic!("Unexpected resolver config: {other:?}"),
    }
}
