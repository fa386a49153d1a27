// tests/tag_selection_test.rs
use release_relay::cli::orchestration::run_next_tag;
use release_relay::domain::{next_tag, TagVersion};
use release_relay::release::MockReleaseSource;
use release_relay::RelayError;

#[test]
fn test_bootstrap_tag_for_repository_without_releases() {
    let tags: Vec<String> = vec![];
    assert_eq!(next_tag(&tags).unwrap(), "v1.0");
}

#[test]
fn test_minor_increment() {
    assert_eq!(next_tag(&["v1.0"]).unwrap(), "v1.1");
}

#[test]
fn test_rollover_at_minor_nine() {
    assert_eq!(next_tag(&["v1.9"]).unwrap(), "v2.0");
}

#[test]
fn test_selects_parsed_maximum_regardless_of_order() {
    assert_eq!(next_tag(&["v1.9", "v2.0", "v1.5"]).unwrap(), "v2.1");
    assert_eq!(next_tag(&["v1.5", "v1.9", "v2.0"]).unwrap(), "v2.1");
    assert_eq!(next_tag(&["v2.0", "v1.5", "v1.9"]).unwrap(), "v2.1");
}

#[test]
fn test_unprefixed_tag_behaves_like_prefixed() {
    assert_eq!(next_tag(&["1.2"]).unwrap(), "v1.3");
    assert_eq!(next_tag(&["1.2"]).unwrap(), next_tag(&["v1.2"]).unwrap());
}

#[test]
fn test_single_component_tag_is_fatal() {
    assert!(TagVersion::parse("v1").is_err());
    let err = next_tag(&["v1.3", "v1"]).unwrap_err();
    assert!(matches!(err, RelayError::Parse(_)));
}

#[test]
fn test_output_always_lowercase_prefix_without_padding() {
    assert_eq!(next_tag(&["V03.04"]).unwrap(), "v3.5");
}

#[test]
fn test_end_to_end_with_mock_source() {
    let source = MockReleaseSource::with_tags(["v0.9", "v0.10", "", "v0.8"]);
    assert_eq!(run_next_tag(&source, "octo/widgets").unwrap(), "v1.0");
    assert_eq!(source.requested(), vec!["octo/widgets"]);
}

#[test]
fn test_query_failure_is_not_recovered() {
    let source = MockReleaseSource::failing("gh: Not Found (HTTP 404)");
    let err = run_next_tag(&source, "octo/missing").unwrap_err();
    assert!(err.to_string().contains("HTTP 404"));
}
