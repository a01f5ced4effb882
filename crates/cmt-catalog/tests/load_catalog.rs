//! End-to-end catalog loading against real files and a mock HTTP server.

use cmt_catalog::{load_catalog, DatasetSpec};
use cmt_core::Level;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const L1_CSV: &str = "\
Practice ID,Domain,Practice Name,Description,Source
AC.L1-3.1.1,Access Control,Authorized Access Control,Limit system access.,FAR 52.204-21
AC.L1-3.1.2,Access Control,Transaction Control,Limit transaction access.,FAR 52.204-21
";

const L2_CSV: &str = "\
Practice ID,Domain,Practice Name,Description,Source
AC.L2-3.1.3,Access Control,Control CUI Flow,Control the flow of CUI.,NIST SP 800-171
";

#[tokio::test]
async fn loads_file_and_http_sources_in_list_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/l2.csv"))
        .respond_with(ResponseTemplate::new(200).set_body_string(L2_CSV))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let l1_path = dir.path().join("l1.csv");
    std::fs::write(&l1_path, L1_CSV).unwrap();

    let specs = vec![
        DatasetSpec::new(l1_path.to_str().unwrap(), Level::L1).unwrap(),
        DatasetSpec::new(&format!("{}/l2.csv", server.uri()), Level::L2).unwrap(),
    ];

    let catalog = load_catalog(&specs).await;
    assert_eq!(catalog.len(), 3);
    // Source-list order, not completion order.
    assert_eq!(catalog.practices()[0].id, "AC.L1-3.1.1");
    assert_eq!(catalog.practices()[2].id, "AC.L2-3.1.3");
    assert_eq!(catalog.practices()[2].level, Level::L2);
}

#[tokio::test]
async fn failed_source_is_skipped_not_fatal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/l1.csv"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/l2.csv"))
        .respond_with(ResponseTemplate::new(200).set_body_string(L2_CSV))
        .mount(&server)
        .await;

    let specs = vec![
        DatasetSpec::new(&format!("{}/l1.csv", server.uri()), Level::L1).unwrap(),
        DatasetSpec::new(&format!("{}/l2.csv", server.uri()), Level::L2).unwrap(),
    ];

    let catalog = load_catalog(&specs).await;
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.practices()[0].id, "AC.L2-3.1.3");
    assert_eq!(catalog.practices()[0].level, Level::L2);
}

#[tokio::test]
async fn missing_file_source_is_skipped() {
    let specs = vec![
        DatasetSpec::new("no/such/file.csv", Level::L1).unwrap(),
    ];
    let catalog = load_catalog(&specs).await;
    assert!(catalog.is_empty());
}

#[tokio::test]
async fn no_sources_yields_empty_catalog() {
    let catalog = load_catalog(&[]).await;
    assert!(catalog.is_empty());
    assert_eq!(catalog.summary().total, 0);
}
