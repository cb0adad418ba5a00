mod common;

use catalog_gallery::error::GalleryError;
use catalog_gallery::source::{load_fallback, load_records, GraphSettings, GraphSource, Origin};
use common::{catalog, fallback_file, graph_page};
use mockito::{Matcher, Server};
use reqwest::Client;
use serde_json::json;

const ITEMS_PATH: &str = "/sites/site/lists/list/items";

fn settings(graph_url: &str) -> GraphSettings {
    GraphSettings {
        graph_url: graph_url.to_string(),
        site_id: Some("site".to_string()),
        list_id: Some("list".to_string()),
        access_token: Some("token".to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn remote_records_follow_next_link() {
    let mut server = Server::new_async().await;
    let records = catalog();
    let first = json!([records[0], records[1]]);
    let second = json!([records[2]]);
    let next_link = format!("{}/next?$skiptoken=2", server.url());

    let page_one = server
        .mock("GET", ITEMS_PATH)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("$select".into(), "fields".into()),
            Matcher::UrlEncoded("$expand".into(), "fields".into()),
        ]))
        .match_header("authorization", "Bearer token")
        .with_header("content-type", "application/json")
        .with_body(graph_page(&first, Some(&next_link)))
        .create_async()
        .await;
    let page_two = server
        .mock("GET", "/next")
        .match_query(Matcher::Any)
        .with_header("content-type", "application/json")
        .with_body(graph_page(&second, None))
        .create_async()
        .await;

    let source = GraphSource::new(Client::new(), settings(&server.url()));
    let fetched = source.fetch_records().await.unwrap();

    let topics: Vec<_> = fetched.iter().map(|r| r.onderwerp.as_str()).collect();
    assert_eq!(topics, vec!["Intro", "Grammar", "Energie"]);
    page_one.assert_async().await;
    page_two.assert_async().await;
}

#[tokio::test]
async fn client_secret_flow_feeds_bearer() {
    let mut server = Server::new_async().await;
    let token = server
        .mock("POST", "/tenant/oauth2/v2.0/token")
        .with_header("content-type", "application/json")
        .with_body(r#"{"access_token": "issued"}"#)
        .create_async()
        .await;
    let items = server
        .mock("GET", ITEMS_PATH)
        .match_query(Matcher::Any)
        .match_header("authorization", "Bearer issued")
        .with_body(graph_page(&catalog(), None))
        .create_async()
        .await;

    let source = GraphSource::new(
        Client::new(),
        GraphSettings {
            authority_url: server.url(),
            access_token: None,
            tenant_id: Some("tenant".to_string()),
            client_id: Some("client".to_string()),
            client_secret: Some("secret".to_string()),
            ..settings(&server.url())
        },
    );
    assert_eq!(source.fetch_records().await.unwrap().len(), 3);
    token.assert_async().await;
    items.assert_async().await;
}

#[tokio::test]
async fn server_error_falls_back() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", ITEMS_PATH)
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;
    let file = fallback_file(&catalog());

    let source = GraphSource::new(Client::new(), settings(&server.url()));
    let loaded = load_records(&Client::new(), Some(&source), file.path().to_str().unwrap())
        .await
        .unwrap();

    assert_eq!(loaded.origin, Origin::Fallback);
    assert_eq!(loaded.records.len(), 3);
}

#[tokio::test]
async fn empty_list_falls_back() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", ITEMS_PATH)
        .match_query(Matcher::Any)
        .with_body(r#"{"value": []}"#)
        .create_async()
        .await;
    let file = fallback_file(&catalog());

    let source = GraphSource::new(Client::new(), settings(&server.url()));
    assert!(matches!(
        source.fetch_records().await,
        Err(GalleryError::EmptyResponse)
    ));

    let loaded = load_records(&Client::new(), Some(&source), file.path().to_str().unwrap())
        .await
        .unwrap();
    assert_eq!(loaded.origin, Origin::Fallback);
}

#[tokio::test]
async fn missing_credentials_fall_back_without_requests() {
    let mut server = Server::new_async().await;
    let untouched = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let file = fallback_file(&catalog());

    let source = GraphSource::new(
        Client::new(),
        GraphSettings {
            access_token: None,
            ..settings(&server.url())
        },
    );
    assert!(matches!(
        source.fetch_records().await,
        Err(GalleryError::MissingConfig("TENANT_ID"))
    ));

    let loaded = load_records(&Client::new(), Some(&source), file.path().to_str().unwrap())
        .await
        .unwrap();
    assert_eq!(loaded.origin, Origin::Fallback);
    untouched.assert_async().await;
}

#[tokio::test]
async fn remote_success_skips_fallback() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", ITEMS_PATH)
        .match_query(Matcher::Any)
        .with_body(graph_page(&catalog(), None))
        .create_async()
        .await;

    let source = GraphSource::new(Client::new(), settings(&server.url()));
    let loaded = load_records(&Client::new(), Some(&source), "does/not/exist.json")
        .await
        .unwrap();
    assert_eq!(loaded.origin, Origin::Remote);
    let first = &loaded.records[0];
    assert_eq!(first.onderwerp, "Intro");
    assert_eq!(first.price(), "Gratis");
    assert_eq!(first.language(), "NL");
    assert_eq!(first.platform(), "Oculus");
}

#[tokio::test]
async fn both_tiers_failing_is_an_error() {
    let result = load_records(&Client::new(), None, "does/not/exist.json").await;
    assert!(matches!(result, Err(GalleryError::Io(_))));
}

#[tokio::test]
async fn fallback_over_http() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/csvjson.json")
        .with_body(catalog().to_string())
        .create_async()
        .await;

    let url = format!("{}/csvjson.json", server.url());
    let records = load_fallback(&Client::new(), &url).await.unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[1].language(), "English");
    assert_eq!(records[2].price(), "Niet beschikbaar");
}

#[tokio::test]
async fn malformed_fallback_is_a_json_error() {
    let file = fallback_file(&json!({"not": "an array"}));
    let result = load_fallback(&Client::new(), file.path().to_str().unwrap()).await;
    assert!(matches!(result, Err(GalleryError::Json(_))));
}

#[tokio::test]
async fn site_lists() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/sites/site/lists")
        .with_body(
            json!({"value": [{"id": "l1", "name": "Leermiddelen", "displayName": "Leermiddelen",
                "webUrl": "https://contoso.sharepoint.com/Lists/Leermiddelen"}]})
                .to_string(),
        )
        .create_async()
        .await;

    let source = GraphSource::new(Client::new(), settings(&server.url()));
    let lists = source.fetch_lists().await.unwrap();
    assert_eq!(lists.len(), 1);
    assert_eq!(lists[0].id, "l1");
    assert_eq!(lists[0].display_name.as_deref(), Some("Leermiddelen"));
    assert_eq!(
        lists[0].web_url.as_deref(),
        Some("https://contoso.sharepoint.com/Lists/Leermiddelen")
    );
}
