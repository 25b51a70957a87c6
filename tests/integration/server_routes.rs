//! Integration tests for the HTTP surface against a server on a random port

use super::test_utils::{build_index, media_fixture};
use mediatree::config::MediaTreeConfig;
use mediatree::server::Server;
use reqwest::redirect::Policy;
use reqwest::StatusCode;
use std::sync::Arc;
use tempfile::TempDir;

async fn start_server() -> (TempDir, Server, reqwest::Client) {
    let temp_dir = media_fixture();
    let index = Arc::new(build_index(temp_dir.path()));

    let mut config = MediaTreeConfig::default();
    config.media_root = temp_dir.path().to_path_buf();
    config.server.bind = "127.0.0.1:0".to_string();

    let server = Server::start(&config, index).await.expect("start");
    let client = reqwest::Client::builder()
        .redirect(Policy::none())
        .build()
        .unwrap();
    (temp_dir, server, client)
}

fn url(server: &Server, path: &str) -> String {
    format!("http://{}{}", server.addr(), path)
}

#[tokio::test]
async fn root_redirects_to_listing() {
    let (_dir, server, client) = start_server().await;

    let response = client.get(url(&server, "/")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(response.headers()["location"], "/home/");
}

#[tokio::test]
async fn listing_pages_render_entries() {
    let (_dir, server, client) = start_server().await;

    let response = client.get(url(&server, "/home/")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains("<a href=\"/home/films\">films/</a>"));
    assert!(body.contains("<a href=\"/media/readme.txt\">readme.txt</a>"));

    let body = client
        .get(url(&server, "/home/films/Extras/"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("/media/films/Extras/poster.png"));
    assert!(body.contains("image/png"));
}

#[tokio::test]
async fn encoded_paths_resolve() {
    let (_dir, server, client) = start_server().await;

    let response = client
        .get(url(&server, "/home/music/album/01%20-%20track.mp3"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains("Nothing here."));
}

#[tokio::test]
async fn unknown_listing_is_404() {
    let (_dir, server, client) = start_server().await;

    let response = client
        .get(url(&server, "/home/nowhere/at/all"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.text().await.unwrap().contains("Not found"));
}

#[tokio::test]
async fn api_listing_returns_json() {
    let (_dir, server, client) = start_server().await;

    let response = client
        .get(url(&server, "/api/list/music/album"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = response.json().await.unwrap();
    assert_eq!(json["path"], "music/album");
    assert_eq!(json["node"]["is_dir"], true);
    assert_eq!(json["entries"][0]["name"], "01 - track.mp3");
    assert_eq!(json["entries"][0]["content_type"], "audio/mpeg");

    let root: serde_json::Value = client
        .get(url(&server, "/api/list/"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(root["entries"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn api_not_found_is_json_404() {
    let (_dir, server, client) = start_server().await;

    let response = client
        .get(url(&server, "/api/list/missing"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json: serde_json::Value = response.json().await.unwrap();
    assert_eq!(json["ok"], false);
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn media_serves_file_bytes() {
    let (_dir, server, client) = start_server().await;

    let response = client
        .get(url(&server, "/media/readme.txt"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "hello");

    let health = client.get(url(&server, "/health")).send().await.unwrap();
    assert_eq!(health.text().await.unwrap(), "ok");
}
