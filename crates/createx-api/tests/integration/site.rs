//! The API mounted next to a static site.

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use createx_api::{site_router, AppState};
use tower::ServiceExt;

use crate::common::{get, ApiFixture};

#[tokio::test]
async fn test_api_is_mounted_under_prefix() {
    let fixture = ApiFixture::new();
    let site = fixture.dir.path().join("dist");
    std::fs::create_dir_all(&site).unwrap();

    let app = site_router(AppState::new(Arc::clone(&fixture.manager)), &site);
    let (status, body) = get(app, "/api/content/tracks").await;

    assert_eq!(status, 200);
    assert_eq!(body["tracks"][0], "Foundations");
}

#[tokio::test]
async fn test_static_files_are_served() {
    let fixture = ApiFixture::new();
    let site = fixture.dir.path().join("dist");
    std::fs::create_dir_all(site.join("modules")).unwrap();
    std::fs::write(site.join("index.html"), "<h1>CreateX</h1>").unwrap();
    std::fs::write(site.join("modules").join("welcome.html"), "<h1>Welcome</h1>").unwrap();

    let app = site_router(AppState::new(Arc::clone(&fixture.manager)), &site);

    let req = Request::builder().uri("/").body(Body::empty()).unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), 200);
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"<h1>CreateX</h1>");

    let req = Request::builder()
        .uri("/modules/welcome.html")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), 200);

    let req = Request::builder()
        .uri("/modules/missing.html")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), 404);
}
