//! Fixture catalog and request helpers.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use createx_api::{router, AppState};
use createx_content::ContentManager;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub const WELCOME: &str = "# Welcome to CreateX\n\n**Track:** Foundations\n\n**Duration:** 30 minutes\n\n**Difficulty:** Beginner\n\n## Learning Objectives\n- Meet the cohort\n- Understand the program arc\n\n## Icebreaker Activity\n\nEveryone shares one thing they made by hand.\n";

pub const MINDSETS: &str = "# Design Mindsets\n\n**Track:** Foundations\n\n**Duration:** 45 minutes\n\n**Prerequisites:** Welcome to CreateX\n\n## Learning Objectives\n- Embrace ambiguity\n\n## Discussion\n\nWhen did a failure teach you something? Some teams ask AI tools for prompts.\n";

pub const RESEARCH_EMPATHY: &str = "# Research & Empathy\n\n**Track:** Design Process\n\n**Duration:** 1 hour\n\n## Learning Objectives\n- Conduct interviews\n- Apply AEIOU\n\n## Next\n\nSynthesis comes after.\n";

/// A three-module content tree and a manager over it.
pub struct ApiFixture {
    pub dir: TempDir,
    pub manager: Arc<ContentManager>,
}

impl ApiFixture {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let modules = dir.path().join("content").join("modules");
        std::fs::create_dir_all(&modules).expect("create modules dir");
        std::fs::write(modules.join("01-welcome.md"), WELCOME).expect("write module");
        std::fs::write(modules.join("02-design-mindsets.md"), MINDSETS).expect("write module");
        std::fs::write(modules.join("07-research-empathy.md"), RESEARCH_EMPATHY)
            .expect("write module");

        let manager = Arc::new(ContentManager::new(
            modules,
            dir.path().join("content").join("translations"),
        ));
        Self { dir, manager }
    }

    pub fn app(&self) -> Router {
        router(AppState::new(Arc::clone(&self.manager)))
    }
}

/// Send a GET and return status and JSON body.
pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, req).await
}

/// Send a JSON POST and return status and JSON body.
pub async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, req).await
}

pub async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
