//! Shared setup for router tests

#![allow(dead_code)]

use std::path::PathBuf;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, header},
    response::Response,
};
use http_body_util::BodyExt;
use time::macros::date;
use tower::ServiceExt;
use visitplan::{
    AppState, Config,
    config::{ExportConfig, ObservabilityConfig, ScheduleConfig, ServerConfig},
};
use visitplan_schedule::FixedClock;

pub fn test_config(xlsx_path: PathBuf) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        schedule: ScheduleConfig::default(),
        export: ExportConfig { xlsx_path },
        observability: ObservabilityConfig::default(),
    }
}

/// State pinned to 2024-01-15 so the calendar window is stable.
pub fn test_state(xlsx_path: PathBuf) -> AppState {
    AppState::new(test_config(xlsx_path), FixedClock(date!(2024-01-15)))
}

pub async fn get(app: &Router, uri: &str) -> anyhow::Result<Response> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())?;

    Ok(app.clone().oneshot(request).await?)
}

pub async fn post_form(app: &Router, uri: &str, form: &[(&str, &str)]) -> anyhow::Result<Response> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(serde_urlencoded::to_string(form)?))?;

    Ok(app.clone().oneshot(request).await?)
}

pub async fn body_string(response: Response) -> anyhow::Result<String> {
    let bytes = response.into_body().collect().await?.to_bytes();

    Ok(String::from_utf8(bytes.to_vec())?)
}
