use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use visitplan_export::{CSV_FILE_NAME, XLSX_FILE_NAME};

use crate::{error::AppError, routes::AppState, template::render};

const XLSX_CONTENT_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

#[derive(askama::Template)]
#[template(path = "export.html")]
pub struct ExportTemplate {
    pub message: String,
    pub data_uri: Option<String>,
    pub file_name: &'static str,
}

#[tracing::instrument(skip_all)]
pub async fn csv_page(State(app): State<AppState>) -> Result<Response, AppError> {
    let data_uri = {
        let store = app.store.lock().await;
        visitplan_export::csv_data_uri(store.visits())?
    };

    Ok(render(
        StatusCode::OK,
        ExportTemplate {
            message: format!("Schedule exported to {CSV_FILE_NAME}"),
            data_uri: Some(data_uri),
            file_name: CSV_FILE_NAME,
        },
    ))
}

#[tracing::instrument(skip_all)]
pub async fn xlsx_action(State(app): State<AppState>) -> Result<Response, AppError> {
    let visits = app.store.lock().await.visits().to_vec();
    let path = app.config.export.xlsx_path.clone();
    let file_name = path.display().to_string();

    tokio::task::spawn_blocking(move || visitplan_export::write_xlsx(path, &visits))
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))??;

    Ok(render(
        StatusCode::OK,
        ExportTemplate {
            message: format!("Schedule exported to {file_name}"),
            data_uri: None,
            file_name: XLSX_FILE_NAME,
        },
    ))
}

fn attachment(content_type: &'static str, file_name: &str, body: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_owned()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        body,
    )
        .into_response()
}

pub async fn csv_download(State(app): State<AppState>) -> Result<Response, AppError> {
    let store = app.store.lock().await;
    let body = visitplan_export::to_csv(store.visits())?;

    Ok(attachment("text/csv; charset=utf-8", CSV_FILE_NAME, body))
}

pub async fn xlsx_download(State(app): State<AppState>) -> Result<Response, AppError> {
    let store = app.store.lock().await;
    let body = visitplan_export::to_xlsx(store.visits())?;

    Ok(attachment(XLSX_CONTENT_TYPE, XLSX_FILE_NAME, body))
}
