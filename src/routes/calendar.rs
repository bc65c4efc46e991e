use axum::{extract::State, http::StatusCode, response::Response};
use visitplan_schedule::{MonthGrid, VisitRecord, WEEKDAY_LABELS, build_grid, display_window};

use crate::{error::AppError, routes::AppState, template::render};

/// One entry of the numbered visit list in the sidebar.
pub struct VisitRow {
    pub index: usize,
    pub name: String,
    pub number: i64,
    pub date: String,
    pub visit_date: String,
    pub visit_type: String,
}

impl VisitRow {
    fn new((index, visit): (usize, &VisitRecord)) -> Self {
        Self {
            index,
            name: visit.client_name.to_owned(),
            number: visit.tier_count,
            date: visit.origin_date.to_string(),
            visit_date: visit.visit_date.to_string(),
            visit_type: visit.visit_type.to_string(),
        }
    }
}

/// Values echoed back into the add-client form.
#[derive(Default)]
pub struct FormValues {
    pub name: String,
    pub number: String,
    pub date: String,
}

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub form: FormValues,
    pub error_message: Option<String>,
    pub visits: Vec<VisitRow>,
    pub months: Vec<MonthGrid>,
    pub weekdays: [&'static str; 7],
}

pub(crate) async fn index_template(
    app: &AppState,
    form: FormValues,
    error_message: Option<String>,
) -> Result<IndexTemplate, AppError> {
    let store = app.store.lock().await;

    let visits = store.iter().enumerate().map(VisitRow::new).collect();
    let months = display_window(app.clock.today(), app.config.schedule.months_to_display)
        .into_iter()
        .map(|(year, month)| build_grid(year, month, store.visits()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(IndexTemplate {
        form,
        error_message,
        visits,
        months,
        weekdays: WEEKDAY_LABELS,
    })
}

#[tracing::instrument(skip_all)]
pub async fn page(State(app): State<AppState>) -> Result<Response, AppError> {
    let form = FormValues {
        date: app.clock.today().to_string(),
        ..Default::default()
    };
    let template = index_template(&app, form, None).await?;

    Ok(render(StatusCode::OK, template))
}
