use axum::{
    extract::{Form, Path, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use visitplan_schedule::{ClientInput, parse_date};

use crate::{
    error::AppError,
    routes::{AppState, FormValues, calendar::index_template},
    template::render,
};

#[derive(Deserialize)]
pub struct AddInput {
    pub name: String,
    pub number: String,
    pub date: String,
}

#[tracing::instrument(skip_all)]
pub async fn add(
    State(app): State<AppState>,
    Form(input): Form<AddInput>,
) -> Result<Response, AppError> {
    let err = match add_client(&app, &input).await {
        Ok(_) => return Ok(Redirect::to("/").into_response()),
        Err(err @ (AppError::Schedule(_) | AppError::ValidationError(_))) => err,
        Err(err) => return Err(err),
    };

    tracing::warn!(name = %input.name, number = %input.number, err = %err, "client rejected");

    let status = err.status_code();
    let form = FormValues {
        name: input.name,
        number: input.number,
        date: input.date,
    };
    let template = index_template(&app, form, Some(err.user_message())).await?;

    Ok(render(status, template))
}

async fn add_client(app: &AppState, input: &AddInput) -> Result<usize, AppError> {
    let tier_count = parse_number(&input.number)?;
    let start_date = parse_date(&input.date)?;
    let client = ClientInput::new(input.name.trim(), tier_count, start_date);

    let schedule = &app.config.schedule;
    let mut store = app.store.lock().await;

    Ok(store.add_client(&client, &schedule.rules, schedule.horizon_count)?)
}

fn parse_number(value: &str) -> Result<i64, AppError> {
    let value = value.trim();

    value.parse::<i64>().map_err(|_| {
        AppError::ValidationError(format!("Number must be a whole number, got `{value}`"))
    })
}

#[tracing::instrument(skip_all)]
pub async fn remove(State(app): State<AppState>, Path(index): Path<usize>) -> Redirect {
    let mut store = app.store.lock().await;

    if let Err(err) = store.remove(index) {
        tracing::warn!(index, err = %err, "ignoring removal of a missing visit");
    }

    Redirect::to("/")
}
