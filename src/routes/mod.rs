use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::sync::Mutex;
use visitplan_schedule::{Clock, ScheduleStore};

mod calendar;
mod export;
mod health;
mod visits;

pub use calendar::{FormValues, IndexTemplate, VisitRow};

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub store: Arc<Mutex<ScheduleStore>>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(config: crate::config::Config, clock: impl Clock + 'static) -> Self {
        Self {
            config,
            store: Arc::new(Mutex::new(ScheduleStore::new())),
            clock: Arc::new(clock),
        }
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(calendar::page))
        .route("/visits", post(visits::add))
        .route("/visits/{index}/remove", post(visits::remove))
        .route("/export/csv", post(export::csv_page))
        .route("/export/xlsx", post(export::xlsx_action))
        .route("/schedule.csv", get(export::csv_download))
        .route("/schedule.xlsx", get(export::xlsx_download))
        .with_state(app_state)
}
