// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, patch, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::OffsetDateTime;
use tokio::sync::Mutex;
use tracing::{error, info};

use timecard_api::{
    ActorDocument, ApiError, ApprovalDocument, DeletionRequest, OpenTimecardRequest, PersonInfo,
    RegisterPersonRequest, ServiceDescription, TimecardInfo, add_timecard_line, approve_timecard,
    cancel_timecard, correct_timecard, current_transition_of, delete_timecard, get_timecard,
    get_timecard_line, list_people, list_timecard_lines, list_timecard_transitions,
    list_timecards, open_timecard, patch_timecard_line, register_person, reject_timecard,
    replace_timecard_line, submit_timecard,
};
use timecard_audit::{Transition, TransitionKind};
use timecard_domain::{LineDocument, LineId, LinePatch, TimecardId, TimecardLine};
use timecard_persistence::SqliteStore;

/// Timecard Server - HTTP server for the timecard approval service
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// The store is behind a mutex; each handler acquires it for the
/// duration of one logical operation.
#[derive(Clone)]
struct AppState {
    /// The store holding timecards and the person directory.
    store: Arc<Mutex<SqliteStore>>,
}

/// Error body returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorBody {
    /// The legacy numeric error code, for workflow violations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error_code: Option<u16>,
    /// The error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The legacy numeric error code, if any.
    error_code: Option<u16>,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorBody> = Json(ErrorBody {
            error_code: self.error_code,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::NoAccess { .. } | ApiError::MissingPerson { .. } => StatusCode::FORBIDDEN,
            ApiError::InvalidState { .. }
            | ApiError::EmptyTimecard { .. }
            | ApiError::MissingTransition { .. } => StatusCode::CONFLICT,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            error_code: err.error_code(),
            message: err.to_string(),
        }
    }
}

/// Handler for GET `/`.
async fn handle_describe_service() -> Json<ServiceDescription> {
    Json(ServiceDescription::current())
}

/// Handler for GET `/timesheets`.
async fn handle_list_timecards(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<TimecardInfo>>, HttpError> {
    let store = app_state.store.lock().await;
    let cards: Vec<TimecardInfo> = list_timecards(&store)?;
    Ok(Json(cards))
}

/// Handler for POST `/timesheets`.
async fn handle_open_timecard(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<OpenTimecardRequest>,
) -> Result<(StatusCode, Json<TimecardInfo>), HttpError> {
    info!(person = %req.person, "Handling open timecard request");

    let store = app_state.store.lock().await;
    let card: TimecardInfo = open_timecard(&store, &req, OffsetDateTime::now_utc())?;
    Ok((StatusCode::CREATED, Json(card)))
}

/// Handler for GET `/timesheets/{id}`.
async fn handle_get_timecard(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<TimecardId>,
) -> Result<Json<TimecardInfo>, HttpError> {
    let store = app_state.store.lock().await;
    let card: TimecardInfo = get_timecard(&store, id)?;
    Ok(Json(card))
}

/// Handler for DELETE `/timesheets/{id}`.
async fn handle_delete_timecard(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<TimecardId>,
    Json(req): Json<DeletionRequest>,
) -> Result<StatusCode, HttpError> {
    info!(id = %id, deleter = %req.deleter, "Handling delete timecard request");

    let store = app_state.store.lock().await;
    delete_timecard(&store, id, &req)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET `/timesheets/{id}/lines`.
async fn handle_list_lines(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<TimecardId>,
) -> Result<Json<Vec<TimecardLine>>, HttpError> {
    let store = app_state.store.lock().await;
    let lines: Vec<TimecardLine> = list_timecard_lines(&store, id)?;
    Ok(Json(lines))
}

/// Handler for POST `/timesheets/{id}/lines`.
async fn handle_add_line(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<TimecardId>,
    Json(document): Json<LineDocument>,
) -> Result<(StatusCode, Json<TimecardLine>), HttpError> {
    let store = app_state.store.lock().await;
    let line: TimecardLine = add_timecard_line(&store, id, document, OffsetDateTime::now_utc())?;
    Ok((StatusCode::CREATED, Json(line)))
}

/// Handler for GET `/timesheets/{id}/lines/{line_id}`.
async fn handle_get_line(
    AxumState(app_state): AxumState<AppState>,
    Path((id, line_id)): Path<(TimecardId, LineId)>,
) -> Result<Json<TimecardLine>, HttpError> {
    let store = app_state.store.lock().await;
    let line: TimecardLine = get_timecard_line(&store, id, line_id)?;
    Ok(Json(line))
}

/// Handler for POST `/timesheets/{id}/lines/{line_id}`.
async fn handle_replace_line(
    AxumState(app_state): AxumState<AppState>,
    Path((id, line_id)): Path<(TimecardId, LineId)>,
    Json(document): Json<LineDocument>,
) -> Result<Json<TimecardLine>, HttpError> {
    let store = app_state.store.lock().await;
    let line: TimecardLine =
        replace_timecard_line(&store, id, line_id, document, OffsetDateTime::now_utc())?;
    Ok(Json(line))
}

/// Handler for PATCH `/timesheets/{id}/lines/{line_id}`.
async fn handle_patch_line(
    AxumState(app_state): AxumState<AppState>,
    Path((id, line_id)): Path<(TimecardId, LineId)>,
    Json(patch): Json<LinePatch>,
) -> Result<Json<TimecardLine>, HttpError> {
    let store = app_state.store.lock().await;
    let line: TimecardLine =
        patch_timecard_line(&store, id, line_id, &patch, OffsetDateTime::now_utc())?;
    Ok(Json(line))
}

/// Handler for GET `/timesheets/{id}/transitions`.
async fn handle_list_transitions(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<TimecardId>,
) -> Result<Json<Vec<Transition>>, HttpError> {
    let store = app_state.store.lock().await;
    let transitions: Vec<Transition> = list_timecard_transitions(&store, id)?;
    Ok(Json(transitions))
}

/// Handler for POST `/timesheets/{id}/submittal`.
async fn handle_submit(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<TimecardId>,
    Json(document): Json<ActorDocument>,
) -> Result<Json<Transition>, HttpError> {
    let store = app_state.store.lock().await;
    let transition: Transition =
        submit_timecard(&store, id, &document, OffsetDateTime::now_utc())?;
    Ok(Json(transition))
}

/// Handler for POST `/timesheets/{id}/correction`.
async fn handle_correct(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<TimecardId>,
    Json(document): Json<ActorDocument>,
) -> Result<Json<Transition>, HttpError> {
    let store = app_state.store.lock().await;
    let transition: Transition =
        correct_timecard(&store, id, &document, OffsetDateTime::now_utc())?;
    Ok(Json(transition))
}

/// Handler for POST `/timesheets/{id}/rejection`.
async fn handle_reject(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<TimecardId>,
    Json(document): Json<ActorDocument>,
) -> Result<Json<Transition>, HttpError> {
    let store = app_state.store.lock().await;
    let transition: Transition =
        reject_timecard(&store, id, &document, OffsetDateTime::now_utc())?;
    Ok(Json(transition))
}

/// Handler for POST `/timesheets/{id}/cancellation`.
async fn handle_cancel(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<TimecardId>,
    Json(document): Json<ActorDocument>,
) -> Result<Json<Transition>, HttpError> {
    let store = app_state.store.lock().await;
    let transition: Transition =
        cancel_timecard(&store, id, &document, OffsetDateTime::now_utc())?;
    Ok(Json(transition))
}

/// Handler for POST `/timesheets/{id}/approval`.
async fn handle_approve(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<TimecardId>,
    Json(document): Json<ApprovalDocument>,
) -> Result<Json<Transition>, HttpError> {
    let store = app_state.store.lock().await;
    let transition: Transition =
        approve_timecard(&store, id, &document, OffsetDateTime::now_utc())?;
    Ok(Json(transition))
}

/// Shared handler for the current-transition queries.
async fn current_transition_response(
    app_state: &AppState,
    id: TimecardId,
    kind: TransitionKind,
) -> Result<Json<Transition>, HttpError> {
    let store = app_state.store.lock().await;
    let transition: Transition = current_transition_of(&store, id, kind)?;
    Ok(Json(transition))
}

/// Handler for GET `/timesheets/{id}/submittal`.
async fn handle_current_submittal(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<TimecardId>,
) -> Result<Json<Transition>, HttpError> {
    current_transition_response(&app_state, id, TransitionKind::Submittal).await
}

/// Handler for GET `/timesheets/{id}/correction`.
async fn handle_current_correction(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<TimecardId>,
) -> Result<Json<Transition>, HttpError> {
    current_transition_response(&app_state, id, TransitionKind::Correction).await
}

/// Handler for GET `/timesheets/{id}/rejection`.
async fn handle_current_rejection(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<TimecardId>,
) -> Result<Json<Transition>, HttpError> {
    current_transition_response(&app_state, id, TransitionKind::Rejection).await
}

/// Handler for GET `/timesheets/{id}/cancellation`.
async fn handle_current_cancellation(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<TimecardId>,
) -> Result<Json<Transition>, HttpError> {
    current_transition_response(&app_state, id, TransitionKind::Cancellation).await
}

/// Handler for GET `/timesheets/{id}/approval`.
async fn handle_current_approval(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<TimecardId>,
) -> Result<Json<Transition>, HttpError> {
    current_transition_response(&app_state, id, TransitionKind::Approval).await
}

/// Handler for GET `/people`.
async fn handle_list_people(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<PersonInfo>>, HttpError> {
    let store = app_state.store.lock().await;
    let people: Vec<PersonInfo> = list_people(&store)?;
    Ok(Json(people))
}

/// Handler for POST `/people`.
async fn handle_register_person(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<RegisterPersonRequest>,
) -> Result<(StatusCode, Json<PersonInfo>), HttpError> {
    info!(person = %req.person, "Handling register person request");

    let store = app_state.store.lock().await;
    let person: PersonInfo = register_person(&store, &req)?;
    Ok((StatusCode::CREATED, Json(person)))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_describe_service))
        .route("/timesheets", get(handle_list_timecards))
        .route("/timesheets", post(handle_open_timecard))
        .route("/timesheets/{id}", get(handle_get_timecard))
        .route("/timesheets/{id}", delete(handle_delete_timecard))
        .route("/timesheets/{id}/lines", get(handle_list_lines))
        .route("/timesheets/{id}/lines", post(handle_add_line))
        .route("/timesheets/{id}/lines/{line_id}", get(handle_get_line))
        .route("/timesheets/{id}/lines/{line_id}", post(handle_replace_line))
        .route("/timesheets/{id}/lines/{line_id}", patch(handle_patch_line))
        .route("/timesheets/{id}/transitions", get(handle_list_transitions))
        .route("/timesheets/{id}/submittal", post(handle_submit))
        .route("/timesheets/{id}/submittal", get(handle_current_submittal))
        .route("/timesheets/{id}/correction", post(handle_correct))
        .route("/timesheets/{id}/correction", get(handle_current_correction))
        .route("/timesheets/{id}/rejection", post(handle_reject))
        .route("/timesheets/{id}/rejection", get(handle_current_rejection))
        .route("/timesheets/{id}/cancellation", post(handle_cancel))
        .route(
            "/timesheets/{id}/cancellation",
            get(handle_current_cancellation),
        )
        .route("/timesheets/{id}/approval", post(handle_approve))
        .route("/timesheets/{id}/approval", get(handle_current_approval))
        .route("/people", get(handle_list_people))
        .route("/people", post(handle_register_person))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing timecard server");

    let store: SqliteStore = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        SqliteStore::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        SqliteStore::new_in_memory()?
    };

    let app_state: AppState = AppState {
        store: Arc::new(Mutex::new(store)),
    };

    let app: Router = build_router(app_state);

    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
