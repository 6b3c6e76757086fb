//! HTTP surface: health check, list view settings and record endpoints.
//!
//! Record endpoints run every write through the document lifecycle, so the
//! same hooks apply whether a record comes from the API or from code.

use crate::{
    config::app::AppConfig,
    core::{DocType, Session, document, doctype::for_doctype, session::ADMINISTRATOR},
    cors::{self, CorsPolicy},
    errors::{Error, Result},
    listview,
};
use axum::{
    Json, Router, async_trait,
    extract::{FromRequest, FromRequestParts, Path, State, rejection::JsonRejection},
    http::{StatusCode, request::Parts},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
};
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Header carrying the authenticated user name
pub const USER_HEADER: &str = "x-user-id";

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    /// Pooled database connection
    pub db: DatabaseConnection,
}

/// JSON request body whose parse failures use the API error shape.
#[derive(FromRequest, serde::Deserialize)]
#[from_request(via(Json), rejection(Error))]
struct JsonBody(Value);

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Self::validation(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation { .. } | Self::InvalidAmount { .. } => StatusCode::EXPECTATION_FAILED,
            Self::Permission { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Duplicate { .. } => StatusCode::CONFLICT,
            Self::Config { .. }
            | Self::Database(_)
            | Self::Io(_)
            | Self::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            error!("Request failed: {self}");
        }
        let body = Json(json!({
            "exc_type": self.exc_type(),
            "message": self.to_string(),
        }));
        (status, body).into_response()
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Session {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self> {
        let user = parts
            .headers
            .get(USER_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|user| !user.is_empty())
            .ok_or_else(|| Error::permission("Not logged in"))?;
        // The administrator session is for in-process maintenance only
        if user.eq_ignore_ascii_case(ADMINISTRATOR) {
            return Err(Error::permission(format!("{ADMINISTRATOR} cannot sign in over HTTP")));
        }
        Ok(Session::new(user))
    }
}

/// Resolves a URL segment such as `debt-request` or `Debt Request`.
fn parse_doctype(segment: &str) -> Result<DocType> {
    DocType::from_slug(segment)
        .or_else(|| DocType::from_label(segment))
        .ok_or_else(|| Error::not_found("DocType", segment))
}

/// Audit rows are written by the lifecycle only.
fn ensure_writable(doctype: DocType) -> Result<()> {
    if doctype == DocType::AuditLog {
        return Err(Error::permission(format!("{doctype} is read-only")));
    }
    Ok(())
}

fn decode<D: document::Document>(body: Value) -> Result<D> {
    serde_json::from_value(body)
        .map_err(|e| Error::validation(format!("Invalid {} payload: {e}", D::DOCTYPE)))
}

fn data(value: Value) -> Json<Value> {
    Json(json!({ "data": value }))
}

/// Health check endpoint
async fn ping() -> Json<Value> {
    Json(json!({ "message": "pong" }))
}

async fn get_listview(Path(doctype): Path<String>) -> Result<Json<listview::ListViewSettings>> {
    let doctype = parse_doctype(&doctype)?;
    Ok(Json(listview::settings(doctype)))
}

async fn create_record(
    State(state): State<AppState>,
    session: Session,
    Path(doctype): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<Json<Value>> {
    let doctype = parse_doctype(&doctype)?;
    ensure_writable(doctype)?;
    let saved = for_doctype!(doctype, D => {
        let doc = decode::<D>(body)?;
        serde_json::to_value(document::insert(&state.db, &session, doc).await?)?
    });
    Ok(data(saved))
}

/// Returns the record together with its list indicator, if any.
async fn read_record(
    State(state): State<AppState>,
    session: Session,
    Path((doctype, id)): Path<(String, String)>,
) -> Result<Json<Value>> {
    let doctype = parse_doctype(&doctype)?;
    let found = for_doctype!(doctype, D => {
        serde_json::to_value(document::get::<D>(&state.db, &session, &id).await?)?
    });
    let indicator = listview::indicator_for(doctype, &found)
        .map(|(label, color)| json!({ "label": label, "color": color }));
    Ok(Json(json!({ "data": found, "indicator": indicator })))
}

/// Applies the fields in `body` on top of the stored record, then saves.
async fn update_record(
    State(state): State<AppState>,
    session: Session,
    Path((doctype, id)): Path<(String, String)>,
    JsonBody(body): JsonBody,
) -> Result<Json<Value>> {
    let doctype = parse_doctype(&doctype)?;
    ensure_writable(doctype)?;
    let Value::Object(changes) = body else {
        return Err(Error::validation("Request body must be a JSON object"));
    };
    let saved = for_doctype!(doctype, D => {
        let existing = document::get::<D>(&state.db, &session, &id).await?;
        let mut merged = serde_json::to_value(existing)?;
        if let Value::Object(fields) = &mut merged {
            fields.extend(changes);
            fields.insert("id".to_owned(), Value::String(id.clone()));
        }
        let doc = decode::<D>(merged)?;
        serde_json::to_value(document::save(&state.db, &session, doc).await?)?
    });
    Ok(data(saved))
}

async fn delete_record(
    State(state): State<AppState>,
    session: Session,
    Path((doctype, id)): Path<(String, String)>,
) -> Result<Json<Value>> {
    let doctype = parse_doctype(&doctype)?;
    ensure_writable(doctype)?;
    for_doctype!(doctype, D => {
        document::soft_delete::<D>(&state.db, &session, &id).await?;
    });
    Ok(Json(json!({ "message": "ok" })))
}

/// Builds the router with every route, request tracing and the CORS filter.
pub fn create_router(db: DatabaseConnection, cors_policy: CorsPolicy) -> Router {
    let state = AppState { db };
    Router::new()
        .route("/ping", get(ping))
        .route("/api/listview/:doctype", get(get_listview))
        .route("/api/resource/:doctype", axum::routing::post(create_record))
        .route(
            "/api/resource/:doctype/:id",
            get(read_record).put(update_record).delete(delete_record),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn_with_state(
            Arc::new(cors_policy),
            cors::cors_filter,
        ))
}

/// Binds the configured address and serves until Ctrl+C.
///
/// # Errors
/// Returns an I/O error if the address cannot be bound or the server fails.
pub async fn start_server(config: &AppConfig, db: DatabaseConnection) -> Result<()> {
    let app = create_router(db, CorsPolicy::new(config.cors.allowed_origins.clone()));
    let listener = TcpListener::bind(&config.bind_address).await?;
    info!("Listening on http://{}", config.bind_address);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
    }
}
