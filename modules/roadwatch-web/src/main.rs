use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;
use tokio::sync::{Mutex, RwLock};
use tower_http::services::ServeFile;
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use nominatim_client::NominatimClient;
use roadwatch_common::{CityProfile, Config};
use roadwatch_data::{DataLoader, DatasetSource, FileSource, HttpSource};
use roadwatch_map::{Geocoder, MapEvent};

mod session;
mod surface;
mod templates;
use session::Session;
use templates::render_map;

// --- App State ---

struct AppState {
    config: Config,
    city: CityProfile,
    geocoder: Arc<dyn Geocoder>,
    /// Read-only copy of the dataset backing the JSON API.
    catalog: RwLock<DataLoader>,
    /// The interactive map session. Replaced on every page load.
    session: Mutex<Option<Session>>,
    next_session_id: AtomicU64,
}

fn dataset_source(config: &Config) -> Box<dyn DatasetSource> {
    match &config.data_url {
        Some(url) => Box::new(HttpSource::new(url)),
        None => Box::new(FileSource::new(&config.data_path)),
    }
}

// --- Main ---

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("roadwatch=info".parse()?))
        .init();

    let config = Config::from_env();
    config.log_summary();

    let geocoder: Arc<dyn Geocoder> = Arc::new(NominatimClient::new(
        &config.nominatim_url,
        &config.nominatim_user_agent,
    ));

    let mut catalog = DataLoader::from_boxed(dataset_source(&config));
    catalog.load().await;

    let state = Arc::new(AppState {
        city: CityProfile::bengaluru(),
        geocoder,
        catalog: RwLock::new(catalog),
        session: Mutex::new(None),
        next_session_id: AtomicU64::new(1),
        config: config.clone(),
    });

    let app = Router::new()
        .route("/", get(map_page))
        .route_service("/data/roads.json", ServeFile::new(&config.data_path))
        // Dataset API
        .route("/api/roads", get(api_roads))
        .route("/api/roads/{id}", get(api_road_detail))
        .route("/api/stats", get(api_stats))
        // Map session
        .route("/api/session/init", post(session_init))
        .route("/api/session/event", post(session_event))
        .route("/api/session/search", post(session_search))
        .route("/api/session/contribute", post(session_contribute))
        .with_state(state)
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        );

    let addr = format!("{}:{}", config.web_host, config.web_port);
    info!("Road map server starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// --- Pages ---

async fn map_page() -> impl IntoResponse {
    Html(render_map())
}

// --- Dataset API ---

async fn api_roads(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let catalog = state.catalog.read().await;
    Json(catalog.get_all().to_vec())
}

async fn api_road_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    let catalog = state.catalog.read().await;
    match catalog.get_by_id(&id) {
        Some(road) => Json(road.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, "Road not found").into_response(),
    }
}

async fn api_stats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let stats = state.catalog.read().await.get_stats();
    Json(json!({
        "totalRoads": stats.total_roads,
        "totalCost": stats.total_cost,
        "contractors": stats.contractors,
        "summary": stats.to_string(),
    }))
}

// --- Map session ---

fn no_session() -> Response {
    (StatusCode::CONFLICT, "Map session not initialized").into_response()
}

/// Start a fresh session: reload the dataset, draw it and return the commands.
///
/// The JSON API catalog is refreshed from the same source so both views agree.
async fn session_init(State(state): State<Arc<AppState>>) -> Response {
    let id = state.next_session_id.fetch_add(1, Ordering::Relaxed);
    let loader = DataLoader::from_boxed(dataset_source(&state.config));
    let mut session = Session::start(
        id,
        loader,
        Arc::clone(&state.geocoder),
        state.city.clone(),
    )
    .await;
    let commands = session.drain();

    let mut catalog = DataLoader::from_boxed(dataset_source(&state.config));
    catalog.load().await;
    *state.catalog.write().await = catalog;

    debug!(session = session.id(), "Map session started");
    *state.session.lock().await = Some(session);
    Json(commands).into_response()
}

async fn session_event(
    State(state): State<Arc<AppState>>,
    Json(event): Json<MapEvent>,
) -> Response {
    let mut guard = state.session.lock().await;
    let Some(session) = guard.as_mut() else {
        return no_session();
    };
    Json(session.handle_event(event)).into_response()
}

#[derive(Deserialize)]
struct SearchRequest {
    query: String,
}

/// Run a place search. The session lock is released while the lookup is in flight.
async fn session_search(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SearchRequest>,
) -> Response {
    let (pending, mut commands) = {
        let mut guard = state.session.lock().await;
        let Some(session) = guard.as_mut() else {
            return no_session();
        };
        match session.begin_search(&req.query) {
            (Some(pending), commands) => (pending, commands),
            (None, commands) => return Json(commands).into_response(),
        }
    };

    let result = pending.geocoder.lookup(pending.query(), &pending.city).await;

    let mut guard = state.session.lock().await;
    let Some(session) = guard.as_mut() else {
        warn!("Map session dropped during search");
        return no_session();
    };
    commands.extend(session.finish_search(pending, result));
    Json(commands).into_response()
}

async fn session_contribute(State(state): State<Arc<AppState>>) -> Response {
    let mut guard = state.session.lock().await;
    let Some(session) = guard.as_mut() else {
        return no_session();
    };
    Json(session.contribute_help()).into_response()
}
