use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::error::AnalyzerError;
use crate::flow;
use crate::store::TopologyStore;

/// Shared handle to the topology, one instance per process.
///
/// The store is explicitly constructed here and handed to the router;
/// there is no module-level singleton.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<TopologyStore>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: Arc::new(TopologyStore::new()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateComponentParams {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateCommunicationParams {
    pub source: Option<u32>,
    pub destination: u32,
}

#[derive(Debug, Deserialize)]
pub struct FlowParams {
    pub component: u32,
}

#[derive(Debug, Serialize)]
pub struct CreateComponentResponse {
    pub result: &'static str,
    #[serde(rename = "componentId")]
    pub component_id: u32,
}

#[derive(Debug, Serialize)]
pub struct ResultResponse {
    pub result: &'static str,
}

#[derive(Debug, Serialize)]
pub struct FlowResponse {
    pub flow: Option<Vec<u32>>,
    #[serde(rename = "internetFacing")]
    pub internet_facing: bool,
}

/// Wire mapping for core failures. Unknown ids surface as 404; a known
/// but unreachable component is a valid query result, not an error
/// status.
impl IntoResponse for AnalyzerError {
    fn into_response(self) -> Response {
        match self {
            AnalyzerError::ComponentNotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ResultResponse {
                    result: "failed: component not found",
                }),
            )
                .into_response(),
            AnalyzerError::NoPathToComponent(_) => Json(FlowResponse {
                flow: None,
                internet_facing: false,
            })
            .into_response(),
        }
    }
}

/// POST /component - register a component, returns its id
async fn create_component(
    State(state): State<AppState>,
    Query(params): Query<CreateComponentParams>,
) -> Json<CreateComponentResponse> {
    let component_id = state.store.add_component(&params.name);
    Json(CreateComponentResponse {
        result: "success",
        component_id,
    })
}

/// POST /communication - record a directed communication; a missing
/// source means the traffic comes from the internet
async fn create_communication(
    State(state): State<AppState>,
    Query(params): Query<CreateCommunicationParams>,
) -> Result<Json<ResultResponse>, AnalyzerError> {
    state
        .store
        .add_communication(params.source, params.destination)?;
    Ok(Json(ResultResponse { result: "success" }))
}

/// GET /flow - shortest flow from the internet to a component
async fn get_flow(
    State(state): State<AppState>,
    Query(params): Query<FlowParams>,
) -> Result<Json<FlowResponse>, AnalyzerError> {
    let snapshot = state.store.snapshot();
    let flow = flow::find_shortest_path_from_internet(&snapshot, params.component)?;
    Ok(Json(FlowResponse {
        flow: Some(flow),
        internet_facing: true,
    }))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/component", post(create_component))
        .route("/communication", post(create_communication))
        .route("/flow", get(get_flow))
        .with_state(state)
}
