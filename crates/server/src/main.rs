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

mod store;

use axum::{
    Json, Router,
    extract::{Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use store::{ConsoleStore, MemberFilter, SnapshotIdFetcher};
use teamdesk::{SelectionCommand, SelectionState, apply};
use teamdesk_api::{
    ApiError, ListMembersResponse, run_bulk_delete, run_group_import, run_member_import,
};
use teamdesk_audit::{Actor, AuditEvent, Trigger};
use teamdesk_domain::{MemberRecord, RoleDirectory, RowId, TeamRecord, TeamStatus};

/// Teamdesk Server - HTTP server for the Teamdesk Admin Console
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Default page size for member listings
    #[arg(long, default_value_t = 25)]
    page_size: u32,

    /// Comma-separated role names accepted by member imports
    #[arg(long, default_value = "Manager,Contributor,Viewer")]
    roles: String,

    /// Seed the store with demo teams and members
    #[arg(long)]
    demo: bool,
}

/// Application state shared across handlers.
///
/// The store is wrapped in a Mutex so bulk operations are serialized:
/// no two in-flight operations ever share mutable selection or cache
/// state.
#[derive(Clone)]
struct AppState {
    /// The in-memory dataset.
    store: Arc<Mutex<ConsoleStore>>,
    /// Audit events recorded by completed bulk operations.
    audit_log: Arc<Mutex<Vec<AuditEvent>>>,
    /// The role lookup table for member imports.
    roles: Arc<RoleDirectory>,
    /// Default page size when a listing omits one.
    default_page_size: u32,
}

/// Query parameters for member listing and id fetching.
#[derive(Debug, Clone, Deserialize)]
struct MemberQuery {
    /// Case-insensitive substring match against name and email.
    search: Option<String>,
    /// Restrict to one team.
    team_id: Option<i64>,
    /// The page to return (1-based).
    page: Option<u32>,
    /// Rows per page.
    page_size: Option<u32>,
}

impl MemberQuery {
    fn filter(&self) -> MemberFilter {
        MemberFilter {
            search: self.search.clone(),
            team_id: self.team_id,
        }
    }
}

/// API response for a full id-set fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MemberIdsResponse {
    /// Every id matching the filter, across all pages.
    ids: Vec<String>,
}

/// API request for a bulk delete.
///
/// The client ships its selection state verbatim: either an explicit id
/// list, or the all-selected flag with the exclusion set and the filter
/// the selection was made under.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct BulkDeleteApiRequest {
    /// The actor ID performing this action.
    actor_id: String,
    /// The cause ID for this action.
    request_id: String,
    /// True when the logical "all matching" superset is selected.
    #[serde(default)]
    all_selected: bool,
    /// Explicit selection; used when `all_selected` is false.
    #[serde(default)]
    selected_ids: Vec<String>,
    /// Exclusions from the superset; used when `all_selected` is true.
    #[serde(default)]
    excluded_ids: Vec<String>,
    /// The matching-row count the client displayed.
    #[serde(default)]
    total_matching: u64,
    /// The filter the selection was made under.
    search: Option<String>,
    /// The filter the selection was made under.
    team_id: Option<i64>,
}

/// API request for an import run.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ImportApiRequest {
    /// The actor ID performing this action.
    actor_id: String,
    /// The cause ID for this action.
    request_id: String,
    /// The uploaded file's content.
    csv_content: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    status: String,
}

/// Rebuilds a selection state from the wire representation.
fn selection_from_request(request: &BulkDeleteApiRequest) -> SelectionState {
    if request.all_selected {
        let mut state: SelectionState = apply(
            &SelectionState::new(),
            SelectionCommand::SelectAllMatching {
                total_matching: request.total_matching,
            },
        );
        for id in &request.excluded_ids {
            state = apply(
                &state,
                SelectionCommand::SelectRow {
                    row_id: RowId::new(id),
                    checked: false,
                },
            );
        }
        state
    } else {
        let mut state: SelectionState = SelectionState::new();
        for id in &request.selected_ids {
            state = apply(
                &state,
                SelectionCommand::SelectRow {
                    row_id: RowId::new(id),
                    checked: true,
                },
            );
        }
        state
    }
}

/// Maps an API error onto an HTTP response.
fn error_response(err: &ApiError) -> Response {
    let status: StatusCode = match err {
        ApiError::InvalidCsvFormat { .. } | ApiError::InvalidInput { .. } => {
            StatusCode::BAD_REQUEST
        }
        ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
        ApiError::SelectionFetchFailed { .. } => StatusCode::BAD_GATEWAY,
        ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(serde_json::json!({ "error": err.to_string() }))).into_response()
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

async fn list_members(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<MemberQuery>,
) -> Json<ListMembersResponse> {
    let store = state.store.lock().await;
    let page: u32 = query.page.unwrap_or(1).max(1);
    let page_size: u32 = query.page_size.unwrap_or(state.default_page_size).max(1);
    Json(store.list_members(&query.filter(), page, page_size))
}

async fn member_ids(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<MemberQuery>,
) -> Json<MemberIdsResponse> {
    let store = state.store.lock().await;
    let ids: Vec<String> = store
        .matching_ids(&query.filter())
        .into_iter()
        .map(|id| id.to_string())
        .collect();
    Json(MemberIdsResponse { ids })
}

async fn bulk_delete(
    AxumState(state): AxumState<AppState>,
    Json(request): Json<BulkDeleteApiRequest>,
) -> Response {
    let mut store = state.store.lock().await;

    let selection: SelectionState = selection_from_request(&request);
    let filter: MemberFilter = MemberFilter {
        search: request.search.clone(),
        team_id: request.team_id,
    };
    // The snapshot is only needed (and only taken) for all-selected mode;
    // explicit selections materialize without touching it.
    let snapshot: Vec<RowId> = if request.all_selected {
        store.matching_ids(&filter)
    } else {
        Vec::new()
    };
    let fetcher: SnapshotIdFetcher = SnapshotIdFetcher::new(snapshot);

    let actor: Actor = Actor::new(request.actor_id.clone(), String::from("operator"));
    let trigger: Trigger = Trigger::new(request.request_id.clone(), String::from("Bulk delete"));

    match run_bulk_delete(
        &selection,
        &fetcher,
        store.directory_mut(),
        &actor,
        trigger,
    )
    .await
    {
        Ok((response, event)) => {
            state.audit_log.lock().await.push(event);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => error_response(&err),
    }
}

async fn import_groups(
    AxumState(state): AxumState<AppState>,
    Json(request): Json<ImportApiRequest>,
) -> Response {
    let mut store = state.store.lock().await;
    let teams: Vec<TeamRecord> = store.teams().to_vec();

    let actor: Actor = Actor::new(request.actor_id.clone(), String::from("operator"));
    let trigger: Trigger = Trigger::new(request.request_id.clone(), String::from("Group import"));

    match run_group_import(
        &request.csv_content,
        &teams,
        store.directory_mut(),
        &actor,
        trigger,
    )
    .await
    {
        Ok((response, event)) => {
            state.audit_log.lock().await.push(event);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => error_response(&err),
    }
}

async fn import_members(
    AxumState(state): AxumState<AppState>,
    Json(request): Json<ImportApiRequest>,
) -> Response {
    let mut store = state.store.lock().await;
    let teams: Vec<TeamRecord> = store.teams().to_vec();
    let members: Vec<MemberRecord> = store.members().to_vec();

    let actor: Actor = Actor::new(request.actor_id.clone(), String::from("operator"));
    let trigger: Trigger = Trigger::new(request.request_id.clone(), String::from("Member import"));

    match run_member_import(
        &request.csv_content,
        &teams,
        &members,
        &state.roles,
        store.directory_mut(),
        &actor,
        trigger,
    )
    .await
    {
        Ok((response, event)) => {
            state.audit_log.lock().await.push(event);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => error_response(&err),
    }
}

async fn audit_log(AxumState(state): AxumState<AppState>) -> Json<Vec<AuditEvent>> {
    let log = state.audit_log.lock().await;
    Json(log.clone())
}

/// Builds the application router.
fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/members", get(list_members))
        .route("/members/ids", get(member_ids))
        .route("/members/bulk-delete", post(bulk_delete))
        .route("/import/groups", post(import_groups))
        .route("/import/members", post(import_members))
        .route("/audit", get(audit_log))
        .with_state(state)
}

/// Seeds a store with demo teams and members.
fn seed_demo_store(store: &mut ConsoleStore) {
    let eng: i64 = store.directory_mut().add_team("Eng", TeamStatus::Active);
    store.directory_mut().add_sub_team(eng, "Backend");
    store.directory_mut().add_sub_team(eng, "Frontend");
    let ops: i64 = store.directory_mut().add_team("Ops", TeamStatus::Active);
    store.directory_mut().add_sub_team(ops, "SRE");
    store.directory_mut().add_team("Legacy", TeamStatus::Inactive);

    store
        .directory_mut()
        .add_member(eng, "Alice Johnson", "alice@example.com");
    store
        .directory_mut()
        .add_member(eng, "Bob Smith", "bob@example.com");
    store
        .directory_mut()
        .add_member(ops, "Carol Diaz", "carol@example.com");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Teamdesk Server");

    let mut store: ConsoleStore = ConsoleStore::new();
    if args.demo {
        info!("Seeding demo data");
        seed_demo_store(&mut store);
    }

    let roles: RoleDirectory = RoleDirectory::from_roles(
        &args.roles.split(',').map(str::trim).collect::<Vec<&str>>(),
    );

    let app_state: AppState = AppState {
        store: Arc::new(Mutex::new(store)),
        audit_log: Arc::new(Mutex::new(Vec::new())),
        roles: Arc::new(roles),
        default_page_size: args.page_size,
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use tower::ServiceExt;

    fn test_state(seed: bool) -> AppState {
        let mut store: ConsoleStore = ConsoleStore::new();
        if seed {
            seed_demo_store(&mut store);
        }
        AppState {
            store: Arc::new(Mutex::new(store)),
            audit_log: Arc::new(Mutex::new(Vec::new())),
            roles: Arc::new(RoleDirectory::from_roles(&["Manager", "Contributor"])),
            default_page_size: 25,
        }
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        serde_json::from_slice(&bytes).expect("body is JSON")
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app: Router = build_router(test_state(false));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("request runs");

        assert_eq!(response.status(), HttpStatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_list_members_paginates() {
        let app: Router = build_router(test_state(true));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/members?page=1&page_size=2")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("request runs");

        assert_eq!(response.status(), HttpStatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["total_matching"], 3);
        assert_eq!(json["members"].as_array().expect("array").len(), 2);
    }

    #[tokio::test]
    async fn test_member_ids_returns_full_set() {
        let app: Router = build_router(test_state(true));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/members/ids")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("request runs");

        let json = body_json(response).await;
        assert_eq!(json["ids"].as_array().expect("array").len(), 3);
    }

    #[tokio::test]
    async fn test_bulk_delete_all_selected_with_exclusion() {
        let state: AppState = test_state(true);
        let app: Router = build_router(state.clone());

        let request_body = serde_json::json!({
            "actor_id": "op-1",
            "request_id": "req-1",
            "all_selected": true,
            "excluded_ids": ["member-1"],
            "total_matching": 3,
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/members/bulk-delete")
                    .header("content-type", "application/json")
                    .body(Body::from(request_body.to_string()))
                    .expect("request builds"),
            )
            .await
            .expect("request runs");

        assert_eq!(response.status(), HttpStatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["deleted"], 2);
        assert_eq!(json["requested"], 2);

        let store = state.store.lock().await;
        assert_eq!(store.members().len(), 1);
        assert_eq!(store.members()[0].id.as_str(), "member-1");
    }

    #[tokio::test]
    async fn test_import_groups_round_trip() {
        let state: AppState = test_state(false);
        let app: Router = build_router(state.clone());

        let request_body = serde_json::json!({
            "actor_id": "op-1",
            "request_id": "req-2",
            "csv_content": "Team,Sub Team\nEng,Backend\nEng,Backend\n",
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/import/groups")
                    .header("content-type", "application/json")
                    .body(Body::from(request_body.to_string()))
                    .expect("request builds"),
            )
            .await
            .expect("request runs");

        assert_eq!(response.status(), HttpStatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["success_count"], 1);
        assert_eq!(json["failed_count"], 1);
        assert_eq!(
            json["failed_rows"][0]["reason"],
            "Subteam already exists under this team"
        );

        let audit = state.audit_log.lock().await;
        assert_eq!(audit.len(), 1);
        assert_eq!(audit[0].action.name, "ImportGroups");
    }

    #[tokio::test]
    async fn test_import_with_missing_headers_is_bad_request() {
        let app: Router = build_router(test_state(false));

        let request_body = serde_json::json!({
            "actor_id": "op-1",
            "request_id": "req-3",
            "csv_content": "Team\nEng\n",
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/import/groups")
                    .header("content-type", "application/json")
                    .body(Body::from(request_body.to_string()))
                    .expect("request builds"),
            )
            .await
            .expect("request runs");

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_import_members_respects_role_directory() {
        let state: AppState = test_state(true);
        let app: Router = build_router(state.clone());

        let request_body = serde_json::json!({
            "actor_id": "op-1",
            "request_id": "req-4",
            "csv_content": "Name,Email,Team,Role\nDana,dana@example.com,Eng,Wizard\n",
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/import/members")
                    .header("content-type", "application/json")
                    .body(Body::from(request_body.to_string()))
                    .expect("request builds"),
            )
            .await
            .expect("request runs");

        assert_eq!(response.status(), HttpStatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["success_count"], 0);
        assert_eq!(json["failed_rows"][0]["reason"], "Wizard not found");
    }

    #[tokio::test]
    async fn test_audit_log_collects_bulk_operations() {
        let state: AppState = test_state(true);
        let app: Router = build_router(state.clone());

        let request_body = serde_json::json!({
            "actor_id": "op-1",
            "request_id": "req-5",
            "selected_ids": ["member-1"],
        });

        let _response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/members/bulk-delete")
                    .header("content-type", "application/json")
                    .body(Body::from(request_body.to_string()))
                    .expect("request builds"),
            )
            .await
            .expect("request runs");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/audit")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("request runs");

        let json = body_json(response).await;
        let events = json.as_array().expect("array");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0]["action"]["name"], "BulkDelete");
        assert_eq!(events[0]["tally"]["succeeded"], 1);
    }
}
