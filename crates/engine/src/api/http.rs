//! HTTP routes.

use std::sync::Arc;

use arena_domain::{Character, CharacterId, Job, StatBlock};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::app::App;
use crate::infrastructure::ports::{Page, PageDirection};
use crate::use_cases::battle::ExecuteBattleError;
use crate::use_cases::management::{ListCharacters, ManagementError};

/// Create all HTTP routes, nesting the API under `prefix` (empty for root).
pub fn routes(prefix: &str) -> Router<Arc<App>> {
    let api = Router::new()
        .route("/health", get(health))
        .route("/battle", post(start_battle))
        .route("/characters", get(list_characters).post(create_character))
        .route("/characters/{id}", get(get_character));

    let root = Router::new().route("/", get(health));
    if prefix.is_empty() {
        root.merge(api)
    } else {
        root.nest(prefix, api)
    }
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Battle
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StartBattleRequest {
    character1_id: String,
    character2_id: String,
}

#[derive(Debug, Serialize)]
struct BattleLogResponse {
    log: String,
}

async fn start_battle(
    State(app): State<Arc<App>>,
    body: Result<Json<StartBattleRequest>, JsonRejection>,
) -> Result<Json<BattleLogResponse>, ApiError> {
    let Json(request) = body?;
    let first = parse_id(&request.character1_id, "Character 1 ID must be a valid UUID")?;
    let second = parse_id(&request.character2_id, "Character 2 ID must be a valid UUID")?;

    let log = app.use_cases.battle.execute.execute(first, second).await?;
    Ok(Json(BattleLogResponse { log }))
}

// =============================================================================
// Characters
// =============================================================================

#[derive(Debug, Deserialize)]
struct CreateCharacterRequest {
    name: String,
    job: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CharacterResponse {
    id: CharacterId,
    name: String,
    job: Job,
    is_alive: bool,
    health_points: i32,
    max_health_points: i32,
    attack_modifier: i32,
    speed_modifier: i32,
    stats: StatBlock,
}

impl From<&Character> for CharacterResponse {
    fn from(character: &Character) -> Self {
        Self {
            id: character.id(),
            name: character.name().to_string(),
            job: character.job(),
            is_alive: character.is_alive(),
            health_points: character.health_points(),
            max_health_points: character.max_health_points(),
            attack_modifier: character.attack_power(),
            speed_modifier: character.speed(),
            stats: *character.stats(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CharacterSummary {
    id: CharacterId,
    name: String,
    job: Job,
    is_alive: bool,
}

impl From<Character> for CharacterSummary {
    fn from(character: Character) -> Self {
        Self {
            id: character.id(),
            name: character.name().to_string(),
            job: character.job(),
            is_alive: character.is_alive(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ListCharactersQuery {
    cursor: Option<String>,
    limit: Option<u32>,
    direction: Option<PageDirection>,
}

async fn create_character(
    State(app): State<Arc<App>>,
    body: Result<Json<CreateCharacterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CharacterResponse>), ApiError> {
    let Json(request) = body?;
    let character = app
        .use_cases
        .management
        .character
        .create(request.name, request.job)
        .await?;
    Ok((StatusCode::CREATED, Json(CharacterResponse::from(&character))))
}

async fn get_character(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<CharacterResponse>, ApiError> {
    let id = parse_id(&id, "Character ID must be a valid UUID")?;
    let character = app.use_cases.management.character.get(id).await?;
    Ok(Json(CharacterResponse::from(&character)))
}

async fn list_characters(
    State(app): State<Arc<App>>,
    query: Result<Query<ListCharactersQuery>, QueryRejection>,
) -> Result<Json<Page<CharacterSummary>>, ApiError> {
    let Query(query) = query?;
    let page = app
        .use_cases
        .management
        .character
        .list(ListCharacters {
            cursor: query.cursor,
            limit: query.limit,
            direction: query.direction.unwrap_or_default(),
        })
        .await?;
    Ok(Json(page.map(CharacterSummary::from)))
}

fn parse_id(raw: &str, message: &str) -> Result<CharacterId, ApiError> {
    raw.trim()
        .parse()
        .map_err(|_| ApiError::BadRequest(message.to_string()))
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    status_code: u16,
    message: String,
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Internal(details) => {
                tracing::error!(error = %details, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = ErrorBody {
            status_code: status.as_u16(),
            message,
            error: status.canonical_reason().unwrap_or("Error").to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<ExecuteBattleError> for ApiError {
    fn from(e: ExecuteBattleError) -> Self {
        match e {
            ExecuteBattleError::SelfBattle(_)
            | ExecuteBattleError::CharacterNotAlive(_)
            | ExecuteBattleError::Battle(_) => ApiError::BadRequest(e.to_string()),
            ExecuteBattleError::CharacterNotFound(_) => ApiError::NotFound(e.to_string()),
            ExecuteBattleError::Domain(_) | ExecuteBattleError::Repo(_) => {
                ApiError::Internal(e.to_string())
            }
        }
    }
}

impl From<ManagementError> for ApiError {
    fn from(e: ManagementError) -> Self {
        match e {
            ManagementError::NotFound(_) => ApiError::NotFound(e.to_string()),
            ManagementError::DuplicateName(_) => ApiError::Conflict(e.to_string()),
            ManagementError::InvalidInput(_)
            | ManagementError::InvalidCursor(_)
            | ManagementError::Domain(_) => ApiError::BadRequest(e.to_string()),
            ManagementError::Repo(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
