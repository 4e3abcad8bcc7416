use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use salesdash_core::calculator::scenario_results;
use salesdash_core::model::{Scenario, ScenarioParameters};
use salesdash_core::series::{COMPARISON_FIELDS, ComparisonSelection, comparison_series};

use crate::error::{ApiError, ApiResult};
use crate::handlers::AppState;
use crate::models::{
    CompareScenariosRequest, ComparisonResponse, CreateScenarioRequest, SavedScenario,
    ScenarioListItem, UpdateScenarioRequest,
};
use crate::validation;

// ============================================================================
// Scenario CRUD Handlers
// ============================================================================

pub async fn list_scenarios(State(state): State<AppState>) -> ApiResult<Json<Vec<ScenarioListItem>>> {
    let conn = state.db.lock()?;
    let mut stmt = conn.prepare(
        "SELECT id, name, description, parameters, created_at, updated_at FROM scenarios ORDER BY updated_at DESC",
    )?;

    let rows: Vec<(String, String, Option<String>, String, String, String)> = stmt
        .query_map([], |row| {
            Ok((
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
                row.get(5)?,
            ))
        })?
        .filter_map(|row| row.ok())
        .collect();

    let mut items = Vec::with_capacity(rows.len());
    for (id, name, description, params_json, created_at, updated_at) in rows {
        let parameters: ScenarioParameters = serde_json::from_str(&params_json)?;
        // Results are derived on every read so they can never go stale
        let results = scenario_results(&parameters)?;
        items.push(ScenarioListItem {
            id,
            name,
            description,
            revenue: results.revenue,
            gross_margin: results.gross_margin,
            operating_margin: results.operating_margin,
            created_at,
            updated_at,
        });
    }

    Ok(Json(items))
}

pub async fn create_scenario(
    State(state): State<AppState>,
    Json(req): Json<CreateScenarioRequest>,
) -> ApiResult<Json<SavedScenario>> {
    validation::validate_scenario_name(&req.name)?;
    validation::validate_scenario_params(&req.parameters)?;

    let results = scenario_results(&req.parameters)?;
    let id = Uuid::new_v4().to_string();
    let now = chrono::Utc::now().to_rfc3339();
    let params_json = serde_json::to_string(&req.parameters)?;

    let conn = state.db.lock()?;
    conn.execute(
        "INSERT INTO scenarios (id, name, description, parameters, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        rusqlite::params![id, req.name, req.description, params_json, now, now],
    )?;

    Ok(Json(SavedScenario {
        id,
        name: req.name,
        description: req.description,
        parameters: req.parameters,
        results,
        created_at: now.clone(),
        updated_at: now,
    }))
}

pub async fn get_scenario(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<SavedScenario>> {
    let conn = state.db.lock()?;
    let (name, description, params_json, created_at, updated_at) =
        fetch_scenario_row(&conn, &id)?;

    let parameters: ScenarioParameters = serde_json::from_str(&params_json)?;
    let results = scenario_results(&parameters)?;

    Ok(Json(SavedScenario {
        id,
        name,
        description,
        parameters,
        results,
        created_at,
        updated_at,
    }))
}

pub async fn update_scenario(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateScenarioRequest>,
) -> ApiResult<Json<SavedScenario>> {
    if let Some(ref name) = req.name {
        validation::validate_scenario_name(name)?;
    }
    if let Some(ref params) = req.parameters {
        validation::validate_scenario_params(params)?;
    }

    let conn = state.db.lock()?;
    let (current_name, current_desc, current_params_json, created_at, _) =
        fetch_scenario_row(&conn, &id)?;

    let name = req.name.unwrap_or(current_name);
    let description = req.description.or(current_desc);
    let parameters = match req.parameters {
        Some(params) => params,
        None => serde_json::from_str(&current_params_json)?,
    };

    // Any parameter change invalidates the cached results block
    let results = scenario_results(&parameters)?;
    let params_json = serde_json::to_string(&parameters)?;
    let now = chrono::Utc::now().to_rfc3339();

    conn.execute(
        "UPDATE scenarios SET name = ?1, description = ?2, parameters = ?3, updated_at = ?4 WHERE id = ?5",
        rusqlite::params![name, description, params_json, now, id],
    )?;

    Ok(Json(SavedScenario {
        id,
        name,
        description,
        parameters,
        results,
        created_at,
        updated_at: now,
    }))
}

pub async fn delete_scenario(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let conn = state.db.lock()?;

    let exists: i64 = conn.query_row(
        "SELECT COUNT(*) FROM scenarios WHERE id = ?1",
        [&id],
        |row| row.get(0),
    )?;
    if exists == 0 {
        return Err(ApiError::ScenarioNotFound(id));
    }

    // Comparison views need at least one scenario to remain selectable
    let total: i64 = conn.query_row("SELECT COUNT(*) FROM scenarios", [], |row| row.get(0))?;
    if total <= 1 {
        return Err(ApiError::LastScenario);
    }

    conn.execute("DELETE FROM scenarios WHERE id = ?1", [&id])?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn duplicate_scenario(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<SavedScenario>> {
    let conn = state.db.lock()?;
    let (name, description, params_json, _, _) = fetch_scenario_row(&conn, &id)?;

    let parameters: ScenarioParameters = serde_json::from_str(&params_json)?;
    let source = Scenario::new(id, name, description.unwrap_or_default(), parameters)?;
    let copy = source.duplicate(Uuid::new_v4().to_string());
    let now = chrono::Utc::now().to_rfc3339();

    conn.execute(
        "INSERT INTO scenarios (id, name, description, parameters, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        rusqlite::params![copy.id, copy.name, copy.description, params_json, now, now],
    )?;

    Ok(Json(SavedScenario {
        id: copy.id,
        name: copy.name,
        description: Some(copy.description),
        parameters: copy.parameters,
        results: copy.results,
        created_at: now.clone(),
        updated_at: now,
    }))
}

// ============================================================================
// Comparison Handler
// ============================================================================

pub async fn compare_scenarios(
    State(state): State<AppState>,
    Json(req): Json<CompareScenariosRequest>,
) -> ApiResult<Json<ComparisonResponse>> {
    if req.ids.is_empty() {
        return Err(ApiError::ValidationError {
            field: "ids".to_string(),
            message: "Select at least one scenario to compare".to_string(),
        });
    }

    // The cap lives at this boundary: ids past the limit are ignored, and
    // the first selections always survive
    let mut selection = ComparisonSelection::new();
    for id in &req.ids {
        selection.select(id);
    }

    let conn = state.db.lock()?;
    let mut scenarios = Vec::with_capacity(selection.len());
    for id in selection.ids() {
        let (name, description, params_json, _, _) = fetch_scenario_row(&conn, id)?;
        let parameters: ScenarioParameters = serde_json::from_str(&params_json)?;
        scenarios.push(Scenario::new(
            id.clone(),
            name,
            description.unwrap_or_default(),
            parameters,
        )?);
    }
    drop(conn);

    let series = comparison_series(&scenarios)?;
    Ok(Json(ComparisonResponse {
        labels: COMPARISON_FIELDS
            .iter()
            .map(|field| field.label().to_string())
            .collect(),
        series,
    }))
}

// ============================================================================
// Shared row access
// ============================================================================

type ScenarioRow = (String, Option<String>, String, String, String);

fn fetch_scenario_row(conn: &rusqlite::Connection, id: &str) -> ApiResult<ScenarioRow> {
    conn.query_row(
        "SELECT name, description, parameters, created_at, updated_at FROM scenarios WHERE id = ?1",
        [id],
        |row| {
            Ok((
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
            ))
        },
    )
    .map_err(|err| match err {
        rusqlite::Error::QueryReturnedNoRows => ApiError::ScenarioNotFound(id.to_string()),
        _ => ApiError::from(err),
    })
}
