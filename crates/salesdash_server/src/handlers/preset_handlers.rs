use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use salesdash_core::model::Parameter;

use crate::error::{ApiError, ApiResult};
use crate::handlers::AppState;
use crate::models::{CreatePresetRequest, SavedPreset};
use crate::validation;

pub async fn list_presets(State(state): State<AppState>) -> ApiResult<Json<Vec<SavedPreset>>> {
    let conn = state.db.lock()?;
    let mut stmt = conn
        .prepare("SELECT id, name, parameters, created_at FROM presets ORDER BY created_at")?;

    let rows: Vec<(String, String, String, String)> = stmt
        .query_map([], |row| {
            Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
        })?
        .filter_map(|row| row.ok())
        .collect();

    let mut presets = Vec::with_capacity(rows.len());
    for (id, name, params_json, created_at) in rows {
        let parameters: Vec<Parameter> = serde_json::from_str(&params_json)?;
        presets.push(SavedPreset {
            id,
            name,
            parameters,
            created_at,
        });
    }

    Ok(Json(presets))
}

pub async fn get_preset(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<SavedPreset>> {
    let conn = state.db.lock()?;
    let (name, params_json, created_at): (String, String, String) = conn
        .query_row(
            "SELECT name, parameters, created_at FROM presets WHERE id = ?1",
            [&id],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
        .map_err(|err| match err {
            rusqlite::Error::QueryReturnedNoRows => ApiError::PresetNotFound(id.clone()),
            _ => ApiError::from(err),
        })?;

    let parameters: Vec<Parameter> = serde_json::from_str(&params_json)?;
    Ok(Json(SavedPreset {
        id,
        name,
        parameters,
        created_at,
    }))
}

/// Presets are immutable once saved; re-saving a name creates a new preset
pub async fn create_preset(
    State(state): State<AppState>,
    Json(req): Json<CreatePresetRequest>,
) -> ApiResult<Json<SavedPreset>> {
    validation::validate_preset_name(&req.name)?;
    validation::validate_preset_parameters(&req.parameters)?;

    let id = Uuid::new_v4().to_string();
    let now = chrono::Utc::now().to_rfc3339();
    let params_json = serde_json::to_string(&req.parameters)?;

    let conn = state.db.lock()?;
    conn.execute(
        "INSERT INTO presets (id, name, parameters, created_at) VALUES (?1, ?2, ?3, ?4)",
        rusqlite::params![id, req.name, params_json, now],
    )?;

    Ok(Json(SavedPreset {
        id,
        name: req.name,
        parameters: req.parameters,
        created_at: now,
    }))
}
