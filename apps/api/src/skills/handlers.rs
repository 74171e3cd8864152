use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::skills::catalog::RoleRequirements;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RoleListResponse {
    pub default_role: String,
    pub roles: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RoleDetailResponse {
    pub requested_role: String,
    pub fallback: bool,
    pub requirements: RoleRequirements,
}

/// GET /api/v1/roles
pub async fn handle_list_roles(State(state): State<AppState>) -> Json<RoleListResponse> {
    Json(RoleListResponse {
        default_role: state.catalog.default_role().to_string(),
        roles: state.catalog.role_names(),
    })
}

/// GET /api/v1/roles/:role
///
/// Unknown roles resolve to the default role with `fallback: true`.
pub async fn handle_get_role(
    State(state): State<AppState>,
    Path(role): Path<String>,
) -> Result<Json<RoleDetailResponse>, AppError> {
    if role.trim().is_empty() {
        return Err(AppError::Validation("role cannot be empty".to_string()));
    }

    Ok(Json(RoleDetailResponse {
        fallback: !state.catalog.contains(&role),
        requirements: state.catalog.requirements_for(&role).clone(),
        requested_role: role,
    }))
}
