//! Employee API Handlers
//!
//! Sign-in matches the supplied password against the stored NIC. Weak, but
//! it is the scheme the business runs on; see DESIGN.md before changing it.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::models::{Employee, EmployeeCreate, EmployeeSignIn, EmployeeUpdate};
use crate::db::repository::EmployeeRepository;
use crate::utils::{AppError, AppResponse, AppResult, ok, ok_with_message};

#[derive(Serialize)]
pub(crate) struct EmployeePayload {
    employee: Employee,
}

#[derive(Serialize)]
pub(crate) struct EmployeeListPayload {
    employees: Vec<Employee>,
}

#[derive(Serialize)]
pub(crate) struct SignInPayload {
    token: String,
    employee: Employee,
}

#[derive(Serialize)]
pub(crate) struct Empty {}

/// POST /api/employee/signin
pub async fn signin(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeSignIn>,
) -> AppResult<Json<AppResponse<SignInPayload>>> {
    let username = payload
        .username
        .as_deref()
        .map(str::trim)
        .unwrap_or_default();
    let password = payload.password.as_deref().unwrap_or_default();
    if username.is_empty() || password.is_empty() {
        return Err(AppError::validation("Username and password are required"));
    }

    let employee = EmployeeRepository::new(state.get_db())
        .find_by_username(username)
        .await?
        .ok_or_else(AppError::invalid_credentials)?;

    if password != employee.nic {
        return Err(AppError::invalid_credentials());
    }

    let subject = employee
        .id
        .as_ref()
        .map(|id| id.to_string())
        .unwrap_or_else(|| employee.emp_id.clone());
    let token = state
        .jwt_service
        .generate_token(
            subject,
            employee.name.clone(),
            "admin",
            Some(employee.emp_id.clone()),
        )
        .map_err(|e| AppError::internal(format!("Token generation failed: {e}")))?;

    tracing::info!(emp_id = %employee.emp_id, "Employee signed in");

    Ok(ok_with_message(
        SignInPayload { token, employee },
        "Signed in successfully",
    ))
}

/// POST /api/employee/create
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<(StatusCode, Json<AppResponse<EmployeePayload>>)> {
    let employee = payload.into_employee()?;
    let employee = EmployeeRepository::new(state.get_db())
        .create(employee)
        .await?;
    Ok((
        StatusCode::CREATED,
        ok_with_message(EmployeePayload { employee }, "Employee created successfully"),
    ))
}

/// GET /api/employee/read
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<EmployeeListPayload>>> {
    let employees = EmployeeRepository::new(state.get_db()).find_all().await?;
    Ok(ok(EmployeeListPayload { employees }))
}

/// GET /api/employee/get/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<EmployeePayload>>> {
    let employee = EmployeeRepository::new(state.get_db())
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Employee {} not found", id)))?;
    Ok(ok(EmployeePayload { employee }))
}

/// PUT /api/employee/update/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(patch): Json<EmployeeUpdate>,
) -> AppResult<Json<AppResponse<EmployeePayload>>> {
    let employee = EmployeeRepository::new(state.get_db())
        .update(&id, patch)
        .await?;
    Ok(ok_with_message(
        EmployeePayload { employee },
        "Employee updated successfully",
    ))
}

/// DELETE /api/employee/delete/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<Empty>>> {
    EmployeeRepository::new(state.get_db()).delete(&id).await?;
    Ok(ok_with_message(Empty {}, "Employee deleted successfully"))
}
