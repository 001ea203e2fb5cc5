use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use utoipa::ToSchema;

use crate::{
    api::error::ApiError,
    model::employee::{Employee, EmployeePatch, NewEmployee},
    store::{EmployeeStore, StoreError},
};

pub const LIST_FAILED: &str = "Getting employees failed";
pub const GET_FAILED: &str = "Getting employee failed";
pub const CREATE_FAILED: &str = "Creating new employee failed";
pub const DELETE_FAILED: &str = "Deleting employee failed";
pub const UPDATE_FAILED: &str = "Updating employee failed";

#[derive(Serialize, ToSchema)]
pub struct EmployeeCreatedResponse {
    pub employee: Employee,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateEmployee {
    #[schema(example = "6b1f3c1e-5a0e-4c57-9a43-3c2d0f0f8a11")]
    pub id: String,
    #[serde(flatten)]
    pub fields: EmployeePatch,
}

fn plain_text(body: &'static str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(body)
}

/// List Employees
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Every employee record", body = [Employee]),
        (status = 500, description = "Store failure", body = ErrorBody, example = json!({
            "message": "Getting employees failed", "statusCode": 500
        }))
    ),
    tag = "Employee"
)]
pub async fn list_employees(
    store: web::Data<dyn EmployeeStore>,
) -> Result<impl Responder, ApiError> {
    let employees = store
        .find_all()
        .await
        .map_err(|e| ApiError::store(LIST_FAILED, e))?;

    debug!(count = employees.len(), "Listed employees");
    Ok(HttpResponse::Ok().json(employees))
}

/// Get Employee by ID
#[utoipa::path(
    get,
    path = "/employee/{id}",
    params(
        ("id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 500, description = "Unknown id or store failure", body = ErrorBody, example = json!({
            "message": "Getting employee failed", "statusCode": 500
        }))
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    store: web::Data<dyn EmployeeStore>,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let employee_id = path.into_inner();

    match store.find_by_id(&employee_id).await {
        Ok(Some(employee)) => Ok(HttpResponse::Ok().json(employee)),
        Ok(None) => Err(ApiError::store(GET_FAILED, StoreError::NotFound(employee_id))),
        Err(e) => Err(ApiError::store(GET_FAILED, e)),
    }
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/send-data",
    request_body = NewEmployee,
    responses(
        (status = 201, description = "Employee created", body = EmployeeCreatedResponse),
        (status = 500, description = "Duplicate email, missing field or store failure", body = ErrorBody, example = json!({
            "message": "Creating new employee failed", "statusCode": 500
        }))
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    store: web::Data<dyn EmployeeStore>,
    payload: web::Json<NewEmployee>,
) -> Result<impl Responder, ApiError> {
    let employee = store
        .insert(payload.into_inner())
        .await
        .map_err(|e| ApiError::store(CREATE_FAILED, e))?;

    info!(employee_id = %employee.id, "Employee created");
    Ok(HttpResponse::Created().json(EmployeeCreatedResponse { employee }))
}

/// Delete Employee
#[utoipa::path(
    delete,
    path = "/delete/{id}",
    params(
        ("id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Deleted", body = String, example = json!("Delete successfully")),
        (status = 500, description = "Unknown id or store failure", body = ErrorBody, example = json!({
            "message": "Deleting employee failed", "statusCode": 500
        }))
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    store: web::Data<dyn EmployeeStore>,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let employee_id = path.into_inner();

    store
        .remove_by_id(&employee_id)
        .await
        .map_err(|e| ApiError::store(DELETE_FAILED, e))?;

    info!(employee_id = %employee_id, "Employee deleted");
    Ok(plain_text("Delete successfully"))
}

/// Update Employee
#[utoipa::path(
    patch,
    path = "/update",
    request_body = UpdateEmployee,
    responses(
        (status = 200, description = "Updated", body = String, example = json!("Update successfully")),
        (status = 500, description = "Unknown id, duplicate email or store failure", body = ErrorBody, example = json!({
            "message": "Updating employee failed", "statusCode": 500
        }))
    ),
    tag = "Employee"
)]
pub async fn update_employee(
    store: web::Data<dyn EmployeeStore>,
    body: web::Json<UpdateEmployee>,
) -> Result<impl Responder, ApiError> {
    let UpdateEmployee { id, fields } = body.into_inner();

    store
        .update_by_id(&id, fields)
        .await
        .map_err(|e| ApiError::store(UPDATE_FAILED, e))?;

    info!(employee_id = %id, "Employee updated");
    Ok(plain_text("Update successfully"))
}
