use crate::api::employee::{EmployeeCreatedResponse, UpdateEmployee};
use crate::api::error::ErrorBody;
use crate::model::employee::{Employee, EmployeePatch, NewEmployee};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee Directory API",
        version = "1.0.0",
        description = r#"
## Employee Directory

Backend of the employee directory app: list, create, update and delete
employee records.

### Response Format
- Success bodies are JSON, except delete and update which answer with a short
  plain-text confirmation.
- Every failure answers `500` with `{ "message": ..., "statusCode": 500 }`.
  The message names the operation that failed and nothing more.
"#,
    ),
    paths(
        crate::api::employee::list_employees,
        crate::api::employee::get_employee,
        crate::api::employee::create_employee,
        crate::api::employee::delete_employee,
        crate::api::employee::update_employee
    ),
    components(
        schemas(
            Employee,
            NewEmployee,
            EmployeePatch,
            UpdateEmployee,
            EmployeeCreatedResponse,
            ErrorBody
        )
    ),
    tags(
        (name = "Employee", description = "Employee record APIs"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for path in ["/", "/employee/{id}", "/send-data", "/delete/{id}", "/update"] {
            assert!(paths.contains(&path), "missing {path}");
        }
    }
}
