use futures::future::{BoxFuture, FutureExt, ready};
use parking_lot::RwLock;

use super::{EmployeeStore, StoreError, StoreResult, new_id};
use crate::model::employee::{Employee, EmployeePatch, NewEmployee};

/// Process-local store. Keeps insertion order and the unique-email rule,
/// loses everything on exit.
#[derive(Default)]
pub struct MemoryEmployeeStore {
    records: RwLock<Vec<Employee>>,
}

impl MemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn email_taken(records: &[Employee], email: &str, except_id: Option<&str>) -> bool {
        records
            .iter()
            .any(|e| e.email == email && Some(e.id.as_str()) != except_id)
    }

    fn insert_sync(&self, attrs: NewEmployee) -> StoreResult<Employee> {
        attrs.validate()?;

        let mut records = self.records.write();
        if Self::email_taken(&records, &attrs.email, None) {
            return Err(StoreError::ConstraintViolation(format!(
                "email `{}` already exists",
                attrs.email
            )));
        }

        let employee = attrs.into_employee(new_id());
        records.push(employee.clone());
        Ok(employee)
    }

    fn remove_sync(&self, id: &str) -> StoreResult<()> {
        let mut records = self.records.write();
        let index = records
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        records.remove(index);
        Ok(())
    }

    fn update_sync(&self, id: &str, patch: EmployeePatch) -> StoreResult<()> {
        patch.validate()?;

        let mut records = self.records.write();
        if let Some(email) = &patch.email {
            if Self::email_taken(&records, email, Some(id)) {
                return Err(StoreError::ConstraintViolation(format!(
                    "email `{email}` already exists"
                )));
            }
        }

        let employee = records
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        patch.apply_to(employee);
        Ok(())
    }
}

impl EmployeeStore for MemoryEmployeeStore {
    fn find_all(&self) -> BoxFuture<'_, StoreResult<Vec<Employee>>> {
        ready(Ok(self.records.read().clone())).boxed()
    }

    fn find_by_id<'a>(&'a self, id: &'a str) -> BoxFuture<'a, StoreResult<Option<Employee>>> {
        let found = self.records.read().iter().find(|e| e.id == id).cloned();
        ready(Ok(found)).boxed()
    }

    fn insert(&self, attrs: NewEmployee) -> BoxFuture<'_, StoreResult<Employee>> {
        ready(self.insert_sync(attrs)).boxed()
    }

    fn remove_by_id<'a>(&'a self, id: &'a str) -> BoxFuture<'a, StoreResult<()>> {
        ready(self.remove_sync(id)).boxed()
    }

    fn update_by_id<'a>(
        &'a self,
        id: &'a str,
        patch: EmployeePatch,
    ) -> BoxFuture<'a, StoreResult<()>> {
        ready(self.update_sync(id, patch)).boxed()
    }

    fn close(&self) -> BoxFuture<'_, ()> {
        ready(()).boxed()
    }
}
