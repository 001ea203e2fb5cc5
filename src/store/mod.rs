//! Persistence of employee records.
//!
//! Handlers only see [`EmployeeStore`]; which backend sits behind it is
//! decided once at startup (see `db::init_store`).

use futures::future::BoxFuture;

use crate::model::employee::{Employee, EmployeePatch, NewEmployee};

mod error;
pub mod memory;
pub mod mysql;

pub use error::StoreError;
pub use memory::MemoryEmployeeStore;
pub use mysql::MySqlEmployeeStore;

pub type StoreResult<T> = Result<T, StoreError>;

pub trait EmployeeStore: Send + Sync {
    /// Every record, oldest first.
    fn find_all(&self) -> BoxFuture<'_, StoreResult<Vec<Employee>>>;

    fn find_by_id<'a>(&'a self, id: &'a str) -> BoxFuture<'a, StoreResult<Option<Employee>>>;

    /// Persists a new record under a freshly generated id.
    ///
    /// Fails with [`StoreError::ConstraintViolation`] when a required field is
    /// blank or the email is already in use.
    fn insert(&self, attrs: NewEmployee) -> BoxFuture<'_, StoreResult<Employee>>;

    fn remove_by_id<'a>(&'a self, id: &'a str) -> BoxFuture<'a, StoreResult<()>>;

    /// Overwrites the fields present in `patch`. The id never changes.
    fn update_by_id<'a>(
        &'a self,
        id: &'a str,
        patch: EmployeePatch,
    ) -> BoxFuture<'a, StoreResult<()>>;

    /// Releases the underlying connection handle.
    fn close(&self) -> BoxFuture<'_, ()>;
}

pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
