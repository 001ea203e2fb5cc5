use futures::future::{BoxFuture, FutureExt};
use sqlx::MySqlPool;
use tracing::debug;

use super::{EmployeeStore, StoreError, StoreResult, new_id};
use crate::{
    model::employee::{Employee, EmployeePatch, NewEmployee},
    utils::db_utils::{build_update_sql, execute_update},
};

const SELECT_EMPLOYEE: &str =
    "SELECT id, name, email, phone, position, picture, salary FROM employees";

/// Durable store over the `employees` table (see `migrations/`).
pub struct MySqlEmployeeStore {
    pool: MySqlPool,
}

impl MySqlEmployeeStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn exists(&self, id: &str) -> StoreResult<bool> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employees WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }

    async fn find_all_impl(&self) -> StoreResult<Vec<Employee>> {
        let sql = format!("{SELECT_EMPLOYEE} ORDER BY seq");
        let employees = sqlx::query_as::<_, Employee>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(employees)
    }

    async fn find_by_id_impl(&self, id: &str) -> StoreResult<Option<Employee>> {
        let sql = format!("{SELECT_EMPLOYEE} WHERE id = ?");
        let employee = sqlx::query_as::<_, Employee>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(employee)
    }

    async fn insert_impl(&self, attrs: NewEmployee) -> StoreResult<Employee> {
        attrs.validate()?;
        let employee = attrs.into_employee(new_id());

        sqlx::query(
            r#"
            INSERT INTO employees
            (id, name, email, phone, position, picture, salary)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&employee.id)
        .bind(&employee.name)
        .bind(&employee.email)
        .bind(&employee.phone)
        .bind(&employee.position)
        .bind(&employee.picture)
        .bind(&employee.salary)
        .execute(&self.pool)
        .await?;

        debug!(employee_id = %employee.id, "Employee inserted");
        Ok(employee)
    }

    async fn remove_by_id_impl(&self, id: &str) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    async fn update_by_id_impl(&self, id: &str, patch: EmployeePatch) -> StoreResult<()> {
        patch.validate()?;

        let Some(update) = build_update_sql("employees", &patch.fields(), "id", id) else {
            return if self.exists(id).await? {
                Ok(())
            } else {
                Err(StoreError::NotFound(id.to_string()))
            };
        };
        debug!(sql = %update.sql, employee_id = id, "Updating employee");

        let affected = execute_update(&self.pool, update).await?;

        // MySQL reports 0 rows when the new values equal the old ones
        if affected == 0 && !self.exists(id).await? {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

impl EmployeeStore for MySqlEmployeeStore {
    fn find_all(&self) -> BoxFuture<'_, StoreResult<Vec<Employee>>> {
        self.find_all_impl().boxed()
    }

    fn find_by_id<'a>(&'a self, id: &'a str) -> BoxFuture<'a, StoreResult<Option<Employee>>> {
        self.find_by_id_impl(id).boxed()
    }

    fn insert(&self, attrs: NewEmployee) -> BoxFuture<'_, StoreResult<Employee>> {
        self.insert_impl(attrs).boxed()
    }

    fn remove_by_id<'a>(&'a self, id: &'a str) -> BoxFuture<'a, StoreResult<()>> {
        self.remove_by_id_impl(id).boxed()
    }

    fn update_by_id<'a>(
        &'a self,
        id: &'a str,
        patch: EmployeePatch,
    ) -> BoxFuture<'a, StoreResult<()>> {
        self.update_by_id_impl(id, patch).boxed()
    }

    fn close(&self) -> BoxFuture<'_, ()> {
        self.pool.close().boxed()
    }
}
