use derive_more::Display;

/// Failure kinds reported by an [`EmployeeStore`](super::EmployeeStore).
///
/// The HTTP layer flattens all of them into one response; the distinction is
/// kept for logs and tests.
#[derive(Debug, Display, PartialEq, Eq)]
pub enum StoreError {
    /// A required field was blank or a unique field was already taken.
    #[display(fmt = "constraint violation: {}", _0)]
    ConstraintViolation(String),

    #[display(fmt = "employee `{}` not found", _0)]
    NotFound(String),

    /// The store could not be reached.
    #[display(fmt = "store unavailable: {}", _0)]
    ConnectivityFailure(String),

    #[display(fmt = "store error: {}", _0)]
    Backend(String),
}

impl std::error::Error for StoreError {}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            // 23000 covers duplicate keys and NOT NULL violations on MySQL
            sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23000") => {
                StoreError::ConstraintViolation(db_err.message().to_string())
            }
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => StoreError::ConnectivityFailure(e.to_string()),
            _ => StoreError::Backend(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_failures_are_connectivity_errors() {
        assert!(matches!(
            StoreError::from(sqlx::Error::PoolTimedOut),
            StoreError::ConnectivityFailure(_)
        ));
        assert!(matches!(
            StoreError::from(sqlx::Error::RowNotFound),
            StoreError::Backend(_)
        ));
    }

    #[test]
    fn display_names_the_id() {
        let e = StoreError::NotFound("abc".into());
        assert_eq!(e.to_string(), "employee `abc` not found");
    }
}
