//! Data access layer. Each repository borrows the shared pool and issues plain
//! SQL against one table family.

pub mod order_repository;
pub mod product_repository;
pub mod user_repository;

/// Whether a repository error came from a UNIQUE constraint.
pub fn is_unique_violation(err: &anyhow::Error) -> bool {
    match err.downcast_ref::<sqlx::Error>() {
        Some(sqlx::Error::Database(db_err)) => db_err.is_unique_violation(),
        _ => false,
    }
}

/// Whether a repository error came from a FOREIGN KEY constraint.
pub fn is_foreign_key_violation(err: &anyhow::Error) -> bool {
    match err.downcast_ref::<sqlx::Error>() {
        Some(sqlx::Error::Database(db_err)) => db_err.is_foreign_key_violation(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_are_not_unique_violations() {
        assert!(!is_unique_violation(&anyhow::Error::from(
            sqlx::Error::RowNotFound
        )));
        assert!(!is_unique_violation(&anyhow::anyhow!("connection reset")));
        assert!(!is_foreign_key_violation(&anyhow::anyhow!("connection reset")));
    }
}
