pub mod auth_service;
pub mod customer_details_service;
pub mod product_category_service;
pub mod product_order_service;
pub mod product_service;
pub mod shopping_cart_service;

use sea_orm::{DbErr, SqlErr};

use crate::error::AppError;

/// `update` on a vanished row reports `RecordNotUpdated`; surface it as 404.
pub(crate) fn not_found_on_missing(err: DbErr) -> AppError {
    match err {
        DbErr::RecordNotUpdated => AppError::NotFound,
        other => AppError::OrmError(other),
    }
}

/// A unique-index violation becomes a 400 with `message`.
pub(crate) fn bad_request_on_conflict(err: DbErr, message: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::debug!(%detail, "unique constraint violated");
            AppError::BadRequest(message.to_string())
        }
        _ => not_found_on_missing(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_row_on_update_is_not_found() {
        assert!(matches!(
            not_found_on_missing(DbErr::RecordNotUpdated),
            AppError::NotFound
        ));
    }

    #[test]
    fn other_errors_stay_server_errors() {
        let err = bad_request_on_conflict(DbErr::Custom("boom".into()), "name is taken");
        assert!(matches!(err, AppError::OrmError(_)));
    }
}
