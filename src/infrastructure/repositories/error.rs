use crate::domain::errors::DomainError;

pub(super) fn map_sqlx(err: sqlx::Error) -> DomainError {
    match err {
        sqlx::Error::RowNotFound => DomainError::NotFound("row not found".into()),
        other => DomainError::Persistence(other.to_string()),
    }
}
