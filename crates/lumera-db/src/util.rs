use sea_orm::{DbErr, TransactionError, UpdateResult};
use std::error::Error;

pub trait FlattenTransactionResultExt<T> {
    fn flatten_res(self) -> T;
}

impl<T, E> FlattenTransactionResultExt<Result<T, E>> for Result<T, TransactionError<E>>
where
    E: From<DbErr> + Error,
{
    fn flatten_res(self) -> Result<T, E> {
        self.map_err(|err| match err {
            TransactionError::Connection(err) => err.into(),
            TransactionError::Transaction(err) => err,
        })
    }
}

pub trait RequireRecord<T> {
    fn require(self) -> Result<T, DbErr>;
}

impl<T> RequireRecord<T> for Result<Option<T>, DbErr> {
    fn require(self) -> Result<T, DbErr> {
        self?.ok_or_else(|| DbErr::RecordNotFound("record not found".to_string()))
    }
}

/// Reports whether a version-guarded update hit its row.
pub trait Applied {
    fn applied(self) -> Result<bool, DbErr>;
}

impl Applied for Result<UpdateResult, DbErr> {
    fn applied(self) -> Result<bool, DbErr> {
        Ok(self?.rows_affected > 0)
    }
}
