use std::marker::PhantomData;

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::{db::entities::RecordId, error::AppError};

/// A resource addressed by `{id}`, with the message used when no record matches.
pub trait RecordResource {
    const NOT_FOUND: &'static str;
}

/// Single `{id}` path segment. Anything that is not a positive integer
/// cannot name a stored record, so it is rejected with the resource's
/// not-found message.
pub struct PathId<R>(pub RecordId, pub PhantomData<R>);

impl<S, R> FromRequestParts<S> for PathId<R>
where
    S: Send + Sync,
    R: RecordResource + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::not_found(R::NOT_FOUND))?;
        parse_record_id(&raw)
            .map(|id| PathId(id, PhantomData))
            .ok_or_else(|| AppError::not_found(R::NOT_FOUND))
    }
}

pub fn parse_record_id(raw: &str) -> Option<RecordId> {
    raw.trim().parse::<RecordId>().ok().filter(|id| *id > 0)
}
