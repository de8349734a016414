//! Request extractors that reject with the service error shape

use std::convert::Infallible;

use axum::{
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
    Json,
};
use serde::{de::DeserializeOwned, Deserialize};

use crate::error::Error;
use crate::trivia::Page;

/// JSON body whose rejections render as [`Error`]
///
/// Malformed JSON or a missing `Content-Type: application/json` is a bad
/// request; well-formed JSON of the wrong shape is unprocessable.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(JsonRejection::JsonDataError(e)) => Err(Error::Unprocessable(e.body_text())),
            Err(rejection) => Err(Error::BadRequest(rejection.body_text())),
        }
    }
}

/// Integer id from the single path parameter
///
/// Anything that is not an integer does not name a resource, so it is
/// reported as not found.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub i64);

impl<S: Send + Sync> FromRequestParts<S> for IdPath {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<i64>::from_request_parts(parts, state)
            .await
            .map(|Path(id)| Self(id))
            .map_err(|rejection| {
                tracing::debug!(path = %parts.uri.path(), "Unmatched id: {}", rejection);
                Error::NotFound("resource not found".to_string())
            })
    }
}

#[derive(Debug, Deserialize)]
struct PageQuery {
    page: Option<String>,
}

/// The `page` query parameter, never rejected
#[derive(Debug, Clone, Copy, Default)]
pub struct PageParam(pub Page);

impl<S: Send + Sync> FromRequestParts<S> for PageParam {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = Query::<PageQuery>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(query)| query.page);

        Ok(Self(Page::parse(raw.as_deref())))
    }
}
