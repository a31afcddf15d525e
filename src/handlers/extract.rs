use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::{catalog::CatalogSpec, error::AppError, logging, AppState};

/// The `{id}` path segment of a record route, already parsed.
///
/// Only plain decimal digits are accepted. Anything else (signs, blanks,
/// fractions) is rejected as [`AppError::MalformedIdentifier`] before the
/// handler runs, which the client sees as an unmatched route. Digit strings
/// too large for `u64` are still integers: they carry no `value` and miss
/// like any other unknown id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordId {
    pub raw: String,
    pub value: Option<u64>,
}

#[async_trait]
impl<C: CatalogSpec> FromRequestParts<AppState<C>> for RecordId {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<C>,
    ) -> Result<Self, Self::Rejection> {
        let raw = match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(raw)) => raw,
            Err(rejection) => {
                let reason = rejection.body_text();
                logging::rejected_id(C::SERVICE_NAME, parts.uri.path(), &reason);
                return Err(AppError::MalformedIdentifier(reason));
            }
        };

        match parse_id(&raw) {
            Some(value) => Ok(RecordId { raw, value }),
            None => {
                logging::rejected_id(C::SERVICE_NAME, parts.uri.path(), &raw);
                Err(AppError::MalformedIdentifier(raw))
            }
        }
    }
}

/// `None` for non-integers, `Some(None)` for integers beyond `u64`.
fn parse_id(raw: &str) -> Option<Option<u64>> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(raw.parse().ok())
}
