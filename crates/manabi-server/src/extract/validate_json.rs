//! JSON extractor with automatic request validation.

use axum::Json;
use axum::extract::{FromRequest, Request};
use derive_more::{Deref, DerefMut, From};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::handler::{Error, ErrorKind};

/// JSON extractor that validates the deserialized payload.
///
/// Works with any type implementing both [`serde::Deserialize`] and
/// [`validator::Validate`]. Validation failures are reported as bad requests
/// with the offending fields in the error context.
#[must_use]
#[derive(Debug, Clone, Copy, Default, Deref, DerefMut, From)]
pub struct ValidateJson<T>(pub T);

impl<T> ValidateJson<T> {
    /// Returns the inner validated value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate + 'static,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await.map_err(|e| {
            ErrorKind::BadRequest
                .with_message("Request body contains malformed JSON")
                .with_context(e.body_text())
                .with_resource("request")
                .into_static()
        })?;

        data.validate()?;
        Ok(Self(data))
    }
}

impl From<ValidationErrors> for Error<'static> {
    fn from(errors: ValidationErrors) -> Self {
        let failed_fields = errors
            .field_errors()
            .iter()
            .map(|(field, field_errors)| {
                let codes = field_errors
                    .iter()
                    .map(|error| error.code.as_ref())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{field} ({codes})")
            })
            .collect::<Vec<_>>()
            .join("; ");

        tracing::warn!(
            errors = ?errors.field_errors(),
            "Request validation failed"
        );

        ErrorKind::BadRequest
            .with_message("Request validation failed")
            .with_context(failed_fields)
            .with_resource("request")
            .into_static()
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize, Validate)]
    struct SampleRequest {
        #[validate(length(min = 1, max = 8))]
        name: String,
    }

    #[test]
    fn validation_errors_map_to_bad_request() {
        let request = SampleRequest {
            name: "far-too-long-for-the-limit".into(),
        };

        let errors = request.validate().unwrap_err();
        let error = Error::from(errors);

        assert_eq!(error.kind(), ErrorKind::BadRequest);
        assert!(error.context().is_some_and(|ctx| ctx.contains("name")));
    }
}
