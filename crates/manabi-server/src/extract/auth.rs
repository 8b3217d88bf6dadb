//! JWT authentication extractors.
//!
//! [`AuthHeader`] validates the Bearer token signature and claims,
//! [`AuthState`] additionally verifies that the token subject is a registered
//! user. Handlers that operate on user-owned data should prefer [`AuthState`];
//! the profile registration endpoint uses [`AuthHeader`] because the user row
//! does not exist yet at that point.

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;
use axum_extra::typed_header::TypedHeaderRejectionReason;
use derive_more::Deref;
use jiff::Timestamp;
use jsonwebtoken::errors::{Error as JwtError, ErrorKind as JwtErrorKind};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use manabi_postgres::PgClient;
use manabi_postgres::query::UserRepository;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::TRACING_TARGET_AUTHENTICATION;
use crate::handler::{Error, ErrorKind, Result};
use crate::service::AuthKeys;

/// JWT claims for authentication tokens.
///
/// Contains the RFC 7519 registered claims this service relies on. The `iat`
/// and `exp` claims are carried as Unix timestamps in seconds, as required
/// for numeric date validation.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct AuthClaims {
    /// Issuer (who created the token).
    #[serde(rename = "iss")]
    issued_by: String,
    /// Audience (who the token is intended for).
    #[serde(rename = "aud")]
    audience: String,

    /// JWT ID (unique identifier for the token).
    #[serde(rename = "jti")]
    pub token_id: Uuid,
    /// Subject ID (unique identifier of the associated user).
    #[serde(rename = "sub")]
    pub user_id: Uuid,

    /// Issued at (Unix timestamp, seconds).
    #[serde(rename = "iat")]
    issued_at: i64,
    /// Expiration time (Unix timestamp, seconds).
    #[serde(rename = "exp")]
    expires_at: i64,
}

impl AuthClaims {
    /// Default JWT audience identifier for authentication tokens.
    const JWT_AUDIENCE: &str = "manabi:server";
    /// Default JWT issuer identifier for authentication tokens.
    const JWT_ISSUER: &str = "manabi";

    /// Returns the token issue time.
    #[must_use]
    pub fn issued_at(&self) -> Timestamp {
        Timestamp::from_second(self.issued_at).unwrap_or(Timestamp::UNIX_EPOCH)
    }

    /// Returns the token expiration time.
    #[must_use]
    pub fn expires_at(&self) -> Timestamp {
        Timestamp::from_second(self.expires_at).unwrap_or(Timestamp::UNIX_EPOCH)
    }

    /// Checks if the token has expired based on current UTC time.
    #[inline]
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Timestamp::now().as_second()
    }

    /// Parses and validates a JWT token from an Authorization header.
    ///
    /// # Errors
    ///
    /// Returns authentication errors for tokens with an invalid signature,
    /// missing claims, a foreign issuer or audience, or an elapsed expiry.
    fn from_header(
        auth_header: TypedHeader<Authorization<Bearer>>,
        decoding_key: &DecodingKey,
    ) -> Result<Self> {
        let auth_token = auth_header.token();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.validate_aud = true;
        validation.set_audience(&[Self::JWT_AUDIENCE]);
        validation.set_issuer(&[Self::JWT_ISSUER]);
        validation.set_required_spec_claims(&["iss", "aud", "jti", "sub", "iat", "exp"]);

        let token_data = decode::<Self>(auth_token, decoding_key, &validation)?;
        let claims = token_data.claims;

        tracing::debug!(
            target: TRACING_TARGET_AUTHENTICATION,
            token_id = %claims.token_id,
            user_id = %claims.user_id,
            expires_at = %claims.expires_at(),
            "JWT token validated"
        );

        Ok(claims)
    }
}

impl From<JwtError> for Error<'static> {
    fn from(error: JwtError) -> Self {
        match error.kind() {
            JwtErrorKind::ExpiredSignature => ErrorKind::Unauthorized
                .with_message("Your session has expired")
                .with_context("Please sign in again to continue"),
            JwtErrorKind::InvalidSignature => ErrorKind::Unauthorized
                .with_message("Authentication token verification failed")
                .with_context("Token signature could not be verified"),
            JwtErrorKind::InvalidAudience | JwtErrorKind::InvalidIssuer => ErrorKind::Unauthorized
                .with_message("Authentication token is not valid for this service"),
            JwtErrorKind::MissingRequiredClaim(claim) => ErrorKind::MalformedAuthToken
                .with_message("Authentication token is incomplete")
                .with_context(format!("Token is missing required field: {claim}")),
            JwtErrorKind::InvalidToken | JwtErrorKind::Base64(_) | JwtErrorKind::Json(_) => {
                ErrorKind::MalformedAuthToken
                    .with_message("Authentication token format is invalid")
            }
            _ => ErrorKind::InternalServerError
                .with_message("Authentication processing failed")
                .with_context("An unexpected error occurred during token validation"),
        }
        .with_resource("authentication")
        .into_static()
    }
}

/// JWT authentication header extractor.
///
/// Validates the Bearer token cryptographically but does not consult the
/// database. For full verification use [`AuthState`].
#[must_use]
#[derive(Debug, Clone, Deref)]
pub struct AuthHeader(AuthClaims);

impl AuthHeader {
    /// Returns a reference to the JWT claims.
    #[inline]
    pub const fn as_auth_claims(&self) -> &AuthClaims {
        &self.0
    }

    /// Consumes this header and returns the JWT claims.
    #[inline]
    pub fn into_auth_claims(self) -> AuthClaims {
        self.0
    }
}

impl<S> FromRequestParts<S> for AuthHeader
where
    S: Sync + Send,
    AuthKeys: FromRef<S>,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Return cached header if available to avoid re-parsing
        if let Some(auth_header) = parts.extensions.get::<Self>() {
            return Ok(auth_header.clone());
        }

        type AuthBearerHeader = TypedHeader<Authorization<Bearer>>;
        let auth_keys = AuthKeys::from_ref(state);

        match AuthBearerHeader::from_request_parts(parts, state).await {
            Ok(bearer_header) => {
                let claims = AuthClaims::from_header(bearer_header, auth_keys.decoding_key())?;
                let auth_header = Self(claims);
                // Cache for subsequent extractors in the same request
                parts.extensions.insert(auth_header.clone());
                Ok(auth_header)
            }
            Err(rejection) => {
                let error = match rejection.reason() {
                    TypedHeaderRejectionReason::Missing => ErrorKind::MissingAuthToken
                        .with_message("Authentication required")
                        .with_context("Missing Authorization header with Bearer token")
                        .with_resource("authentication"),
                    _ => ErrorKind::MalformedAuthToken
                        .with_message("Invalid token format")
                        .with_context("Authorization header must contain a valid Bearer token")
                        .with_resource("authentication"),
                };
                Err(error.into_static())
            }
        }
    }
}

/// Authenticated user state with database verification.
///
/// Extraction succeeds only when the Bearer token is valid and its subject
/// corresponds to a registered user profile.
#[must_use]
#[derive(Debug, Clone, Deref, PartialEq, Eq)]
pub struct AuthState(pub AuthClaims);

impl AuthState {
    /// Creates a new [`AuthState`] from pre-verified claims.
    #[inline]
    pub const fn from_verified_claims(auth_claims: AuthClaims) -> Self {
        Self(auth_claims)
    }

    /// Verifies the token subject against the database.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::Unauthorized`] if the subject does not exist and
    /// [`ErrorKind::InternalServerError`] for database failures.
    pub async fn from_unverified_header(
        auth_header: AuthHeader,
        pg_client: PgClient,
    ) -> Result<Self> {
        let auth_claims = auth_header.into_auth_claims();

        let mut conn = pg_client.get_connection().await.map_err(|db_error| {
            tracing::error!(
                target: TRACING_TARGET_AUTHENTICATION,
                error = %db_error,
                user_id = %auth_claims.user_id,
                "Database connection failed during authentication verification"
            );
            ErrorKind::InternalServerError
                .with_message("Authentication verification is temporarily unavailable")
        })?;

        let user_exists = conn.user_exists(auth_claims.user_id).await.map_err(|db_error| {
            tracing::error!(
                target: TRACING_TARGET_AUTHENTICATION,
                error = %db_error,
                user_id = %auth_claims.user_id,
                "Database error occurred during user verification query"
            );
            ErrorKind::InternalServerError
                .with_message("Authentication verification encountered an error")
        })?;

        if !user_exists {
            tracing::warn!(
                target: TRACING_TARGET_AUTHENTICATION,
                user_id = %auth_claims.user_id,
                token_id = %auth_claims.token_id,
                "Authentication failed: token subject is not a registered user"
            );
            return Err(ErrorKind::Unauthorized
                .with_message("User profile not found")
                .with_context("Register a profile before accessing this resource")
                .with_resource("authentication"));
        }

        Ok(Self::from_verified_claims(auth_claims))
    }
}

impl<S> FromRequestParts<S> for AuthState
where
    S: Sync + Send + 'static,
    PgClient: FromRef<S>,
    AuthKeys: FromRef<S>,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Check for cached auth state to avoid repeated database queries
        if let Some(auth_state) = parts.extensions.get::<Self>() {
            return Ok(auth_state.clone());
        }

        let auth_header = AuthHeader::from_request_parts(parts, state).await?;
        let pg_client = PgClient::from_ref(state);
        let auth_state = Self::from_unverified_header(auth_header, pg_client).await?;

        // Cache the verified state for subsequent extractors in the same request
        parts.extensions.insert(auth_state.clone());
        Ok(auth_state)
    }
}

#[cfg(test)]
mod tests {
    use jsonwebtoken::{Header, encode};

    use super::*;
    use crate::service::AuthKeys;

    fn claims_for(user_id: Uuid) -> AuthClaims {
        let now = Timestamp::now().as_second();
        AuthClaims {
            issued_by: AuthClaims::JWT_ISSUER.to_owned(),
            audience: AuthClaims::JWT_AUDIENCE.to_owned(),
            token_id: Uuid::new_v4(),
            user_id,
            issued_at: now,
            expires_at: now + 3600,
        }
    }

    fn bearer_header(claims: &AuthClaims, keys: &AuthKeys) -> TypedHeader<Authorization<Bearer>> {
        let header = Header::new(Algorithm::HS256);
        let token = encode(&header, claims, keys.encoding_key()).unwrap();
        TypedHeader(Authorization::bearer(&token).unwrap())
    }

    #[test]
    fn claims_round_trip_through_token() {
        let keys = AuthKeys::from_secret(&[7u8; 32]);
        let claims = claims_for(Uuid::new_v4());

        let header = bearer_header(&claims, &keys);
        let decoded = AuthClaims::from_header(header, keys.decoding_key()).unwrap();

        assert_eq!(decoded, claims);
        assert!(!decoded.is_expired());
    }

    #[test]
    fn foreign_signature_is_rejected() {
        let keys = AuthKeys::from_secret(&[7u8; 32]);
        let other_keys = AuthKeys::from_secret(&[8u8; 32]);
        let claims = claims_for(Uuid::new_v4());

        let header = bearer_header(&claims, &keys);
        let result = AuthClaims::from_header(header, other_keys.decoding_key());

        assert!(result.is_err());
    }
}
