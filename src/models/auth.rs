//! JWT issuing/verification and the actix extractor for
//! [`AuthenticatedUser`].

use std::future::{Ready, ready};

use actix_web::http::StatusCode;
use actix_web::http::header;
use actix_web::{FromRequest, HttpRequest, HttpResponse, ResponseError, dev::Payload, web};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde_json::json;
use thiserror::Error;

use crate::domain::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("No token provided")]
    MissingToken,
    #[error("Invalid or expired token")]
    InvalidToken,
    #[error("Server configuration missing")]
    Misconfigured,
}

impl ResponseError for AuthError {
    fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Misconfigured => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

/// Signs the claims with the server secret (HS256).
pub fn issue_token(
    claims: &AuthenticatedUser,
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Verifies signature and expiry and returns the embedded claims.
pub fn decode_token(
    token: &str,
    secret: &str,
) -> Result<AuthenticatedUser, jsonwebtoken::errors::Error> {
    let data = decode::<AuthenticatedUser>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )?;
    Ok(data.claims)
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, AuthError> {
    let config = req
        .app_data::<web::Data<ServerConfig>>()
        .ok_or(AuthError::Misconfigured)?;

    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(AuthError::MissingToken)?;

    decode_token(token, &config.secret).map_err(|_| AuthError::InvalidToken)
}

impl FromRequest for AuthenticatedUser {
    type Error = AuthError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::auth::AuthenticatedUser;
    use crate::domain::user::UserRole;

    fn claims(exp: i64) -> AuthenticatedUser {
        AuthenticatedUser {
            sub: 1,
            email: "reader@example.com".into(),
            role: UserRole::User,
            exp,
        }
    }

    #[test]
    fn token_round_trips() {
        let exp = Utc::now().timestamp() + 3600;
        let token = issue_token(&claims(exp), "secret").unwrap();
        let decoded = decode_token(&token, "secret").unwrap();
        assert_eq!(decoded.sub, 1);
        assert_eq!(decoded.role, UserRole::User);
    }

    #[test]
    fn expired_token_is_rejected() {
        let exp = Utc::now().timestamp() - 3600;
        let token = issue_token(&claims(exp), "secret").unwrap();
        assert!(decode_token(&token, "secret").is_err());
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let exp = Utc::now().timestamp() + 3600;
        let token = issue_token(&claims(exp), "secret").unwrap();
        assert!(decode_token(&token, "other").is_err());
    }
}
