use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// JWT token claims
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,   // Subject (user id, decimal string)
    pub email: String, // User email
    pub exp: usize,    // Expiration time
    pub iat: usize,    // Issued at
    pub jti: String,   // JWT ID
}

/// Authentication request models
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Authentication response models
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: usize,
    pub user: UserInfo,
}

#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: i64,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Resolved identity for an authenticated request, inserted into request
/// extensions by the JWT middleware.
#[derive(Debug, Clone)]
pub struct UserSession {
    pub user_id: i64,
    pub email: String,
    pub jti: String,
}

impl UserSession {
    pub fn from_claims(claims: &Claims) -> Result<Self, std::num::ParseIntError> {
        Ok(Self {
            user_id: claims.sub.parse()?,
            email: claims.email.clone(),
            jti: claims.jti.clone(),
        })
    }
}
