use actix_web::FromRequest;
use actix_web::{Error, HttpRequest, dev::Payload, web};
use sea_orm::DatabaseConnection;
use std::future::Future;
use std::pin::Pin;

use crate::auth::jwt;
use crate::db::users::find_or_create_from_auth;
use crate::db::workers::get_worker_by_user_id;
use crate::models::users::{self, CreateUserFromAuth};
use crate::models::workers;

/// Wrapper type storing the JWT secret in Actix app data.
#[derive(Clone)]
pub struct JwtSecret(pub String);

/// Extractor for routes any authenticated user may call.
pub struct AuthenticatedUser(pub users::Model);

/// Extractor for worker-only routes. Fails with 403 if the authenticated
/// user has no worker registration.
pub struct AuthenticatedWorker {
    pub worker: workers::Model,
    pub user: users::Model,
}

async fn authenticate(req: &HttpRequest) -> Result<users::Model, Error> {
    // 1. Extract the Bearer token from the Authorization header.
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| actix_web::error::ErrorUnauthorized("Missing Authorization header"))?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        actix_web::error::ErrorUnauthorized("Authorization header must be: Bearer <token>")
    })?;

    // 2. Validate the JWT against the shared secret.
    let secret = req
        .app_data::<web::Data<JwtSecret>>()
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("JWT secret not configured"))?;

    let claims = jwt::validate_token(token, &secret.0)
        .map_err(|e| actix_web::error::ErrorUnauthorized(format!("Invalid token: {e}")))?;

    // 3. Extract user info from claims.
    let user_id = claims
        .user_id()
        .map_err(actix_web::error::ErrorUnauthorized)?;

    let email = claims
        .email
        .clone()
        .ok_or_else(|| actix_web::error::ErrorUnauthorized("No email in token claims"))?;

    let username = claims
        .preferred_username()
        .ok_or_else(|| actix_web::error::ErrorUnauthorized("No username in token claims"))?;

    // 4. Find or create the user row.
    let db = req
        .app_data::<web::Data<DatabaseConnection>>()
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("Database not configured"))?;

    find_or_create_from_auth(
        db.get_ref(),
        CreateUserFromAuth {
            id: user_id,
            username,
            email,
            first_name: claims.first_name.clone(),
            last_name: claims.last_name.clone(),
        },
    )
    .await
    .map_err(|e| actix_web::error::ErrorInternalServerError(format!("Database error: {e}")))
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move { authenticate(&req).await.map(AuthenticatedUser) })
    }
}

impl FromRequest for AuthenticatedWorker {
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let user = authenticate(&req).await?;

            let db = req
                .app_data::<web::Data<DatabaseConnection>>()
                .ok_or_else(|| {
                    actix_web::error::ErrorInternalServerError("Database not configured")
                })?;

            let worker = get_worker_by_user_id(db.get_ref(), user.id)
                .await
                .map_err(|e| {
                    actix_web::error::ErrorInternalServerError(format!("Database error: {e}"))
                })?
                .ok_or_else(|| {
                    actix_web::error::ErrorForbidden("Not registered as a worker")
                })?;

            Ok(AuthenticatedWorker { worker, user })
        })
    }
}
