use actix_web::HttpResponse;

use crate::auth::middleware::AuthenticatedUser;
use crate::error::ApiError;
use crate::handlers::success;
use crate::models::users::UserResponse;

/// GET /api/auth/me — return the currently authenticated user's profile.
pub async fn me(user: AuthenticatedUser) -> Result<HttpResponse, ApiError> {
    Ok(success(UserResponse::from(user.0)))
}
