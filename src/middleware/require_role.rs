//! Bearer token verification plus the role gate.
//!
//! Every protected route group is wrapped by this middleware with the role
//! it requires. The split is:
//! - no header / malformed header / failed verification → 401
//! - verified token whose role claim is not the required one → 403

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::error::AppError;
use crate::repos::user_repo::Role;
use crate::state::AppState;

/// Gate every route currently on `router` behind `role`.
///
/// Applied with `route_layer` so an unmatched path still returns 404, not 401.
pub fn require(router: Router<AppState>, state: AppState, role: Role) -> Router<AppState> {
    router.route_layer(middleware::from_fn_with_state((state, role), require_role))
}

async fn require_role(
    State((state, required)): State<(AppState, Role)>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let auth = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    let token = auth.strip_prefix("Bearer ").ok_or(AppError::Unauthorized)?;

    let claims = match state.auth.verify(token) {
        Ok(claims) => claims,
        Err(err) => {
            tracing::warn!(error = ?err, "access token verification failed");
            return Err(AppError::Unauthorized);
        }
    };

    // Exact match: a writer token does not satisfy a reader route.
    if claims.role != required {
        return Err(AppError::Forbidden);
    }

    Ok(next.run(req).await)
}
