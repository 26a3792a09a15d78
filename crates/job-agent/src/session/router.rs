use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use tracing::info;

use super::domain::{Session, SessionToken, User, WelcomeView};
use super::provider::{SessionError, SessionIssuer};

#[derive(Debug, Serialize)]
pub struct SessionView {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub welcome: Option<WelcomeView>,
}

impl From<&Session> for SessionView {
    fn from(session: &Session) -> Self {
        Self {
            authenticated: session.is_authenticated(),
            user: session.current_user().cloned(),
            welcome: session.welcome(),
        }
    }
}

/// Router builder exposing session lookup, demo sign-in, and logout.
pub fn session_router<P>(provider: Arc<P>) -> Router
where
    P: SessionIssuer + 'static,
{
    Router::new()
        .route(
            "/api/v1/session",
            get(current_handler::<P>).post(sign_in_handler::<P>),
        )
        .route("/api/v1/session/logout", post(logout_handler::<P>))
        .with_state(provider)
}

/// Extracts the token from `Authorization: Bearer <token>`.
pub fn bearer_token(headers: &HeaderMap) -> Option<SessionToken> {
    let raw = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = raw.strip_prefix("Bearer ")?.trim();
    (!token.is_empty()).then(|| SessionToken(token.to_string()))
}

pub(crate) async fn current_handler<P>(State(provider): State<Arc<P>>, headers: HeaderMap) -> Response
where
    P: SessionIssuer + 'static,
{
    let token = bearer_token(&headers);
    match provider.session(token.as_ref()) {
        Ok(session) => (StatusCode::OK, Json(SessionView::from(&session))).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn sign_in_handler<P>(
    State(provider): State<Arc<P>>,
    Json(user): Json<User>,
) -> Response
where
    P: SessionIssuer + 'static,
{
    let user = match user.validated() {
        Ok(user) => user,
        Err(error) => return error_response(error),
    };

    match provider.sign_in(user.clone()) {
        Ok(token) => {
            info!(email = %user.email, "session started");
            let session = Session::for_user(user);
            let payload = json!({
                "token": token,
                "session": SessionView::from(&session),
            });
            (StatusCode::CREATED, Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn logout_handler<P>(State(provider): State<Arc<P>>, headers: HeaderMap) -> Response
where
    P: SessionIssuer + 'static,
{
    let Some(token) = bearer_token(&headers) else {
        return StatusCode::NO_CONTENT.into_response();
    };

    match provider.logout(&token) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: SessionError) -> Response {
    let status = match error {
        SessionError::Expired => StatusCode::UNAUTHORIZED,
        SessionError::InvalidUser(_) => StatusCode::BAD_REQUEST,
        SessionError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
    };
    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}
