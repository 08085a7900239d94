use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::repositories::{SessionRepository, UserRepository};

pub const SESSION_COOKIE_NAME: &str = "session";

pub fn create_session_cookie(token: &str) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, token.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::days(7))
        .build()
}

pub fn remove_session_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, ""))
        .path("/")
        .max_age(time::Duration::ZERO)
        .build()
}

pub fn get_session_token(jar: &CookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE_NAME)
        .map(|cookie| cookie.value().to_string())
}

/// Resolves session cookies to users. Attached to the router as an
/// extension so the extractors below can reach the repositories.
#[derive(Clone)]
pub struct SessionContext {
    user_repo: UserRepository,
    session_repo: SessionRepository,
}

impl SessionContext {
    pub fn new(user_repo: UserRepository, session_repo: SessionRepository) -> Self {
        Self {
            user_repo,
            session_repo,
        }
    }

    async fn resolve(&self, jar: &CookieJar) -> Option<AuthUser> {
        let token = get_session_token(jar)?;
        let user_id = self.session_repo.find_valid(&token).await.ok()??;
        let user = self.user_repo.find_by_id(&user_id).await.ok()??;
        Some(AuthUser {
            id: user.id,
            email: user.email,
        })
    }
}

/// The signed-in user, resolved from the session cookie. Handlers receive
/// this as an argument; none of them read session state any other way.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AuthRedirect;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let ctx = parts
            .extensions
            .get::<SessionContext>()
            .cloned()
            .ok_or(AuthRedirect)?;
        let jar = CookieJar::from_headers(&parts.headers);

        ctx.resolve(&jar).await.ok_or(AuthRedirect)
    }
}

pub struct AuthRedirect;

impl IntoResponse for AuthRedirect {
    fn into_response(self) -> Response {
        Redirect::to("/auth/login").into_response()
    }
}

// Optional auth - doesn't redirect, just carries None when signed out
pub struct OptionalAuthUser(pub Option<AuthUser>);

impl<S> FromRequestParts<S> for OptionalAuthUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(ctx) = parts.extensions.get::<SessionContext>().cloned() else {
            return Ok(OptionalAuthUser(None));
        };
        let jar = CookieJar::from_headers(&parts.headers);

        Ok(OptionalAuthUser(ctx.resolve(&jar).await))
    }
}
