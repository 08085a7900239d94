use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::CookieJar;

use crate::error::{AppError, Result};
use crate::middleware::auth::{create_session_cookie, get_session_token, remove_session_cookie};
use crate::middleware::OptionalAuthUser;
use crate::models::{CreateUser, LoginCredentials};
use crate::repositories::{SessionRepository, UserRepository};

#[derive(Clone)]
pub struct AuthState {
    pub user_repo: UserRepository,
    pub session_repo: SessionRepository,
}

// Templates
#[derive(Template)]
#[template(path = "auth/login.html")]
struct LoginTemplate {
    error: Option<String>,
    email: String,
}

#[derive(Template)]
#[template(path = "auth/register.html")]
struct RegisterTemplate {
    error: Option<String>,
    email: String,
}

// Handlers
pub async fn login_page(OptionalAuthUser(auth_user): OptionalAuthUser) -> Result<Response> {
    // Redirect to the log if already signed in
    if auth_user.is_some() {
        return Ok(Redirect::to("/").into_response());
    }

    let template = LoginTemplate {
        error: None,
        email: String::new(),
    };
    Ok(Html(
        template
            .render()
            .map_err(|e| AppError::Internal(e.to_string()))?,
    )
    .into_response())
}

pub async fn login_submit(
    State(state): State<AuthState>,
    jar: CookieJar,
    Form(credentials): Form<LoginCredentials>,
) -> Result<Response> {
    let user = state
        .user_repo
        .verify_password(&credentials.email, &credentials.password)
        .await?;

    match user {
        Some(user) => {
            let token = state.session_repo.create(&user.id).await?;
            let jar = jar.add(create_session_cookie(&token));
            Ok((jar, Redirect::to("/")).into_response())
        }
        None => {
            let template = LoginTemplate {
                error: Some("Invalid email or password".to_string()),
                email: credentials.email,
            };
            Ok(Html(
                template
                    .render()
                    .map_err(|e| AppError::Internal(e.to_string()))?,
            )
            .into_response())
        }
    }
}

pub async fn register_page(OptionalAuthUser(auth_user): OptionalAuthUser) -> Result<Response> {
    if auth_user.is_some() {
        return Ok(Redirect::to("/").into_response());
    }

    let template = RegisterTemplate {
        error: None,
        email: String::new(),
    };
    Ok(Html(
        template
            .render()
            .map_err(|e| AppError::Internal(e.to_string()))?,
    )
    .into_response())
}

pub async fn register_submit(
    State(state): State<AuthState>,
    jar: CookieJar,
    Form(form): Form<CreateUser>,
) -> Result<Response> {
    // Validate input
    if form.email.trim().is_empty() {
        let template = RegisterTemplate {
            error: Some("Email is required".to_string()),
            email: form.email,
        };
        return Ok(Html(
            template
                .render()
                .map_err(|e| AppError::Internal(e.to_string()))?,
        )
        .into_response());
    }

    if form.password.len() < 6 {
        let template = RegisterTemplate {
            error: Some("Password must be at least 6 characters".to_string()),
            email: form.email,
        };
        return Ok(Html(
            template
                .render()
                .map_err(|e| AppError::Internal(e.to_string()))?,
        )
        .into_response());
    }

    // Check if the email is already taken
    if state.user_repo.find_by_email(&form.email).await?.is_some() {
        let template = RegisterTemplate {
            error: Some("Email already registered".to_string()),
            email: form.email,
        };
        return Ok(Html(
            template
                .render()
                .map_err(|e| AppError::Internal(e.to_string()))?,
        )
        .into_response());
    }

    let user = state.user_repo.create(&form.email, &form.password).await?;

    // Auto login
    let token = state.session_repo.create(&user.id).await?;
    let jar = jar.add(create_session_cookie(&token));

    Ok((jar, Redirect::to("/")).into_response())
}

pub async fn logout(State(state): State<AuthState>, jar: CookieJar) -> Result<Response> {
    if let Some(token) = get_session_token(&jar) {
        state.session_repo.delete(&token).await?;
    }

    let jar = jar.add(remove_session_cookie());
    Ok((jar, Redirect::to("/auth/login")).into_response())
}
