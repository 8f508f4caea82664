use axum::{
    Form, Json, Router,
    extract::{FromRequest, FromRequestParts, Request, State},
    http::{StatusCode, header, request::Parts},
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::use_cases::auth::login::{Login as LoginUc, LoginRequest as LoginDto};
use crate::application::use_cases::auth::me::GetMe;
use crate::application::use_cases::auth::register::{
    Register as RegisterUc, RegisterRequest as RegisterDto,
};
use crate::bootstrap::app_context::AppContext;
use crate::domain::users::user::User;
use crate::presentation::http::error::{ApiError, ErrorBody};
use crate::presentation::http::extract::JsonBody;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        UserResponse {
            id: u.id,
            username: u.username,
            created_at: u.created_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
    pub user: UserResponse,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(me))
        .with_state(ctx)
}

#[utoipa::path(post, path = "/register", tag = "Auth", request_body = RegisterRequest, responses(
    (status = 201, body = UserResponse),
    (status = 400, body = ErrorBody),
    (status = 409, body = ErrorBody)
))]
pub async fn register(
    State(ctx): State<AppContext>,
    JsonBody(req): JsonBody<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let repo = ctx.user_repo();
    let uc = RegisterUc {
        repo: repo.as_ref(),
    };
    let dto = RegisterDto {
        username: req.username,
        password: req.password,
    };
    let user = uc.execute(&dto).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

#[utoipa::path(post, path = "/login", tag = "Auth",
    request_body(content = LoginRequest, description = "JSON or application/x-www-form-urlencoded"),
    responses(
        (status = 200, body = LoginResponse),
        (status = 401, body = ErrorBody)
    ))]
pub async fn login(
    State(ctx): State<AppContext>,
    LoginPayload(req): LoginPayload,
) -> Result<Json<LoginResponse>, ApiError> {
    let repo = ctx.user_repo();
    let uc = LoginUc {
        repo: repo.as_ref(),
        tokens: ctx.tokens(),
    };
    let dto = LoginDto {
        username: req.username,
        password: req.password,
    };
    let out = uc.execute(&dto).await?;
    Ok(Json(LoginResponse {
        access_token: out.token.token,
        token_type: "bearer".into(),
        expires_at: out.token.expires_at,
        user: out.user.into(),
    }))
}

#[utoipa::path(get, path = "/me", tag = "Auth", responses(
    (status = 200, body = UserResponse),
    (status = 401, body = ErrorBody)
))]
pub async fn me(
    State(ctx): State<AppContext>,
    bearer: Bearer,
) -> Result<Json<UserResponse>, ApiError> {
    let user = authenticate(&ctx, bearer).await?;
    Ok(Json(user.into()))
}

// --- Bearer extractor & login body ---

pub struct Bearer(pub String);

#[axum::async_trait]
impl<S> FromRequestParts<S> for Bearer
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_bearer)
            .map(Bearer)
            .ok_or_else(|| ApiError::unauthorized("Not authenticated"))
    }
}

fn parse_bearer(value: &str) -> Option<String> {
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();
    if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
        Some(token.to_string())
    } else {
        None
    }
}

/// Verifies the bearer token and loads the account it was issued for.
/// A token whose account no longer exists is rejected like a bad signature.
pub(crate) async fn authenticate(ctx: &AppContext, bearer: Bearer) -> Result<User, ApiError> {
    let user_id = ctx.tokens().verify(&bearer.0)?;
    let repo = ctx.user_repo();
    let uc = GetMe {
        repo: repo.as_ref(),
    };
    Ok(uc.execute(user_id).await?)
}

/// Accepts the credentials either as JSON or as an OAuth2-style password form.
pub struct LoginPayload(pub LoginRequest);

#[axum::async_trait]
impl<S> FromRequest<S> for LoginPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|ct| ct.starts_with("application/x-www-form-urlencoded"))
            .unwrap_or(false);
        if is_form {
            let Form(body) = Form::<LoginRequest>::from_request(req, state).await?;
            Ok(LoginPayload(body))
        } else {
            let Json(body) = Json::<LoginRequest>::from_request(req, state).await?;
            Ok(LoginPayload(body))
        }
    }
}
