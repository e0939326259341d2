//! Run with
//!
//! ```not_rust
//! SESSION_NAME=_my_session_id cargo run --example session_auth --features="axum"
//! ```
//!

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{delete, get, post},
    Form, Router,
};
use composable_tower_auth::{
    authorize::{
        cookie::DefaultCookieExtractor,
        extract::Authorized,
        session_auth::{InMemorySessionStore, SessionAuth},
        user::{AuthUser, InMemoryUserStore, SimpleUser, UserStore},
        ExcludedPaths,
    },
    config::AuthConfig,
    extension::AuthLayerExt,
};
use serde::Deserialize;

#[path = "../util/util.rs"]
mod util;

type Auth = SessionAuth<DefaultCookieExtractor, InMemorySessionStore, InMemoryUserStore<SimpleUser>>;

#[derive(Debug, Clone)]
struct AppState {
    auth: Auth,
    session_name: String,
}

#[derive(Debug, Deserialize)]
struct Login {
    email: String,
    password: String,
}

async fn login(State(state): State<AppState>, Form(login): Form<Login>) -> impl IntoResponse {
    let users = match state.auth.user_store().search(&login.email).await {
        Ok(users) => users,
        Err(never) => match never {},
    };

    let Some(user) = users.into_iter().next() else {
        return (StatusCode::NOT_FOUND, "No user found for this email").into_response();
    };

    if !user.is_valid_password(&login.password) {
        return (StatusCode::UNAUTHORIZED, "Wrong password").into_response();
    }

    let session_id = state.auth.create_session(user.id()).await;

    (
        [(
            header::SET_COOKIE,
            format!("{}={session_id}; Path=/; HttpOnly", state.session_name),
        )],
        format!("Logged in as {}", user.email()),
    )
        .into_response()
}

async fn logout(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    if state.auth.destroy_session(&headers).await {
        return StatusCode::OK;
    }

    StatusCode::NOT_FOUND
}

async fn me(Authorized(user): Authorized<SimpleUser>) -> impl IntoResponse {
    format!("You are: {:?}", user)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    util::init("session_auth")?;

    let config = AuthConfig::from_env();

    let session_name = config
        .session_name
        .clone()
        .ok_or_else(|| anyhow::anyhow!("SESSION_NAME is not set"))?
        .into_owned();

    let auth = SessionAuth::new(
        config.cookie_extractor(),
        InMemorySessionStore::new(),
        util::users(),
    );

    let layer = auth.clone().auth_layer(ExcludedPaths::new([
        "/api/v1/status/",
        "/api/v1/auth_session/login/",
    ]));

    let state = AppState { auth, session_name };

    let app = Router::new()
        // curl -c cookies localhost:5000/api/v1/auth_session/login -d "email=bob@hbtn.io" -d "password=H0lbertonSchool98!"
        .route("/api/v1/auth_session/login", post(login))
        // curl -b cookies -X DELETE localhost:5000/api/v1/auth_session/logout
        .route("/api/v1/auth_session/logout", delete(logout))
        // curl -b cookies localhost:5000/api/v1/users/me
        .route("/api/v1/users/me", get(me))
        .route("/api/v1/status", get(|| async { "OK" }))
        .layer(layer)
        .with_state(state)
        .layer(util::trace_layer());

    util::serve(app).await
}
