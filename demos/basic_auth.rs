//! Run with
//!
//! ```not_rust
//! cargo run --example basic_auth --features="axum"
//! ```
//!
//! `AUTH_TYPE` selects the strategy, try `AUTH_TYPE=basic_auth` and `AUTH_TYPE=auth`.

use axum::{response::IntoResponse, routing::get, Router};
use composable_tower_auth::{
    authorize::{extract::Authorized, user::SimpleUser, ExcludedPaths},
    config::AuthConfig,
    extension::AuthLayerExt,
};

#[path = "../util/util.rs"]
mod util;

async fn status() -> impl IntoResponse {
    "OK"
}

async fn me(Authorized(user): Authorized<SimpleUser>) -> impl IntoResponse {
    format!("You are: {:?}", user)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    util::init("basic_auth")?;

    let config = AuthConfig::from_env().with_excluded_paths(ExcludedPaths::new([
        "/api/v1/status/",
        "/api/v1/unauthorized/",
        "/api/v1/forbidden/",
    ]));

    tracing::info!(auth_type = %config.auth_type, "Configured");

    let layer = config
        .build(util::users())
        .auth_layer(config.excluded_paths.clone());

    let app = Router::new()
        // curl localhost:5000/api/v1/status
        .route("/api/v1/status", get(status))
        // curl -u "bob@hbtn.io:H0lbertonSchool98!" localhost:5000/api/v1/users/me
        // curl -u "bob@hbtn.io:wrong" localhost:5000/api/v1/users/me
        .route("/api/v1/users/me", get(me))
        .layer(layer)
        .layer(util::trace_layer());

    util::serve(app).await
}
