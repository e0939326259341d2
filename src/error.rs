/// Why [`AuthService`](crate::extension::AuthService) refused a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthRejection {
    /// The request carries neither an authorization header nor a session cookie.
    #[error("Unauthorized")]
    Unauthorized,
    /// The request carries credentials, but they do not resolve to a user.
    #[error("Forbidden")]
    Forbidden,
}

impl AuthRejection {
    pub const fn status(&self) -> http::StatusCode {
        match self {
            Self::Unauthorized => http::StatusCode::UNAUTHORIZED,
            Self::Forbidden => http::StatusCode::FORBIDDEN,
        }
    }
}

#[cfg(feature = "axum")]
mod axum {
    use axum::{
        response::{IntoResponse, Response},
        Json,
    };
    use serde::Serialize;

    use super::AuthRejection;

    #[derive(Debug, Serialize)]
    struct ErrorBody {
        error: String,
    }

    impl IntoResponse for AuthRejection {
        fn into_response(self) -> Response {
            tracing::warn!(err = %self, "Rejected");

            (
                self.status(),
                Json(ErrorBody {
                    error: self.to_string(),
                }),
            )
                .into_response()
        }
    }

    impl From<AuthRejection> for Response {
        fn from(value: AuthRejection) -> Self {
            value.into_response()
        }
    }
}
