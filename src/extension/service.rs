use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};

use http::Request;
use tower::Service;

use crate::{
    authorize::{extract::SealedAuthorized, Auth, ExcludedPaths},
    error::AuthRejection,
};

/// Gates requests with an [`Auth`] strategy.
///
/// Excluded paths pass through untouched. Otherwise a request without an authorization header
/// and without a session cookie is rejected with [`AuthRejection::Unauthorized`], and one whose
/// credentials resolve to no user with [`AuthRejection::Forbidden`]. The resolved user is stored
/// in the request extensions, see [`Authorized`](crate::authorize::extract::Authorized).
#[derive(Debug, Clone)]
pub struct AuthService<S, A> {
    service: S,
    auth: A,
    excluded_paths: Arc<ExcludedPaths>,
}

impl<S, A> AuthService<S, A> {
    pub fn new(service: S, auth: A, excluded_paths: ExcludedPaths) -> Self {
        Self {
            service,
            auth,
            excluded_paths: Arc::new(excluded_paths),
        }
    }
}

impl<S, A, B> Service<Request<B>> for AuthService<S, A>
where
    A: Auth + Clone + Send + Sync + 'static,
    S: Service<Request<B>> + Clone + Send + 'static,
    S::Future: Send,
    S::Response: From<AuthRejection>,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<S::Response, S::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request<B>) -> Self::Future {
        let mut service = self.service.clone();
        let auth = self.auth.clone();
        let excluded_paths = self.excluded_paths.clone();

        Box::pin(async move {
            let path = request.uri().path();

            if !auth.require_auth(path, excluded_paths.as_slice()) {
                return service.call(request).await;
            }

            let user = {
                let headers = request.headers();

                if auth.authorization_header(headers).is_none()
                    && auth.session_cookie(headers).is_none()
                {
                    tracing::debug!(path, "No credentials");

                    return Ok(From::from(AuthRejection::Unauthorized));
                }

                match auth.current_user(headers).await {
                    Some(user) => user,
                    None => {
                        tracing::debug!(path, "Credentials do not resolve to a user");

                        return Ok(From::from(AuthRejection::Forbidden));
                    }
                }
            };

            request.extensions_mut().insert(SealedAuthorized(user));

            service.call(request).await
        })
    }
}
