use tower::Layer;

use crate::authorize::ExcludedPaths;

use super::service::AuthService;

#[derive(Debug, Clone)]
pub struct AuthLayer<A> {
    auth: A,
    excluded_paths: ExcludedPaths,
}

impl<A> AuthLayer<A> {
    pub fn new(auth: A, excluded_paths: ExcludedPaths) -> Self {
        Self {
            auth,
            excluded_paths,
        }
    }
}

impl<S, A> Layer<S> for AuthLayer<A>
where
    A: Clone,
{
    type Service = AuthService<S, A>;

    fn layer(&self, service: S) -> Self::Service {
        AuthService::new(service, self.auth.clone(), self.excluded_paths.clone())
    }
}

pub trait AuthLayerExt: Sized {
    fn auth_layer(self, excluded_paths: ExcludedPaths) -> AuthLayer<Self>;
}

impl<T> AuthLayerExt for T
where
    T: Sized + Clone,
{
    fn auth_layer(self, excluded_paths: ExcludedPaths) -> AuthLayer<Self> {
        AuthLayer::new(self, excluded_paths)
    }
}
