mod layer;
mod service;

pub use layer::{AuthLayer, AuthLayerExt};
pub use service::AuthService;
