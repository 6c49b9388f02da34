pub mod controller;
pub mod credentials;
pub mod crud;
pub mod extractor;
pub mod interface;
pub mod memory;
pub mod model;
pub mod routes;
pub mod schema;
pub mod service;

pub use extractor::AuthUser;
pub use interface::{AuthError, RefreshTokenRepository};
pub use routes::auth_routes;
pub use service::SessionService;
