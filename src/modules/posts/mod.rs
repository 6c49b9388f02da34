pub mod controller;
pub mod crud;
pub mod interface;
pub mod memory;
pub mod model;
pub mod moderation;
pub mod routes;
pub mod schema;

pub use interface::PostRepository;
pub use routes::post_routes;
