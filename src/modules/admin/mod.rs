pub mod controller;
pub mod routes;

pub use routes::admin_routes;
