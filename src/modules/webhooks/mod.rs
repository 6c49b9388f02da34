pub mod controller;
pub mod routes;
pub mod schema;

pub use routes::webhook_routes;
