pub mod contact;
pub mod health;
pub mod routes;
pub mod site;

pub use routes::create_routes;
