//! API endpoint handlers

pub mod health;
pub mod pages;
pub mod submit;

pub use health::health_routes;
pub use pages::page_routes;
pub use submit::submit_routes;
