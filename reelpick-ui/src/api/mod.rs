//! HTTP API handlers for reelpick-ui

pub mod health;
pub mod movies;
pub mod quiz;
pub mod reviews;
pub mod watchlist;

pub use health::health_routes;
pub use movies::movie_routes;
pub use quiz::quiz_routes;
pub use reviews::review_routes;
pub use watchlist::watchlist_routes;
