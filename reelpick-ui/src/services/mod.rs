//! Service-layer components: the TMDB catalog client and the quiz
//! recommendation pipeline built on top of it.

pub mod recommender;
pub mod tmdb_client;

pub use recommender::{recommend, RecommendationSet};
pub use tmdb_client::{MovieCategory, MovieListResponse, TmdbClient, TmdbError};
