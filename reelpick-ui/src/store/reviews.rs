//! Review record store

use chrono::Utc;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use reelpick_common::types::MovieReview;
use reelpick_common::Result;

/// A review about to be stored
#[derive(Debug, Clone)]
pub struct NewReview {
    pub movie_id: u64,
    pub movie_title: String,
    pub user_name: String,
    pub email: String,
    pub rating: f64,
    pub review: String,
}

/// Flat-file review store (`reviews.json` under the data folder)
#[derive(Debug, Clone)]
pub struct ReviewStore {
    path: PathBuf,
}

impl ReviewStore {
    pub fn new(data_folder: &Path) -> Self {
        Self {
            path: data_folder.join("reviews.json"),
        }
    }

    /// All stored reviews, oldest first
    pub fn list(&self) -> Vec<MovieReview> {
        super::read_records(&self.path)
    }

    /// Append a review
    pub fn add(&self, new_review: NewReview) -> Result<MovieReview> {
        let mut reviews = self.list();

        let review = MovieReview {
            id: Uuid::new_v4(),
            movie_id: new_review.movie_id,
            movie_title: new_review.movie_title,
            user_name: new_review.user_name,
            email: new_review.email,
            rating: new_review.rating,
            review: new_review.review,
            created_at: Utc::now().to_rfc3339(),
        };

        reviews.push(review.clone());
        super::write_records(&self.path, &reviews)?;
        Ok(review)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_list_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = ReviewStore::new(dir.path());
        assert!(store.list().is_empty());

        let stored = store
            .add(NewReview {
                movie_id: 550,
                movie_title: "Fight Club".to_string(),
                user_name: "Marla".to_string(),
                email: "marla@example.com".to_string(),
                rating: 9.0,
                review: "The first rule is great.".to_string(),
            })
            .unwrap();

        let reviews = store.list();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].id, stored.id);
        assert_eq!(reviews[0].movie_title, "Fight Club");
        assert_eq!(reviews[0].rating, 9.0);
    }
}
