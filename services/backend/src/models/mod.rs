pub mod record;
pub mod recommendation;

pub use recommendation::{MusicRecommendation, UpsertRecommendation};
