pub mod recommendation;
pub mod root;
pub use recommendation::RecommendationController;
pub use root::RootController;
