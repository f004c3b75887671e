pub mod recommendation;
pub mod root;
pub use recommendation::bestmusic_routes;
pub use root::{health_check_route, root_route};
