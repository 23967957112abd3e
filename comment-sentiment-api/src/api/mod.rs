mod handlers;
mod health;
mod response;

pub use handlers::{analyse, comments, files};
pub use health::health_routes;
pub use response::ApiResponse;
