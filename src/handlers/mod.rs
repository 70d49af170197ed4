pub mod health_handler;
pub mod upload_handler;

pub use health_handler::health_check;
pub use upload_handler::{upload, upload_preflight};
