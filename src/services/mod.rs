pub mod completion_service;
pub mod http_helpers;
pub mod prompt;
