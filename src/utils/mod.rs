pub mod error;
pub mod logger;
pub mod thread_id;
pub mod validation;
