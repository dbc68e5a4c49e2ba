pub mod api_client;
pub mod services;

pub use api_client::{ApiClient, ApiError};
