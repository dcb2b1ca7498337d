pub mod http;
pub mod sheets;
