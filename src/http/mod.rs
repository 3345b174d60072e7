pub mod client;
pub mod detect;

pub use client::build_http_client;
pub use detect::detect;
