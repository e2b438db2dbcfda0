pub mod client_ip;
pub mod error;

pub use client_ip::extract_client_ip;
pub use error::{
    domain_error_response, json_error_handler, not_found, validation_error_response,
    verify_error_response,
};
