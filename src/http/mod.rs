//! HTTP protocol layer module.
//!
//! Response builders and MIME detection, decoupled from the handlers.

pub mod mime;
pub mod response;

pub use response::{
    build_404_response, build_error_response, build_file_response, build_html_response,
    build_text_response,
};
