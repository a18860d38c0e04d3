pub mod html_parser;
pub mod json_store;
pub mod nptel;
pub mod pipeline;
