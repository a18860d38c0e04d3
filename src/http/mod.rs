pub mod logging_middleware;
pub mod random_headers;
