use std::time::Instant;

use http::Extensions;
use log::{debug, info, warn};
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next, Result};

/// Logs each request line and the status it came back with.
pub struct LoggingMiddleware;

#[async_trait::async_trait]
impl Middleware for LoggingMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> Result<Response> {
        let method = req.method().clone();
        let url = req.url().to_string();
        debug!("--> {} {}", method, url);

        let started = Instant::now();
        let result = next.run(req, extensions).await;
        let elapsed = started.elapsed().as_millis();

        match &result {
            Ok(response) => info!(
                "<-- {} {} {} ({}ms)",
                response.status().as_u16(),
                method,
                url,
                elapsed
            ),
            Err(err) => warn!("<-- {} {} failed after {}ms: {}", method, url, elapsed, err),
        }
        result
    }
}
