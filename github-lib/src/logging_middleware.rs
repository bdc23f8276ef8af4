use http::Extensions;
use log::{log, Level};
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next, Result};
use std::time::Instant;

/// Logs each GitHub API request together with its status, latency and the
/// remaining rate-limit budget reported by the server.
pub struct LoggingMiddleware {
    level: Level,
}

impl LoggingMiddleware {
    pub fn new(level: Level) -> Self {
        Self { level }
    }
}

#[async_trait::async_trait]
impl Middleware for LoggingMiddleware {
    async fn handle(
        &self,
        request: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> Result<Response> {
        let url = request.url().clone();
        log!(self.level, "{} {}", request.method(), url);
        let started = Instant::now();
        let result = next.run(request, extensions).await;
        match result.as_ref() {
            Ok(response) => {
                let remaining = response
                    .headers()
                    .get("x-ratelimit-remaining")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("?");
                log!(
                    self.level,
                    "{} {} in {:?} (rate limit remaining: {})",
                    response.status(),
                    url,
                    started.elapsed(),
                    remaining
                );
            }
            Err(e) => {
                log!(self.level, "request to {} failed: {:?}", url, e);
            }
        }
        result
    }
}
