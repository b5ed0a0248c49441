use tracing::debug;

pub async fn health_check() -> &'static str {
    debug!("Health check requested");
    "OK"
}

pub async fn root() -> &'static str {
    "Hello World!"
}
