//! Static greeting routes

use axum::{routing::get, Router};

/// GET /
async fn root() -> &'static str {
    "Hello World!"
}

/// GET /hello
async fn hello() -> &'static str {
    "Hello from /hello Route"
}

/// Greeting routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(root)).route("/hello", get(hello))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn root_greets() {
        assert_eq!(root().await, "Hello World!");
    }

    #[tokio::test]
    async fn hello_greets() {
        assert_eq!(hello().await, "Hello from /hello Route");
    }
}
