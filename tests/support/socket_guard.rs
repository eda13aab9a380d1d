//! Guard for tests that need to bind local sockets.

use wiremock::MockServer;

/// Starts a wiremock server, or returns `None` so the caller can skip when
/// the sandbox forbids binding local sockets.
///
/// `MockServer::start` panics when no listener can be bound; running it on a
/// separate task turns that panic into a skippable `JoinError`.
pub async fn start_mock_server_or_skip() -> Option<MockServer> {
    match tokio::spawn(MockServer::start()).await {
        Ok(server) => Some(server),
        Err(error) => {
            eprintln!("skipping test: could not start mock server: {error}");
            None
        }
    }
}
