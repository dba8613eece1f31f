use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, MemoryStore, Session};

/// Test context holding a session backed by its own in-memory store.
///
/// Each context is isolated: nothing written to its session is visible to another
/// context.
pub struct TestContext {
    session: Session,
}

impl TestContext {
    /// Creates a new test context with an empty session.
    ///
    /// The session uses the same 24 hour inactivity expiry as the server.
    pub fn new() -> Self {
        let session = Session::new(
            None,
            Arc::new(MemoryStore::default()),
            Some(Expiry::OnInactivity(Duration::hours(24))),
        );

        Self { session }
    }

    /// Returns the context's session.
    ///
    /// # Example
    /// ```rust,ignore
    /// let test = TestContext::new();
    /// test.session().insert("key", 123).await?;
    /// ```
    pub fn session(&self) -> &Session {
        &self.session
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
