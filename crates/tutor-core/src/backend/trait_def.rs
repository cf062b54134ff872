//! The `CompletionBackend` trait -- the adapter interface for
//! text-generation backends.
//!
//! The trait is intentionally object-safe so orchestrators and the HTTP
//! boundary can hold it as `Arc<dyn CompletionBackend>`.

use async_trait::async_trait;

use super::BackendError;

/// A single-shot text-in/text-out completion capability.
///
/// Implementations must be safe to share across concurrent requests; they
/// hold no per-request state.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Human-readable name for this backend (e.g. "openai").
    fn name(&self) -> &str;

    /// Perform one completion round trip.
    ///
    /// Implementations must bound the call with a timeout rather than
    /// hanging indefinitely, and must not retry on failure.
    async fn complete(&self, system: &str, user: &str) -> Result<String, BackendError>;
}

// Compile-time assertion: CompletionBackend must be object-safe.
const _: () = {
    fn _assert_object_safe(_: &dyn CompletionBackend) {}
};

#[cfg(test)]
mod tests {
    use super::*;

    /// A backend that always returns the same canned text.
    struct CannedBackend(&'static str);

    #[async_trait]
    impl CompletionBackend for CannedBackend {
        fn name(&self) -> &str {
            "canned"
        }

        async fn complete(&self, _system: &str, _user: &str) -> Result<String, BackendError> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn backend_is_object_safe() {
        let backend: Box<dyn CompletionBackend> = Box::new(CannedBackend("hi"));
        assert_eq!(backend.name(), "canned");
    }

    #[tokio::test]
    async fn canned_backend_completes() {
        let backend: Box<dyn CompletionBackend> = Box::new(CannedBackend("Lesson: A\nbody"));
        let text = backend.complete("system", "user").await.unwrap();
        assert_eq!(text, "Lesson: A\nbody");
    }
}
