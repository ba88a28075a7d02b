use crate::error::platform::PlatformError;

/// Receives platform errors that are handled locally instead of being returned.
///
/// Called once per failure. Implementations must not block or panic since they run
/// inside event handlers.
pub trait ErrorReporter: Send + Sync {
    fn report(&self, error: &PlatformError);
}

/// Reports errors through `tracing` at error level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, error: &PlatformError) {
        tracing::error!("{}", error);
    }
}

#[cfg(test)]
pub mod mock {
    use std::sync::Mutex;

    use super::ErrorReporter;
    use crate::error::platform::PlatformError;

    /// Keeps the rendered text of every reported error.
    #[derive(Default)]
    pub struct RecordingReporter {
        reports: Mutex<Vec<String>>,
    }

    impl RecordingReporter {
        pub fn reports(&self) -> Vec<String> {
            self.reports.lock().unwrap().clone()
        }
    }

    impl ErrorReporter for RecordingReporter {
        fn report(&self, error: &PlatformError) {
            self.reports.lock().unwrap().push(error.to_string());
        }
    }
}
