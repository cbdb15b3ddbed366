//! Welcome splash timer
//!
//! Fires [`AppStore::on_splash_timeout`] once after a delay. Dropping the
//! timer cancels it, so nothing touches the store after teardown.
//!
//! [`AppStore::on_splash_timeout`]: super::AppStore::on_splash_timeout

use std::time::Duration;
use tokio::task::JoinHandle;

use super::SharedStore;

/// Default splash duration
pub const DEFAULT_SPLASH_DURATION: Duration = Duration::from_millis(3000);

/// One-shot timer that hides the welcome screen
pub struct SplashTimer {
    handle: JoinHandle<()>,
}

impl SplashTimer {
    /// Start the timer on the current tokio runtime.
    pub fn start(store: SharedStore, duration: Duration) -> Self {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            store.write().await.on_splash_timeout();
            tracing::debug!(?duration, "Splash timer elapsed");
        });

        Self { handle }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Stop the timer if it has not fired yet.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for SplashTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::AppStore;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    #[tokio::test]
    async fn test_splash_fires_once() {
        let store = Arc::new(RwLock::new(AppStore::new()));
        let timer = SplashTimer::start(Arc::clone(&store), Duration::from_millis(10));

        tokio::time::sleep(Duration::from_millis(100)).await;

        assert!(timer.is_finished());
        assert!(!store.read().await.show_welcome());
    }

    #[tokio::test]
    async fn test_cancelled_splash_never_fires() {
        let store = Arc::new(RwLock::new(AppStore::new()));
        let timer = SplashTimer::start(Arc::clone(&store), Duration::from_millis(30));
        timer.cancel();

        tokio::time::sleep(Duration::from_millis(100)).await;

        assert!(store.read().await.show_welcome());
    }
}
