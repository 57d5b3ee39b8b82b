use std::future::Future;

use log::debug;
use tokio::sync::watch;

use super::{outcome::Outcome, transport::ErrorKind};

/// Owner side of a cancellation signal.
pub struct CancellationSource {
    sender: watch::Sender<bool>,
}

/// Observer side, cheap to clone and hand to each call.
#[derive(Clone)]
pub struct CancellationToken {
    receiver: watch::Receiver<bool>,
}

impl CancellationSource {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(false);
        Self { sender }
    }

    pub fn token(&self) -> CancellationToken {
        CancellationToken {
            receiver: self.sender.subscribe(),
        }
    }

    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }
}

impl Default for CancellationSource {
    fn default() -> Self {
        Self::new()
    }
}

impl CancellationToken {
    pub fn is_cancelled(&self) -> bool {
        *self.receiver.borrow()
    }

    /// Resolves once cancelled; never resolves if the source is dropped first.
    pub async fn cancelled(&self) {
        let mut receiver = self.receiver.clone();
        let signalled = receiver.wait_for(|c| *c).await.map(|_| ()).is_ok();

        if !signalled {
            std::future::pending::<()>().await;
        }
    }
}

/// Runs `operation` until it completes or `token` is cancelled.
///
/// On cancellation the operation future is dropped, which aborts the
/// underlying request.
pub async fn cancellable<T, F>(token: &CancellationToken, operation: F) -> Outcome<T>
where
    F: Future<Output = Outcome<T>>,
{
    tokio::select! {
        biased;
        _ = token.cancelled() => {
            debug!("operation cancelled by caller");
            Outcome::Failure(ErrorKind::Cancelled)
        }
        outcome = operation => outcome,
    }
}
