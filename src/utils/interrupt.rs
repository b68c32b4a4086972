//! Operator interrupt (Ctrl-C) listener.
//!
//! The handler is registered in [`InterruptListener::install`], not on first
//! poll, so it must be created before the first prompt is shown.

use crate::utils::error::{Result, SetupError};
use std::future::Future;

pub struct InterruptListener {
    #[cfg(unix)]
    inner: tokio::signal::unix::Signal,
    #[cfg(windows)]
    inner: tokio::signal::windows::CtrlC,
}

impl InterruptListener {
    /// 必須在 tokio runtime 內呼叫
    #[cfg(unix)]
    pub fn install() -> Result<Self> {
        use tokio::signal::unix::{signal, SignalKind};

        let inner = signal(SignalKind::interrupt())?;
        tracing::debug!("SIGINT listener installed");
        Ok(Self { inner })
    }

    #[cfg(windows)]
    pub fn install() -> Result<Self> {
        let inner = tokio::signal::windows::ctrl_c()?;
        tracing::debug!("Ctrl-C listener installed");
        Ok(Self { inner })
    }

    /// 等待下一次中斷
    pub async fn recv(&mut self) {
        self.inner.recv().await;
    }
}

/// 等待設定流程結束或操作員中斷
///
/// 兩者同時就緒時以流程結果為準，已寫入的設定不會被回報成取消。
pub async fn until_interrupted<T, S, I>(session: S, interrupt: I) -> Result<T>
where
    S: Future<Output = Result<T>>,
    I: Future<Output = ()>,
{
    tokio::select! {
        biased;
        outcome = session => outcome,
        _ = interrupt => Err(SetupError::Cancelled),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::{pending, ready};

    #[tokio::test]
    async fn test_finished_session_wins_over_ready_interrupt() {
        let outcome = until_interrupted(ready(Ok(7)), ready(())).await;
        assert_eq!(outcome.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_interrupt_cancels_running_session() {
        let outcome: Result<()> = until_interrupted(pending(), ready(())).await;
        assert!(matches!(outcome, Err(SetupError::Cancelled)));
    }

    #[tokio::test]
    async fn test_session_error_passes_through() {
        let outcome: Result<()> = until_interrupted(
            ready(Err(SetupError::Cancelled)),
            pending::<()>(),
        )
        .await;
        assert!(matches!(outcome, Err(SetupError::Cancelled)));
    }
}
