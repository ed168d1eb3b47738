//! Background refresh loop for the latest-quote store.
//!
//! One task, fixed period. Each cycle runs to completion before the next
//! tick can fire, so invocations never overlap. A failed cycle is logged
//! and dropped; the loop only exits on shutdown.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{error, info};

use quotedock_core::quotes::QuoteServiceTrait;

/// Handle for stopping the refresh loop.
pub struct SchedulerHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl SchedulerHandle {
    /// Signal the loop to stop and wait for any in-flight cycle to finish.
    pub async fn shutdown(self) {
        let _ = self.shutdown.send(true);
        let _ = self.task.await;
    }
}

/// Spawn the periodic save-all-quotes task. The first cycle runs
/// immediately; later cycles fire every `period`.
pub fn start_quote_refresh(
    service: Arc<dyn QuoteServiceTrait>,
    period: Duration,
) -> SchedulerHandle {
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    let task = tokio::spawn(async move {
        info!("Quote refresh scheduler started (period {:?})", period);
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => run_refresh_cycle(service.as_ref()).await,
                _ = shutdown_rx.changed() => {
                    info!("Quote refresh scheduler stopped");
                    return;
                }
            }
        }
    });

    SchedulerHandle {
        shutdown: shutdown_tx,
        task,
    }
}

/// One refresh cycle. Failures are logged and discarded so a bad cycle
/// never takes the loop down.
async fn run_refresh_cycle(service: &dyn QuoteServiceTrait) {
    info!("Refresh cycle started");
    match service.save_all_quotes().await {
        Ok(saved) => info!("Refresh cycle completed: {} quotes saved", saved),
        Err(e) => error!("Refresh cycle failed: {}", e),
    }
}
