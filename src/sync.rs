//! Best-effort network time sync at startup.
//!
//! The collaborator behind [`TimeSync`] owns the network link and writes the
//! real-time clock. Nothing here is fatal: missing credentials skip the sync,
//! and connection failures or timeouts leave the clock as it was.

use crate::config::SyncConfig;
use embedded_hal::delay::DelayNs;

/// Link state reported while connecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkStatus {
    Connecting,
    Connected,
    Failed,
}

/// Trait for abstracting the network time collaborator.
pub trait TimeSync {
    type Error;

    /// False when no network credentials are configured.
    fn has_credentials(&self) -> bool;

    /// Starts connecting. Progress is reported by [`TimeSync::status`].
    fn connect(&mut self) -> Result<(), Self::Error>;

    fn status(&mut self) -> LinkStatus;

    /// Sets the real-time clock to network UTC.
    fn set_time(&mut self) -> Result<(), Self::Error>;

    /// Drops the link. Called after every attempt.
    fn disconnect(&mut self);
}

/// How the startup sync ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SyncOutcome {
    /// No credentials; nothing was attempted.
    Skipped,
    /// The real-time clock now holds network time.
    Synced,
    /// The link did not come up within the retry window.
    TimedOut,
    /// The link or the time request failed.
    Failed,
}

impl SyncOutcome {
    pub fn is_synced(&self) -> bool {
        matches!(self, SyncOutcome::Synced)
    }
}

/// Attempts one network time sync within a bounded window.
///
/// Polls the link status up to `config.max_polls` times,
/// `config.poll_interval_ms` apart, calling `idle` after every wait so the
/// caller can keep the display live on single-context targets.
pub fn sync_time<T, D, F>(sync: &mut T, delay: &mut D, config: &SyncConfig, mut idle: F) -> SyncOutcome
where
    T: TimeSync,
    D: DelayNs,
    F: FnMut(),
{
    if !sync.has_credentials() {
        info!("no network credentials, keeping RTC time");
        return SyncOutcome::Skipped;
    }

    if sync.connect().is_err() {
        warn!("could not start network connection");
        sync.disconnect();
        return SyncOutcome::Failed;
    }

    let outcome = match wait_for_link(sync, delay, config, &mut idle) {
        LinkStatus::Connected => {
            info!("connected");
            match sync.set_time() {
                Ok(()) => {
                    info!("time set");
                    SyncOutcome::Synced
                }
                Err(_) => {
                    warn!("network time request failed");
                    SyncOutcome::Failed
                }
            }
        }
        LinkStatus::Failed => {
            warn!("network connection failed");
            SyncOutcome::Failed
        }
        LinkStatus::Connecting => {
            warn!("network connection timed out");
            SyncOutcome::TimedOut
        }
    };

    sync.disconnect();
    outcome
}

fn wait_for_link<T, D, F>(sync: &mut T, delay: &mut D, config: &SyncConfig, idle: &mut F) -> LinkStatus
where
    T: TimeSync,
    D: DelayNs,
    F: FnMut(),
{
    for _ in 0..config.max_polls {
        match sync.status() {
            LinkStatus::Connecting => {
                debug!("waiting for connection...");
                delay.delay_ms(config.poll_interval_ms);
                idle();
            }
            settled => return settled,
        }
    }
    sync.status()
}
