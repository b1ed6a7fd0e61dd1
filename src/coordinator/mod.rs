// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Polling coordinator for a single my-PV device.
//!
//! The [`PollCoordinator`] owns the refresh cadence and the authoritative
//! [`Snapshot`]. It fetches `data.jsn` and `setup.jsn` on a fixed interval,
//! publishes each result as an atomic reference swap, and notifies
//! subscribed listeners after every completed cycle.
//!
//! Fetch failures are absorbed: the previous snapshot stays published and
//! only the success flag flips. At most one fetch is in flight at any time;
//! a refresh triggered while another is running is skipped, and the next
//! timer tick simply tries again. Switch writes are serialized against
//! fetches through the same gate.
//!
//! # Examples
//!
//! ```no_run
//! use mypv_lib::PollCoordinator;
//! use mypv_lib::protocol::HttpConfig;
//!
//! # async fn example() -> mypv_lib::Result<()> {
//! let coordinator = PollCoordinator::http(HttpConfig::new("192.168.1.50"))?;
//!
//! coordinator.subscribe(|outcome| {
//!     println!("poll completed, success: {}", outcome.success);
//! });
//!
//! coordinator.start();
//! # Ok(())
//! # }
//! ```

mod listener;

pub use listener::{PollOutcome, SubscriptionId};

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use parking_lot::{Mutex, RwLock};
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

use crate::error::{Error, ParseError, ProtocolError};
use crate::protocol::{DeviceApi, HttpConfig, HttpClient};
use crate::snapshot::{FieldValue, Snapshot};

use listener::ListenerRegistry;

/// Default time between scheduled polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Shared handle to the polling coordinator of one device.
///
/// Cloning the handle is cheap; all clones drive the same coordinator.
/// The background poll task stops when [`PollCoordinator::stop`] is called
/// or when the last handle is dropped.
pub struct PollCoordinator<A: DeviceApi> {
    inner: Arc<Inner<A>>,
}

struct Inner<A> {
    api: A,
    host: String,
    interval: Duration,
    /// Published snapshot; replaced wholesale, never mutated in place.
    snapshot: RwLock<Option<Arc<Snapshot>>>,
    /// Outcome of the most recently completed fetch.
    last_update_success: AtomicBool,
    listeners: ListenerRegistry,
    /// Single-flight gate shared by refreshes and setup writes.
    refresh_gate: tokio::sync::Mutex<()>,
    poll_task: Mutex<Option<PollTask>>,
}

struct PollTask {
    shutdown: watch::Sender<bool>,
}

impl PollCoordinator<HttpClient> {
    /// Creates a coordinator polling a real device over HTTP.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created from the
    /// configuration.
    pub fn http(config: HttpConfig) -> Result<Self, ProtocolError> {
        let host = config.host().to_string();
        Ok(Self::new(config.into_client()?, host))
    }
}

impl<A: DeviceApi> PollCoordinator<A> {
    /// Creates a coordinator with the default 10 second poll interval.
    ///
    /// Polling does not begin until [`PollCoordinator::start`] is called.
    #[must_use]
    pub fn new(api: A, host: impl Into<String>) -> Self {
        Self::with_interval(api, host, DEFAULT_POLL_INTERVAL)
    }

    /// Creates a coordinator with a custom poll interval.
    #[must_use]
    pub fn with_interval(api: A, host: impl Into<String>, interval: Duration) -> Self {
        Self {
            inner: Arc::new(Inner {
                api,
                host: host.into(),
                interval,
                snapshot: RwLock::new(None),
                last_update_success: AtomicBool::new(false),
                listeners: ListenerRegistry::new(),
                refresh_gate: tokio::sync::Mutex::new(()),
                poll_task: Mutex::new(None),
            }),
        }
    }

    /// Begins periodic polling.
    ///
    /// The first fetch is performed immediately, then one per interval.
    /// Calling `start` while already polling is a no-op.
    pub fn start(&self) {
        let mut slot = self.inner.poll_task.lock();
        if slot.is_some() {
            return;
        }

        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        // The task holds only a weak reference, so dropping the last
        // coordinator handle ends polling as well.
        let weak = Arc::downgrade(&self.inner);
        let interval = self.inner.interval;

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = shutdown_rx.changed() => break,
                    _ = ticker.tick() => {
                        let Some(inner) = weak.upgrade() else { break };
                        // Awaited inside the tick arm: a stop() issued while
                        // this fetch runs takes effect on the next iteration,
                        // after the fetch has published and notified.
                        inner.refresh().await;
                    }
                }
            }
        });

        *slot = Some(PollTask {
            shutdown: shutdown_tx,
        });
    }

    /// Stops periodic polling.
    ///
    /// A fetch already in flight completes, publishes its result and
    /// notifies listeners one final time. The last snapshot and the success
    /// flag are left as they are.
    pub fn stop(&self) {
        if let Some(task) = self.inner.poll_task.lock().take() {
            let _ = task.shutdown.send(true);
        }
    }

    /// Returns `true` if the background poll task is running.
    #[must_use]
    pub fn is_polling(&self) -> bool {
        self.inner.poll_task.lock().is_some()
    }

    /// Performs one fetch cycle on demand.
    ///
    /// If another refresh is already in flight this call returns without
    /// issuing a network request.
    pub async fn refresh(&self) {
        self.inner.refresh().await;
    }

    /// Writes one setup field on the device and patches the cached snapshot.
    ///
    /// The write is serialized against scheduled fetches. On success the
    /// device's confirmed value for the field is patched into a copy of the
    /// cached snapshot, so reads reflect it before the next scheduled poll.
    /// On failure the snapshot is left unpatched and the success flag is not
    /// touched.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the confirmation payload
    /// does not echo the written field.
    pub async fn write_setup(&self, field: &str, value: i64) -> Result<FieldValue, Error> {
        let inner = &self.inner;
        let _gate = inner.refresh_gate.lock().await;

        let confirmation = inner.api.write_setup(field, value).await?;
        let confirmed = confirmation
            .get(field)
            .ok_or_else(|| ParseError::MissingField(field.to_string()))?;
        let confirmed = FieldValue::try_from(confirmed).map_err(Error::Parse)?;

        let mut slot = inner.snapshot.write();
        if let Some(current) = slot.as_ref() {
            *slot = Some(Arc::new(current.with_setup_field(field, confirmed.clone())));
        }

        tracing::debug!(host = %inner.host, field, value, "setup write confirmed");
        Ok(confirmed)
    }

    /// Returns the currently published snapshot.
    ///
    /// `None` until the first successful fetch.
    #[must_use]
    pub fn snapshot(&self) -> Option<Arc<Snapshot>> {
        self.inner.snapshot.read().clone()
    }

    /// Returns whether the most recently completed fetch succeeded.
    #[must_use]
    pub fn last_update_success(&self) -> bool {
        self.inner.last_update_success.load(Ordering::SeqCst)
    }

    /// Returns the device host address.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.inner.host
    }

    /// Returns the poll interval.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        self.inner.interval
    }

    /// Registers a listener invoked after every completed fetch.
    ///
    /// Listeners are called synchronously, in subscription order, after the
    /// snapshot swap has committed.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(PollOutcome) + Send + Sync + 'static,
    {
        self.inner.listeners.subscribe(listener)
    }

    /// Removes a listener. Returns `true` if it was registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.listeners.unsubscribe(id)
    }

    /// Stops polling and removes all listeners.
    pub fn shutdown(&self) {
        self.stop();
        self.inner.listeners.clear();
    }
}

impl<A: DeviceApi> Inner<A> {
    async fn refresh(&self) {
        // Single-flight: a refresh triggered while another is running (or
        // while a setup write holds the gate) is dropped, not queued.
        let Ok(_gate) = self.refresh_gate.try_lock() else {
            tracing::debug!(host = %self.host, "refresh already in flight, skipping");
            return;
        };

        let success = match self.fetch_snapshot().await {
            Ok(snapshot) => {
                *self.snapshot.write() = Some(Arc::new(snapshot));
                true
            }
            Err(err) => {
                tracing::warn!(host = %self.host, error = %err, "refresh failed");
                false
            }
        };

        self.last_update_success.store(success, Ordering::SeqCst);
        self.listeners.notify(PollOutcome { success });
    }

    async fn fetch_snapshot(&self) -> Result<Snapshot, Error> {
        let data = self.api.fetch_data().await?;
        let setup = self.api.fetch_setup().await?;
        Ok(Snapshot::from_payloads(&data, &setup))
    }
}

impl<A: DeviceApi> Clone for PollCoordinator<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A: DeviceApi> std::fmt::Debug for PollCoordinator<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PollCoordinator")
            .field("host", &self.inner.host)
            .field("interval", &self.inner.interval)
            .field("polling", &self.is_polling())
            .field("last_update_success", &self.last_update_success())
            .finish_non_exhaustive()
    }
}
