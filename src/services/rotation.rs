// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! QR presentation loop.
//!
//! Drives two independent periodic timers for a logged-in user:
//! - rotation timer (10 s): recompute the time bucket from the wall clock,
//!   sign a fresh token, reset the countdown display to 100;
//! - countdown timer (100 ms): decrement a 0-100 display counter, wrapping
//!   back to 100 at zero.
//!
//! The countdown wrap is cosmetic and not synchronized to the rotation
//! boundary. Frames are published through a `watch` channel, so at most one
//! frame is current at any instant. Dropping the feed aborts the driver
//! task, cancelling both timers.

use crate::services::token::{self, TokenSigner, ROTATION_INTERVAL_MS};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Countdown timer period.
pub const COUNTDOWN_INTERVAL_MS: u64 = 100;

/// Countdown display maximum.
pub const COUNTDOWN_MAX: u8 = 100;

/// One displayed state of the QR presentation loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrFrame {
    /// Current rotating token (hex HMAC)
    pub token: String,
    /// Time bucket the token was derived for
    pub bucket: u64,
    /// Cosmetic countdown, 0-100
    pub countdown: u8,
}

/// Wall-clock seam so the loop can be driven deterministically in tests.
pub trait Clock: Send + Sync + 'static {
    /// Current Unix time in milliseconds.
    fn unix_millis(&self) -> u64;
}

/// Production clock backed by `SystemTime`.
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_millis(&self) -> u64 {
        token::unix_millis_now()
    }
}

/// Next countdown value after one 100 ms tick.
pub fn next_countdown(current: u8) -> u8 {
    if current > 0 {
        current - 1
    } else {
        COUNTDOWN_MAX
    }
}

/// A running presentation loop for one user identity.
///
/// Created when an authenticated subscriber connects; dropping it cancels
/// both timers.
pub struct RotationFeed {
    rx: watch::Receiver<QrFrame>,
    task: JoinHandle<()>,
}

impl RotationFeed {
    /// Start the loop against the system clock.
    pub fn start(signer: TokenSigner, user_id: String) -> Self {
        Self::start_with_clock(signer, user_id, Arc::new(SystemClock))
    }

    /// Start the loop with an explicit clock.
    pub fn start_with_clock(signer: TokenSigner, user_id: String, clock: Arc<dyn Clock>) -> Self {
        let bucket = token::bucket_at(clock.unix_millis());
        let initial = QrFrame {
            token: signer.sign(&user_id, bucket),
            bucket,
            countdown: COUNTDOWN_MAX,
        };
        let (tx, rx) = watch::channel(initial);
        let task = tokio::spawn(drive(signer, user_id, clock, tx));
        Self { rx, task }
    }

    /// Subscribe to published frames.
    pub fn subscribe(&self) -> watch::Receiver<QrFrame> {
        self.rx.clone()
    }

    /// The currently displayed frame.
    pub fn current(&self) -> QrFrame {
        self.rx.borrow().clone()
    }
}

impl Drop for RotationFeed {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn drive(
    signer: TokenSigner,
    user_id: String,
    clock: Arc<dyn Clock>,
    tx: watch::Sender<QrFrame>,
) {
    let mut rotation = tokio::time::interval(Duration::from_millis(ROTATION_INTERVAL_MS));
    let mut countdown = tokio::time::interval(Duration::from_millis(COUNTDOWN_INTERVAL_MS));
    // Intervals fire immediately on the first tick; the initial frame was
    // already published, so consume those before the periodic loop.
    rotation.tick().await;
    countdown.tick().await;

    loop {
        tokio::select! {
            _ = rotation.tick() => {
                let bucket = token::bucket_at(clock.unix_millis());
                let fresh = signer.sign(&user_id, bucket);
                tx.send_modify(|frame| {
                    frame.token = fresh;
                    frame.bucket = bucket;
                    frame.countdown = COUNTDOWN_MAX;
                });
            }
            _ = countdown.tick() => {
                tx.send_modify(|frame| {
                    frame.countdown = next_countdown(frame.countdown);
                });
            }
        }
    }
}
