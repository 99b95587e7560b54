//! Background inactivity monitor and accrual engine.
//!
//! Watches keyboard and mouse input through `rdev` and converts stretches
//! of inactivity into credited screen-time minutes. The monitor is a
//! two-state machine: `Active` while input keeps arriving, `Inactive`
//! once the recent-input window runs dry. While inactive, every poll (and
//! the transition back to active) evaluates accrual: whole elapsed
//! threshold periods are rewarded at the configured rate and the
//! reference timestamp advances by exactly the rewarded duration, so a
//! partial hour is never lost and never double-counted.
//!
//! The monitor only talks to the ledger through its public credit
//! operation; it never touches the balance row directly.

use crate::api::sync;
use crate::libs::config::{Config, MonitorConfig, ServerConfig};
use crate::libs::ledger::Ledger;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_debug, msg_info, msg_warning};
use anyhow::Result;
use chrono::{Duration as ChronoDuration, Local, NaiveDate, NaiveDateTime};
use parking_lot::Mutex;
use rdev::{listen, Event, EventType};
use std::sync::Arc;
use tokio::time::{self, Duration, Instant};

/// Mutable monitor state: the activity flag and the accrual reference
/// point. `last_active` marks the last observed activity signal, not the
/// moment inactivity was detected.
#[derive(Debug, Clone, Copy)]
pub struct InactivityState {
    pub last_active: NaiveDateTime,
    pub is_active: bool,
}

/// The inactivity monitor.
pub struct Monitor {
    pub config: MonitorConfig,
    pub state: InactivityState,
    reward_rate: i64,
    ledger: Ledger,
    server: Option<ServerConfig>,
    last_input: Arc<Mutex<Instant>>,
    current_date: NaiveDate,
}

impl Monitor {
    /// Builds a monitor from the application configuration, opening its
    /// own ledger over the shared database.
    pub fn new(config: &Config) -> Result<Self> {
        let ledger_config = config.ledger.clone().unwrap_or_default();
        let monitor_config = config.monitor.clone().unwrap_or_default();

        // Zero timing values would divide by zero in accrual or busy-loop
        // the poll; a hand-edited config can hold them.
        if monitor_config.inactivity_threshold == 0 {
            msg_bail_anyhow!(Message::MonitorConfigInvalid("inactivity_threshold must be greater than zero".to_string()));
        }
        if monitor_config.poll_interval == 0 {
            msg_bail_anyhow!(Message::MonitorConfigInvalid("poll_interval must be greater than zero".to_string()));
        }

        let ledger = Ledger::new(ledger_config.baseline)?;
        let now = Local::now().naive_local();

        Ok(Monitor {
            config: monitor_config,
            state: InactivityState {
                last_active: now,
                is_active: true,
            },
            reward_rate: ledger_config.reward_rate,
            ledger,
            server: config.server.clone(),
            last_input: Arc::new(Mutex::new(Instant::now())),
            current_date: now.date(),
        })
    }

    /// Runs the monitoring loop.
    ///
    /// A dedicated thread listens for input events and refreshes the
    /// shared last-input instant; the async loop polls that instant,
    /// drives the state machine, and performs the daily rollover when
    /// the calendar date changes between polls.
    pub async fn run(&mut self) -> Result<()> {
        msg_info!(Message::MonitorStarted {
            inactivity_threshold: self.config.inactivity_threshold,
            poll_interval: self.config.poll_interval,
            activity_threshold: self.config.activity_threshold,
        });

        let shared_last_input = self.last_input.clone();
        std::thread::spawn(move || {
            loop {
                let last_input_for_listener = shared_last_input.clone();
                if let Err(e) = listen(move |event: Event| match event.event_type {
                    EventType::KeyPress(_) | EventType::ButtonPress(_) | EventType::Wheel { .. } => {
                        *last_input_for_listener.lock() = Instant::now();
                    }
                    _ => {}
                }) {
                    msg_debug!(format!("Input listener failed: {:?}, restarting", e));
                    std::thread::sleep(std::time::Duration::from_secs(1));
                } else {
                    // listen() is blocking and normally never returns Ok
                    break;
                }
            }
        });

        loop {
            let now = Local::now().naive_local();
            self.rollover_if_needed(now.date())?;

            let recent_input = self.last_input.lock().elapsed() < Duration::from_secs(self.config.activity_threshold);

            if recent_input {
                if self.state.is_active {
                    // Still active, move the reference point forward.
                    self.state.last_active = now;
                } else {
                    let credited = self.mark_active(now)?;
                    self.flush_after_credit(credited).await;
                }
            } else if self.state.is_active {
                self.mark_inactive();
            } else {
                let credited = self.check_accrual(now)?;
                self.flush_after_credit(credited).await;
            }

            time::sleep(Duration::from_millis(self.config.poll_interval)).await;
        }
    }

    /// Transition `Active -> Inactive`.
    ///
    /// `last_active` is left at the last observed activity signal so the
    /// whole quiet stretch counts toward accrual.
    pub fn mark_inactive(&mut self) {
        self.state.is_active = false;
        msg_debug!("Inactivity started");
    }

    /// Transition `Inactive -> Active`, evaluating accrual first so the
    /// finished quiet stretch is rewarded before the reference point
    /// jumps to `now`.
    pub fn mark_active(&mut self, now: NaiveDateTime) -> Result<Option<i64>> {
        let credited = self.check_accrual(now)?;
        self.state.is_active = true;
        self.state.last_active = now;
        msg_debug!("Activity resumed");
        Ok(credited)
    }

    /// Accrual evaluation.
    ///
    /// Credits `whole elapsed threshold periods * reward_rate` minutes
    /// and advances `last_active` by exactly the rewarded duration,
    /// never to `now`, so the remainder keeps counting toward the next
    /// reward. Returns the credited minutes, if any.
    ///
    /// A failed credit is logged and the interval's reward is lost: the
    /// reference point still advances, trading exactness for simplicity.
    pub fn check_accrual(&mut self, now: NaiveDateTime) -> Result<Option<i64>> {
        if self.state.is_active {
            return Ok(None);
        }

        let threshold_ms = self.config.inactivity_threshold as i64 * 1000;
        let elapsed_ms = now.signed_duration_since(self.state.last_active).num_milliseconds();
        if elapsed_ms < threshold_ms {
            return Ok(None);
        }

        let inactive_hours = elapsed_ms / threshold_ms;
        if inactive_hours == 0 {
            return Ok(None);
        }

        let reward = inactive_hours * self.reward_rate;
        if reward > 0 {
            match self.ledger.credit(reward, &inactivity_source(inactive_hours)) {
                Ok(_) => msg_info!(Message::InactivityCredited(reward, inactive_hours)),
                Err(e) => msg_warning!(Message::InactivityCreditFailed(e.to_string())),
            }
        }

        self.state.last_active += ChronoDuration::milliseconds(inactive_hours * threshold_ms);

        Ok(Some(reward))
    }

    /// Resets the ledger when the calendar date has changed since the
    /// previous poll. The watcher hosts the daily rollover so the
    /// baseline is restored even when nobody runs a command that day.
    pub fn rollover_if_needed(&mut self, today: NaiveDate) -> Result<bool> {
        if today == self.current_date {
            return Ok(false);
        }

        self.ledger.reset()?;
        self.current_date = today;
        msg_info!(Message::DailyRollover(today.to_string()));
        Ok(true)
    }

    /// Best-effort push of the sync backlog after an accrual credit.
    /// Failures stay local; the next user action retries.
    async fn flush_after_credit(&mut self, credited: Option<i64>) {
        if credited.is_none() || self.server.is_none() {
            return;
        }
        if let Some(server) = self.server.clone() {
            if let Err(e) = sync::flush_pending(&mut self.ledger, &server).await {
                msg_debug!(format!("Sync flush failed: {}", e));
            }
        }
    }
}

/// Source label for inactivity credits, e.g. "Inactivity (2 hours)".
pub fn inactivity_source(hours: i64) -> String {
    format!("Inactivity ({} hour{})", hours, if hours > 1 { "s" } else { "" })
}
