use crate::date_key::DateKey;
use crate::errors::TrackerError;
use crate::models::{DayStatus, TrackingMode, UserProgress};
use crate::streak::calculate_streak;
use tracing::{info, warn};

/// User-facing warning raised by a day transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub day: DateKey,
    pub message: String,
}

pub type Notifier = Box<dyn Fn(&Notice) + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub day: DateKey,
    pub status: DayStatus,
    pub notice: Option<Notice>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RolloverOutcome {
    /// Same day as the last update; nothing to do.
    Unchanged,
    /// A new day started; the streak was recomputed.
    Recalculated,
    /// No update recorded yet; `last_updated` was set to today.
    Initialized,
}

impl RolloverOutcome {
    pub fn needs_save(self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// Owns the progress aggregate and applies day-status transitions to it.
///
/// Every operation takes "today" explicitly; callers read the clock.
pub struct DayStatusController {
    progress: UserProgress,
    mode: TrackingMode,
    notifier: Option<Notifier>,
}

impl DayStatusController {
    pub fn new(mode: TrackingMode, mut progress: UserProgress) -> Self {
        progress.records.dedup();
        Self {
            progress,
            mode,
            notifier: None,
        }
    }

    pub fn with_notifier(mut self, notifier: Notifier) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn mode(&self) -> TrackingMode {
        self.mode
    }

    pub fn progress(&self) -> &UserProgress {
        &self.progress
    }

    pub fn is_success(&self, day: DateKey) -> bool {
        self.progress.records.is_success(day)
    }

    pub fn is_missed(&self, day: DateKey) -> bool {
        self.progress.records.is_missed(day)
    }

    pub fn status(&self, day: DateKey) -> DayStatus {
        self.progress.records.status(day)
    }

    pub fn recalculate(&mut self, today: DateKey) {
        calculate_streak(&mut self.progress, today);
    }

    pub fn toggle_day(&mut self, day: DateKey, today: DateKey) -> Result<ToggleOutcome, TrackerError> {
        if day > today {
            return Err(TrackerError::FutureDay { day, today });
        }

        let records = &mut self.progress.records;
        let previous = records.status(day);
        let mut notice = None;

        let status = match self.mode {
            TrackingMode::Binary => {
                records.remove_missed(day);
                if previous == DayStatus::Success {
                    records.remove_success(day);
                    DayStatus::Unmarked
                } else {
                    records.add_success(day);
                    DayStatus::Success
                }
            }
            TrackingMode::TriState => {
                records.remove_success(day);
                records.remove_missed(day);
                match previous {
                    DayStatus::Unmarked => {
                        records.add_success(day);
                        DayStatus::Success
                    }
                    DayStatus::Success => {
                        records.add_missed(day);
                        notice = Some(Notice {
                            day,
                            message: format!("{day} marked as missed. Your streak may be affected."),
                        });
                        DayStatus::Missed
                    }
                    DayStatus::Missed => DayStatus::Unmarked,
                }
            }
        };

        self.touch(today);

        if let Some(notice) = &notice {
            warn!(day = %notice.day, "{}", notice.message);
            if let Some(notifier) = &self.notifier {
                notifier(notice);
            }
        }

        Ok(ToggleOutcome { day, status, notice })
    }

    pub fn mark_today(&mut self, today: DateKey) -> Result<(), TrackerError> {
        self.require_binary("mark today")?;
        if self.progress.records.is_success(today) {
            return Err(TrackerError::AlreadyMarked(today));
        }

        self.progress.records.remove_missed(today);
        self.progress.records.add_success(today);
        self.touch(today);
        Ok(())
    }

    /// Removes the run of success days ending at today. Earlier history and
    /// the best streak are kept.
    pub fn reset_current_streak(&mut self, today: DateKey) -> Result<u32, TrackerError> {
        self.require_binary("reset")?;

        let mut removed = 0;
        let mut cursor = today;
        while self.progress.records.is_success(cursor) {
            self.progress.records.remove_success(cursor);
            removed += 1;
            cursor = cursor.pred();
        }

        self.progress.current_streak = 0;
        self.progress.last_updated = Some(today);
        info!(removed, "current streak reset");
        Ok(removed)
    }

    pub fn check_day_change(&mut self, today: DateKey) -> RolloverOutcome {
        match self.progress.last_updated {
            Some(last) if DateKey::same_day(&last, &today) => RolloverOutcome::Unchanged,
            Some(last) => {
                calculate_streak(&mut self.progress, today);
                info!(%last, %today, streak = self.progress.current_streak, "day changed");
                RolloverOutcome::Recalculated
            }
            None => {
                self.progress.last_updated = Some(today);
                RolloverOutcome::Initialized
            }
        }
    }

    fn touch(&mut self, today: DateKey) {
        self.progress.last_updated = Some(today);
        calculate_streak(&mut self.progress, today);
    }

    fn require_binary(&self, action: &'static str) -> Result<(), TrackerError> {
        match self.mode {
            TrackingMode::Binary => Ok(()),
            mode => Err(TrackerError::UnsupportedInMode { action, mode }),
        }
    }
}
