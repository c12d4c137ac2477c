//! Scheduling policy: immediate vs scheduled, optimal time, fixed slots.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Timelike, Utc};
use derive_getters::Getters;
use herald_error::{WorkflowError, WorkflowErrorKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// One suggested publish time with its audience-activity label.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct TimeSlot {
    /// Wall-clock publish time.
    time: NaiveTime,

    /// Why this slot is suggested, e.g. peak activity on a platform.
    label: String,
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

fn default_offset() -> i64 {
    26
}

fn default_slots() -> Vec<TimeSlot> {
    vec![
        TimeSlot::new(hm(8, 30), "high Facebook activity".to_string()),
        TimeSlot::new(hm(12, 0), "high Instagram activity".to_string()),
        TimeSlot::new(hm(17, 30), "high Twitter activity".to_string()),
        TimeSlot::new(hm(20, 0), "high general activity".to_string()),
    ]
}

/// Tunable scheduling constants.
///
/// The defaults are the reference values: a 26 hour optimal-time offset and
/// four audience-activity slots. Both can be overridden from the config
/// file.
#[derive(
    Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_setters::Setters,
)]
#[setters(prefix = "with_")]
pub struct SchedulingConfig {
    /// Hours ahead of "now" the optimal-time suggestion lands.
    #[serde(default = "default_offset")]
    optimal_offset_hours: i64,

    /// Suggested publish slots offered on the scheduling stage.
    #[serde(default = "default_slots")]
    slots: Vec<TimeSlot>,
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            optimal_offset_hours: default_offset(),
            slots: default_slots(),
        }
    }
}

/// The user's current schedule choice.
///
/// `time` is always present (noon by default), so an active schedule can
/// never lack a resolvable time; an unset date resolves to the current day
/// at payload time.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ScheduleChoice {
    /// Whether publishing is deferred to a scheduled moment.
    scheduled: bool,

    /// Chosen calendar date, if the user picked one.
    date: Option<NaiveDate>,

    /// Chosen wall-clock time.
    time: NaiveTime,
}

impl Default for ScheduleChoice {
    fn default() -> Self {
        Self {
            scheduled: false,
            date: None,
            time: hm(12, 0),
        }
    }
}

/// Drives the scheduling stage of the publish workflow.
///
/// Pure with respect to wall clocks: every time-dependent operation takes
/// `now` from the caller, which keeps the policy deterministic under test.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchedulingPolicy {
    config: SchedulingConfig,
    choice: ScheduleChoice,
}

impl SchedulingPolicy {
    /// Build a policy from configured constants, starting immediate.
    pub fn new(config: SchedulingConfig) -> Self {
        Self {
            config,
            choice: ScheduleChoice::default(),
        }
    }

    /// The configured constants.
    pub fn config(&self) -> &SchedulingConfig {
        &self.config
    }

    /// The current schedule choice.
    pub fn choice(&self) -> &ScheduleChoice {
        &self.choice
    }

    /// Whether publishing is currently scheduled rather than immediate.
    pub fn scheduled(&self) -> bool {
        self.choice.scheduled
    }

    /// The suggested slots offered to the user.
    pub fn slots(&self) -> &[TimeSlot] {
        &self.config.slots
    }

    /// Turn scheduled publishing on or off.
    ///
    /// Enabling with no date picked installs the current day; the chosen
    /// time and date survive a disable so re-enabling restores them.
    pub fn set_scheduled(&mut self, enabled: bool, now: DateTime<Utc>) {
        self.choice.scheduled = enabled;
        if enabled && self.choice.date.is_none() {
            self.choice.date = Some(now.date_naive());
        }
        debug!(scheduled = enabled, "schedule toggled");
    }

    /// Install the optimal publish time: `now` plus the configured offset.
    ///
    /// Accepting the suggestion also turns scheduling on, even when the
    /// workflow was set to publish immediately. Returns the installed date
    /// and time.
    pub fn suggest_optimal_time(&mut self, now: DateTime<Utc>) -> (NaiveDate, NaiveTime) {
        let target = now + Duration::hours(self.config.optimal_offset_hours);
        let date = target.date_naive();
        let time = hm(target.hour(), target.minute());
        self.choice.date = Some(date);
        self.choice.time = time;
        self.choice.scheduled = true;
        info!(
            offset_hours = self.config.optimal_offset_hours,
            %date,
            time = %format_hhmm(time),
            "optimal publish time installed"
        );
        (date, time)
    }

    /// Adopt a suggested slot's time. Leaves the scheduled flag and the
    /// chosen date alone.
    pub fn pick_slot(&mut self, index: usize) -> Result<(), WorkflowError> {
        let slot = self
            .config
            .slots
            .get(index)
            .ok_or_else(|| WorkflowError::new(WorkflowErrorKind::UnknownSlot(index)))?;
        self.choice.time = *slot.time();
        debug!(slot = index, label = %slot.label(), "slot time adopted");
        Ok(())
    }

    /// Pick a calendar date.
    pub fn set_date(&mut self, date: NaiveDate) {
        self.choice.date = Some(date);
    }

    /// Pick a wall-clock time.
    pub fn set_time(&mut self, time: NaiveTime) {
        self.choice.time = time;
    }

    /// The date and `HH:MM` time the publish payload should carry.
    ///
    /// Immediate publishing resolves to neither; scheduled publishing
    /// defaults the date to the current day when none was picked.
    pub fn resolved(&self, now: DateTime<Utc>) -> (Option<NaiveDate>, Option<String>) {
        if !self.choice.scheduled {
            return (None, None);
        }
        let date = self.choice.date.unwrap_or_else(|| now.date_naive());
        (Some(date), Some(format_hhmm(self.choice.time)))
    }
}

/// Zero-padded `HH:MM` rendering used in payloads and logs.
pub fn format_hhmm(time: NaiveTime) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 10, 0, 0).unwrap()
    }

    #[test]
    fn defaults_match_reference_constants() {
        let config = SchedulingConfig::default();
        assert_eq!(*config.optimal_offset_hours(), 26);
        let labels: Vec<&str> = config.slots().iter().map(|s| s.label().as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "high Facebook activity",
                "high Instagram activity",
                "high Twitter activity",
                "high general activity"
            ]
        );
        assert_eq!(*config.slots()[1].time(), hm(12, 0));
    }

    #[test]
    fn enabling_installs_current_day() {
        let mut policy = SchedulingPolicy::default();
        policy.set_scheduled(true, fixed_now());
        assert!(policy.scheduled());
        assert_eq!(
            *policy.choice().date(),
            Some(NaiveDate::from_ymd_opt(2025, 3, 10).unwrap())
        );
    }

    #[test]
    fn disabling_reverts_resolution_to_immediate() {
        let mut policy = SchedulingPolicy::default();
        policy.set_scheduled(true, fixed_now());
        policy.set_scheduled(false, fixed_now());
        assert_eq!(policy.resolved(fixed_now()), (None, None));
    }

    #[test]
    fn optimal_time_lands_offset_hours_ahead() {
        let mut policy = SchedulingPolicy::default();
        let (date, time) = policy.suggest_optimal_time(fixed_now());
        // 2025-03-10 10:00 plus 26 hours is 2025-03-11 12:00.
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 3, 11).unwrap());
        assert_eq!(time, hm(12, 0));
        assert_eq!(*policy.choice().date(), Some(date));
    }

    #[test]
    fn optimal_time_forces_scheduled_on() {
        let mut policy = SchedulingPolicy::default();
        assert!(!policy.scheduled());
        policy.suggest_optimal_time(fixed_now());
        assert!(policy.scheduled());
    }

    #[test]
    fn optimal_time_is_zero_padded_in_resolution() {
        let mut policy = SchedulingPolicy::default();
        let early = Utc.with_ymd_and_hms(2025, 1, 1, 5, 5, 0).unwrap();
        policy.suggest_optimal_time(early);
        let (_, time) = policy.resolved(early);
        assert_eq!(time.as_deref(), Some("07:05"));
    }

    #[test]
    fn optimal_time_respects_configured_offset() {
        let config = SchedulingConfig::default().with_optimal_offset_hours(48);
        let mut policy = SchedulingPolicy::new(config);
        let (date, time) = policy.suggest_optimal_time(fixed_now());
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 3, 12).unwrap());
        assert_eq!(time, hm(10, 0));
    }

    #[test]
    fn slot_pick_sets_time_only() {
        let mut policy = SchedulingPolicy::default();
        policy.pick_slot(1).unwrap();
        assert_eq!(*policy.choice().time(), hm(12, 0));
        // The scheduled flag is untouched; slots suggest a time, they do
        // not opt in to scheduling.
        assert!(!policy.scheduled());
        assert!(policy.choice().date().is_none());
    }

    #[test]
    fn slot_index_out_of_range_is_refused() {
        let mut policy = SchedulingPolicy::default();
        let err = policy.pick_slot(9).unwrap_err();
        assert!(err.to_string().contains("index 9"));
    }

    #[test]
    fn scheduled_resolution_carries_slot_time_and_current_day() {
        let mut policy = SchedulingPolicy::default();
        policy.set_scheduled(true, fixed_now());
        policy.pick_slot(3).unwrap();
        let (date, time) = policy.resolved(fixed_now());
        assert_eq!(date, Some(NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()));
        assert_eq!(time.as_deref(), Some("20:00"));
    }

    #[test]
    fn manual_date_and_time_are_kept() {
        let mut policy = SchedulingPolicy::default();
        policy.set_scheduled(true, fixed_now());
        policy.set_date(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
        policy.set_time(hm(9, 15));
        let (date, time) = policy.resolved(fixed_now());
        assert_eq!(date, Some(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()));
        assert_eq!(time.as_deref(), Some("09:15"));
    }
}
