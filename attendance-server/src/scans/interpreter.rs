//! Scan Interpreter
//!
//! Pure decision function over an employee's current status, shift schedule,
//! the scanned QR type and the local wall-clock time. It never touches storage:
//! the caller persists the returned snapshot and the scan outcome.
//!
//! | QR type | keyed on | transition | window |
//! |---------|----------|------------|--------|
//! | checkin-out | `offline` | -> online / In office | `now <= shift_start + 10` |
//! | checkin-out | `online` | -> offline / Not in office | `now >= shift_end - 10` |
//! | lunch-break | `In office` | -> On lunch | `lunch_start ± 10` |
//! | lunch-break | `On lunch` | -> In office | `lunch_end ± 10` |
//!
//! Check-in and check-out windows are one-sided, lunch windows two-sided.

use std::fmt;

use chrono::{DateTime, TimeZone, Timelike, Utc};
use shared::models::{
    ClockTime, DEFAULT_LUNCH_END, DEFAULT_LUNCH_START, DEFAULT_SHIFT_END, DEFAULT_SHIFT_START,
    Location, QrType, ScanStatus, WorkStatus, format_minutes,
};
use thiserror::Error;

/// Half-width of an accepted window around a schedule boundary (minutes)
pub const TOLERANCE: i32 = 10;

/// Mutable part of an employee that scans drive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusSnapshot {
    pub work_status: WorkStatus,
    pub location: Location,
    pub last_check_in: Option<DateTime<Utc>>,
}

/// Wall-clock shift and lunch boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub shift_start: ClockTime,
    pub shift_end: ClockTime,
    pub lunch_start: ClockTime,
    pub lunch_end: ClockTime,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            shift_start: DEFAULT_SHIFT_START,
            shift_end: DEFAULT_SHIFT_END,
            lunch_start: DEFAULT_LUNCH_START,
            lunch_end: DEFAULT_LUNCH_END,
        }
    }
}

/// Transition a scan asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanAction {
    CheckIn,
    CheckOut,
    LunchStart,
    LunchEnd,
}

impl fmt::Display for ScanAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::CheckIn => "Check-in",
            Self::CheckOut => "Check-out",
            Self::LunchStart => "Lunch start",
            Self::LunchEnd => "Lunch end",
        })
    }
}

/// Why a scan did not produce a transition
///
/// Faults are data: they end up in the scan record's `result`, never as a
/// failed request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanFault {
    #[error("{action} allowed only between {from} and {to}. Now: {now}.")]
    OutOfWindow {
        action: ScanAction,
        from: String,
        to: String,
        now: String,
    },

    #[error("Invalid status for {action}: {state}")]
    InvalidStateForAction { action: &'static str, state: String },

    #[error("Unknown QR code type: {qr_code}")]
    UnknownQrType { qr_code: String },

    #[error("Employee not found")]
    EmployeeNotFound,

    #[error("Processing error: {0}")]
    Processing(String),
}

impl ScanFault {
    fn out_of_window(action: ScanAction, boundary: i32, now_minutes: i32) -> Self {
        Self::OutOfWindow {
            action,
            from: format_minutes(boundary - TOLERANCE),
            to: format_minutes(boundary + TOLERANCE),
            now: format_minutes(now_minutes),
        }
    }

    /// Final scan status this fault leads to
    pub fn outcome(&self) -> ScanStatus {
        match self {
            Self::InvalidStateForAction { .. } => ScanStatus::Processed,
            _ => ScanStatus::Error,
        }
    }
}

/// Result of interpreting one scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpretation {
    pub status: ScanStatus,
    pub message: String,
    /// New status when the scan caused a transition, `None` leaves the employee untouched
    pub next: Option<StatusSnapshot>,
}

impl Interpretation {
    fn accepted(message: String, next: StatusSnapshot) -> Self {
        Self {
            status: ScanStatus::Processed,
            message,
            next: Some(next),
        }
    }

    pub fn rejected(fault: ScanFault) -> Self {
        Self {
            status: fault.outcome(),
            message: fault.to_string(),
            next: None,
        }
    }

    /// Snapshot to persist, only when it differs from `current`
    pub fn changed_from(&self, current: &StatusSnapshot) -> Option<StatusSnapshot> {
        self.next.filter(|next| next != current)
    }
}

fn minutes_of_day<Z: TimeZone>(now: &DateTime<Z>) -> i32 {
    (now.hour() * 60 + now.minute()) as i32
}

fn within(boundary: i32, now_minutes: i32) -> bool {
    boundary - TOLERANCE <= now_minutes && now_minutes <= boundary + TOLERANCE
}

/// Interpret a scan at local time `now`
///
/// `now` must already be in the business time zone; only its wall-clock
/// hour and minute take part in window checks.
pub fn interpret<Z: TimeZone>(
    current: &StatusSnapshot,
    schedule: &Schedule,
    qr_type: QrType,
    qr_code: &str,
    now: &DateTime<Z>,
) -> Interpretation {
    let now_minutes = minutes_of_day(now);
    let now_label = format_minutes(now_minutes);

    match qr_type {
        QrType::CheckinOut => match current.work_status {
            WorkStatus::Offline => {
                let start = schedule.shift_start.total_minutes();
                if now_minutes <= start + TOLERANCE {
                    Interpretation::accepted(
                        format!("Checked in at {now_label}"),
                        StatusSnapshot {
                            work_status: WorkStatus::Online,
                            location: Location::InOffice,
                            last_check_in: Some(now.with_timezone(&Utc)),
                        },
                    )
                } else {
                    Interpretation::rejected(ScanFault::out_of_window(
                        ScanAction::CheckIn,
                        start,
                        now_minutes,
                    ))
                }
            }
            WorkStatus::Online => {
                let end = schedule.shift_end.total_minutes();
                if now_minutes >= end - TOLERANCE {
                    Interpretation::accepted(
                        format!("Checked out at {now_label}"),
                        StatusSnapshot {
                            work_status: WorkStatus::Offline,
                            location: Location::NotInOffice,
                            ..*current
                        },
                    )
                } else {
                    Interpretation::rejected(ScanFault::out_of_window(
                        ScanAction::CheckOut,
                        end,
                        now_minutes,
                    ))
                }
            }
        },
        QrType::LunchBreak => match current.location {
            Location::InOffice => {
                let start = schedule.lunch_start.total_minutes();
                if within(start, now_minutes) {
                    Interpretation::accepted(
                        format!("Lunch started at {now_label}"),
                        StatusSnapshot {
                            location: Location::OnLunch,
                            ..*current
                        },
                    )
                } else {
                    Interpretation::rejected(ScanFault::out_of_window(
                        ScanAction::LunchStart,
                        start,
                        now_minutes,
                    ))
                }
            }
            Location::OnLunch => {
                let end = schedule.lunch_end.total_minutes();
                if within(end, now_minutes) {
                    Interpretation::accepted(
                        format!("Lunch ended at {now_label}"),
                        StatusSnapshot {
                            location: Location::InOffice,
                            ..*current
                        },
                    )
                } else {
                    Interpretation::rejected(ScanFault::out_of_window(
                        ScanAction::LunchEnd,
                        end,
                        now_minutes,
                    ))
                }
            }
            Location::NotInOffice => {
                Interpretation::rejected(ScanFault::InvalidStateForAction {
                    action: "lunch",
                    state: current.location.to_string(),
                })
            }
        },
        QrType::Unknown => Interpretation::rejected(ScanFault::UnknownQrType {
            qr_code: qr_code.to_string(),
        }),
    }
}
