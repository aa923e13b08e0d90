use super::punch::{Punch, PunchKind};
use chrono::NaiveTime;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SpecialDay {
    Vacation,
    Holiday,
}

impl SpecialDay {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpecialDay::Vacation => "Vacation",
            SpecialDay::Holiday => "Holiday",
        }
    }
}

/// One calendar day's persisted data.
///
/// Invariants, enforced here at write time:
/// - `vacation_minutes` is present only when `special_day == Some(Vacation)`
///   and is clamped to `[0, daily_target]`.
/// - Punches may coexist with a special-day marking (a day can be partly
///   worked and partly credited).
/// - `next_id` only ever grows, so a deleted punch id is never reissued
///   within the day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    #[serde(default)]
    pub punches: Vec<Punch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_day: Option<SpecialDay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vacation_minutes: Option<i64>,
    #[serde(default)]
    next_id: u32,
}

impl DayRecord {
    /// A record with no punches and no special-day marking carries no
    /// information and is pruned from storage on save.
    pub fn is_empty(&self) -> bool {
        self.punches.is_empty() && self.special_day.is_none()
    }

    /// Append a punch with a fresh stable id; returns the id.
    pub fn add_punch(&mut self, kind: PunchKind, time: NaiveTime) -> u32 {
        self.next_id += 1;
        let id = self.next_id;
        self.punches.push(Punch { id, kind, time });
        id
    }

    pub fn punch_mut(&mut self, id: u32) -> Option<&mut Punch> {
        self.punches.iter_mut().find(|p| p.id == id)
    }

    /// Remove the punch with the given id; true if it existed.
    pub fn remove_punch(&mut self, id: u32) -> bool {
        let before = self.punches.len();
        self.punches.retain(|p| p.id != id);
        self.punches.len() != before
    }

    /// Punches in chronological order. The sort is stable, so punches sharing
    /// a time keep their insertion order.
    pub fn sorted_punches(&self) -> Vec<Punch> {
        let mut sorted = self.punches.clone();
        sorted.sort_by_key(|p| p.minutes());
        sorted
    }

    /// Mark the day as vacation or holiday, keeping any recorded punches.
    /// Vacation minutes are clamped to `[0, daily_target]` here so the clamp
    /// is a storage invariant rather than a UI nicety. Total over any
    /// `daily_target`: a non-positive target clamps to zero credited minutes.
    pub fn set_special(&mut self, kind: SpecialDay, minutes: Option<i64>, daily_target: i64) {
        self.special_day = Some(kind);
        self.vacation_minutes = match kind {
            SpecialDay::Vacation => minutes.map(|m| m.max(0).min(daily_target.max(0))),
            SpecialDay::Holiday => None,
        };
    }

    /// Drop the special-day marking; punches survive.
    pub fn clear_special(&mut self) {
        self.special_day = None;
        self.vacation_minutes = None;
    }
}
