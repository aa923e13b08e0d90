use crate::utils::time;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PunchKind {
    Entry,
    Exit,
}

impl PunchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PunchKind::Entry => "entry",
            PunchKind::Exit => "exit",
        }
    }

    pub fn is_entry(&self) -> bool {
        matches!(self, PunchKind::Entry)
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, PunchKind::Exit)
    }
}

/// One recorded entry/exit event. The id is assigned once when the punch is
/// created and never changes; edits replace the time, never the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Punch {
    pub id: u32,
    pub kind: PunchKind,
    #[serde(with = "time::hhmm")]
    pub time: NaiveTime,
}

impl Punch {
    /// Minutes since midnight; the sort key for pairing.
    pub fn minutes(&self) -> i64 {
        time::minutes_of(self.time)
    }

    pub fn time_str(&self) -> String {
        time::format_time(self.time)
    }
}
