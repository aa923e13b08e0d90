pub mod day_record;
pub mod punch;
pub mod summary;

pub use day_record::{DayRecord, SpecialDay};
pub use punch::{Punch, PunchKind};
pub use summary::{DaySummary, WeekSummary};
