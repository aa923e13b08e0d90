//! Special-day mutations: marking a day as vacation/holiday and clearing
//! the marking again. Punches on the day are always preserved.

use crate::config::Settings;
use crate::errors::AppResult;
use crate::models::{DayRecord, SpecialDay};
use crate::store::{self, RecordStore};
use crate::utils::date;
use chrono::NaiveDate;

pub struct SpecialLogic;

impl SpecialLogic {
    /// Mark `d` as vacation or holiday. `minutes` is only meaningful for
    /// vacation days and is clamped to the daily target at write time.
    pub fn set(
        store: &RecordStore,
        d: NaiveDate,
        kind: SpecialDay,
        minutes: Option<i64>,
        settings: &Settings,
    ) -> AppResult<DayRecord> {
        let mut map = store.load_map()?;
        let key = date::date_key(d);

        let mut record = store::day_or_default(&map, &key);
        record.set_special(kind, minutes, settings.daily_target_minutes());

        map.insert(key, record.clone());
        store.save_map(&map)?;
        Ok(record)
    }

    /// Remove the special-day marking from `d`.
    pub fn clear(store: &RecordStore, d: NaiveDate) -> AppResult<DayRecord> {
        let mut map = store.load_map()?;
        let key = date::date_key(d);

        let mut record = store::day_or_default(&map, &key);
        record.clear_special();

        map.insert(key, record.clone());
        store.save_map(&map)?;
        Ok(record)
    }
}
