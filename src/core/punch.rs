//! Punch mutations: record, edit and delete. Every operation is a
//! load-mutate-save of the whole record map and returns the updated day.

use crate::errors::{AppError, AppResult};
use crate::models::{DayRecord, PunchKind};
use crate::store::{self, RecordStore};
use crate::utils::date;
use chrono::{NaiveDate, NaiveTime};

pub struct PunchLogic;

impl PunchLogic {
    /// Record an entry/exit punch for `d`, keeping any special-day marking.
    pub fn record(
        store: &RecordStore,
        d: NaiveDate,
        kind: PunchKind,
        time: NaiveTime,
    ) -> AppResult<DayRecord> {
        let mut map = store.load_map()?;
        let key = date::date_key(d);

        let mut record = store::day_or_default(&map, &key);
        record.add_punch(kind, time);

        map.insert(key, record.clone());
        store.save_map(&map)?;
        Ok(record)
    }

    /// Move the punch with the given id to a new time.
    pub fn edit(
        store: &RecordStore,
        d: NaiveDate,
        id: u32,
        new_time: NaiveTime,
    ) -> AppResult<DayRecord> {
        let mut map = store.load_map()?;
        let key = date::date_key(d);

        let mut record = store::day_or_default(&map, &key);
        let punch = record
            .punch_mut(id)
            .ok_or(AppError::PunchNotFound { date: key.clone(), id })?;
        punch.time = new_time;

        map.insert(key, record.clone());
        store.save_map(&map)?;
        Ok(record)
    }

    /// Delete the punch with the given id. If the day ends up empty its key
    /// is pruned from storage on save.
    pub fn delete(store: &RecordStore, d: NaiveDate, id: u32) -> AppResult<DayRecord> {
        let mut map = store.load_map()?;
        let key = date::date_key(d);

        let mut record = store::day_or_default(&map, &key);
        if !record.remove_punch(id) {
            return Err(AppError::PunchNotFound { date: key, id });
        }

        map.insert(key, record.clone());
        store.save_map(&map)?;
        Ok(record)
    }
}
