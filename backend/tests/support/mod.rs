#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use observatory_stats::models::{CatalogEntry, CompositePhoto, FrameRecord, ObjectId};
use std::sync::Mutex;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with one environment variable set (or removed), restoring the
/// previous value afterwards even on panic. Calls are serialized because the
/// environment is process-global.
pub fn with_env_var<F, R>(key: &str, value: Option<&str>, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let _restore = RestoreVar {
        key: key.to_string(),
        previous: std::env::var(key).ok(),
    };
    match value {
        Some(v) => std::env::set_var(key, v),
        None => std::env::remove_var(key),
    }
    f()
}

struct RestoreVar {
    key: String,
    previous: Option<String>,
}

impl Drop for RestoreVar {
    fn drop(&mut self) {
        match self.previous.take() {
            Some(v) => std::env::set_var(&self.key, v),
            None => std::env::remove_var(&self.key),
        }
    }
}

pub fn night(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 10, day, hour, 0, 0).unwrap()
}

pub fn create_test_frame(object: &str, filter: &str, exposure: f64, day: u32) -> FrameRecord {
    FrameRecord {
        object_id: ObjectId::new(object),
        filter_label: filter.to_string(),
        exposure_seconds: exposure,
        ra: 10.684,
        dec: 41.269,
        focus_metric: 2.1,
        sky_background_metric: 512.0,
        captured_at: night(day, 23),
    }
}

pub fn create_test_photo(object: &str, day: u32) -> CompositePhoto {
    CompositePhoto {
        object_id: ObjectId::new(object),
        date: night(day, 12),
        file: format!("{}_{}", object.to_lowercase().replace(' ', "_"), day),
        ext: "jpg".to_string(),
    }
}

pub fn sample_catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new("M31")
            .with_title("Andromeda Galaxy")
            .with_category("galaxies"),
        CatalogEntry::new("M42")
            .with_title("Orion Nebula")
            .with_category("nebulae"),
        CatalogEntry::new("NGC 7000")
            .with_title("North America Nebula")
            .with_category("nebulae"),
    ]
}
