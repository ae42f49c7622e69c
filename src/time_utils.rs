use js_sys::Date;
use wasm_bindgen::JsValue;

use crate::domain::market_data::Timestamp;

/// Parses a backend timestamp with the browser's `Date`. `None` when empty or unparseable.
pub fn to_date(timestamp: &Timestamp) -> Option<Date> {
    if timestamp.is_empty() {
        return None;
    }
    let date = match timestamp {
        Timestamp::Millis(ms) => Date::new(&JsValue::from_f64(*ms)),
        Timestamp::Text(text) => Date::new(&JsValue::from_str(text)),
    };
    (!date.get_time().is_nan()).then_some(date)
}

/// Local date and time, e.g. `17/10/2026, 14:05:00`; raw text when unparseable.
pub fn format_timestamp(timestamp: &Timestamp) -> String {
    match to_date(timestamp) {
        Some(date) => String::from(date.to_locale_string("default", &JsValue::UNDEFINED)),
        None => timestamp.raw(),
    }
}

/// Local `HH:MM`, used on the chart axis and in the news feed.
pub fn format_hour_minute(timestamp: &Timestamp) -> String {
    match to_date(timestamp) {
        Some(date) => format!("{:02}:{:02}", date.get_hours(), date.get_minutes()),
        None => timestamp.raw(),
    }
}
