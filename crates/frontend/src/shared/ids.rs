//! Document number generation for client-created records.
//!
//! Numbers are derived from the current timestamp the same way the mock
//! backend produced them: a prefix plus the millisecond clock digits.

use chrono::Local;

/// "POC" + миллисекунды эпохи, например "POC1768736164879".
pub fn purchase_order_id() -> String {
    format!("POC{}", Local::now().timestamp_millis())
}

/// Номер партии приёмки: "202601061718" (ГГГГММДДЧЧММ локального времени).
pub fn batch_id() -> String {
    Local::now().format("%Y%m%d%H%M").to_string()
}

/// Текущая дата-время для поля создания записи.
pub fn now_datetime_label() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
