use chrono::Local;

/// Local date and time, as stamped on students and results.
pub fn now_timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Local date, as printed on certificates.
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}
