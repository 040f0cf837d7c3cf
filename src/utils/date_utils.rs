use chrono::{DateTime, Utc};

/// Stored instant, or "now" when nothing was stored.
pub fn materialize_or_now(stored: Option<bson::DateTime>) -> DateTime<Utc> {
    stored.map(bson::DateTime::to_chrono).unwrap_or_else(Utc::now)
}

/// Stored instant when one exists; never invents a value.
pub fn materialize_if_present(stored: Option<bson::DateTime>) -> Option<DateTime<Utc>> {
    stored.map(bson::DateTime::to_chrono)
}

/// Absent stays absent and a real instant is kept. A stored zero instant is
/// read as "present but unset" and becomes "now"; this is how blog records
/// are interpreted here, since the stored form carries no separate flag.
pub fn materialize_if_truthy(stored: Option<bson::DateTime>) -> Option<DateTime<Utc>> {
    stored.map(|value| {
        if value.timestamp_millis() == 0 {
            Utc::now()
        } else {
            value.to_chrono()
        }
    })
}
