use chrono::NaiveDateTime;

const MILLISECONDS_IN_ONE_DAY: i64 = 24 * 60 * 60 * 1000;

/// Random v4 identifier, used for merchant uids
pub fn get_uuid() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Whole days from `start` to `end`, rounded towards negative infinity
pub fn period_at_date(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end - start).num_milliseconds().div_euclid(MILLISECONDS_IN_ONE_DAY)
}
