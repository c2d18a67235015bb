//! 时间工具函数：营业时区转换
//!
//! 所有 "今天" / 营业日 (business_date, `YYYY-MM-DD`) 都按同一个营业时区计算，
//! 每个请求只取一次当前日期。repository 层只接收 `i64` Unix millis 或日期字符串。

use chrono::{NaiveDate, NaiveTime};
use chrono_tz::Tz;

use super::{AppError, AppResult, ErrorCode};

/// Longest range accepted by range queries, in days (inclusive)
pub const MAX_RANGE_DAYS: i64 = 366;

/// 解析日期字符串 (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// 解析时区名 (IANA, 如 `Asia/Yangon`)
pub fn parse_timezone(name: &str) -> Option<Tz> {
    name.trim().parse::<Tz>().ok()
}

/// 营业时区的今天
pub fn today(tz: Tz) -> NaiveDate {
    chrono::Utc::now().with_timezone(&tz).date_naive()
}

/// 营业日字符串 (YYYY-MM-DD)
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// 日期 + 时间 → Unix millis (营业时区)
///
/// DST gap fallback: 如果本地时间不存在 (夏令时跳跃)，fallback 到 UTC。
fn date_time_to_millis(date: NaiveDate, time: NaiveTime, tz: Tz) -> i64 {
    let naive = date.and_time(time);
    naive
        .and_local_timezone(tz)
        .latest()
        .map(|dt| dt.timestamp_millis())
        .unwrap_or_else(|| naive.and_utc().timestamp_millis())
}

/// 日期开始 (00:00:00) → Unix millis (营业时区)
pub fn day_start_millis(date: NaiveDate, tz: Tz) -> i64 {
    date_time_to_millis(date, NaiveTime::MIN, tz)
}

/// 日期结束 → 次日 00:00:00 的 Unix millis (营业时区)
///
/// 返回次日零点时间戳，调用方使用 `< end` (不含) 语义。
pub fn day_end_millis(date: NaiveDate, tz: Tz) -> i64 {
    let next_day = date.succ_opt().unwrap_or(date);
    date_time_to_millis(next_day, NaiveTime::MIN, tz)
}

/// Every date in `[start, end]`, rejecting inverted or oversized ranges
pub fn dates_in_range(start: NaiveDate, end: NaiveDate) -> AppResult<Vec<NaiveDate>> {
    if start > end {
        return Err(AppError::with_message(
            ErrorCode::InvalidDateRange,
            format!("start date {start} is after end date {end}"),
        ));
    }
    let days = (end - start).num_days() + 1;
    if days > MAX_RANGE_DAYS {
        return Err(AppError::with_message(
            ErrorCode::InvalidDateRange,
            format!("range of {days} days exceeds {MAX_RANGE_DAYS}"),
        ));
    }
    Ok(start.iter_days().take(days as usize).collect())
}
