//! 时间工具函数 — 业务日期与打卡时刻解析
//!
//! 业务日期 (YYYY-MM-DD) 和打卡时刻 (HH:MM) 在 API handler 层解析校验，
//! repository 层只接收已验证的 TEXT 值和 `i64` Unix millis 审计时间戳。

use chrono::{NaiveDate, NaiveTime};

use super::{AppError, AppResult};

/// 解析日期字符串 (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// 解析打卡时刻字符串 (HH:MM)
pub fn parse_clock(clock: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(clock, "%H:%M")
        .map_err(|_| AppError::validation(format!("Invalid time format: {}", clock)))
}

/// 验证日期区间 from <= to
pub fn validate_date_range(from: &str, to: &str) -> AppResult<()> {
    let from_date = parse_date(from)?;
    let to_date = parse_date(to)?;
    if from_date > to_date {
        return Err(AppError::validation(format!(
            "Invalid range: {} is after {}",
            from, to
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_iso_dates() {
        assert!(parse_date("2026-01-31").is_ok());
        assert!(parse_date("31/01/2026").is_err());
        assert!(parse_date("2026-13-01").is_err());
    }

    #[test]
    fn parse_clock_accepts_hh_mm() {
        assert!(parse_clock("09:30").is_ok());
        assert!(parse_clock("25:00").is_err());
        assert!(parse_clock("9.30").is_err());
    }

    #[test]
    fn range_requires_from_not_after_to() {
        assert!(validate_date_range("2026-02-01", "2026-02-03").is_ok());
        assert!(validate_date_range("2026-02-03", "2026-02-03").is_ok());
        assert!(validate_date_range("2026-02-04", "2026-02-03").is_err());
    }
}
