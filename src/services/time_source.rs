/// Wall-clock source for the actions.
/// Either the system local time or a fixed UTC offset such as `+8:00`.
use chrono::{FixedOffset, Local, NaiveDateTime, Utc};
use tracing::debug;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeSource {
    #[default]
    Local,
    Fixed(FixedOffset),
}

impl TimeSource {
    /// Current wall-clock time in this source's zone.
    pub fn now(&self) -> NaiveDateTime {
        match self {
            TimeSource::Local => Local::now().naive_local(),
            TimeSource::Fixed(offset) => Utc::now().with_timezone(offset).naive_local(),
        }
    }
}

impl std::str::FromStr for TimeSource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("local") {
            return Ok(TimeSource::Local);
        }
        let offset = parse_utc_offset(s)?;
        debug!("Using fixed UTC offset {}", offset);
        Ok(TimeSource::Fixed(offset))
    }
}

/// Parse `+8`, `+8:00`, `-03:30`, `+0530` or `utc`.
pub fn parse_utc_offset(s: &str) -> Result<FixedOffset> {
    let invalid = || Error::InvalidUtcOffset(s.to_string());
    let trimmed = s.trim();

    if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("z") {
        return FixedOffset::east_opt(0).ok_or_else(invalid);
    }

    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'+') => (1, &trimmed[1..]),
        Some(b'-') => (-1, &trimmed[1..]),
        _ => return Err(invalid()),
    };

    let (hours, minutes) = match rest.split_once(':') {
        Some((h, m)) => (h, m),
        None if rest.len() == 4 && rest.is_ascii() => rest.split_at(2),
        None => (rest, "0"),
    };

    let hours: i32 = hours.parse().map_err(|_| invalid())?;
    let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
    if !(0..=23).contains(&hours) || !(0..=59).contains(&minutes) {
        return Err(invalid());
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_utc_offset() {
        assert_eq!(parse_utc_offset("+8:00").unwrap().local_minus_utc(), 8 * 3600);
        assert_eq!(parse_utc_offset("+8").unwrap().local_minus_utc(), 8 * 3600);
        assert_eq!(
            parse_utc_offset("-03:30").unwrap().local_minus_utc(),
            -(3 * 3600 + 30 * 60)
        );
        assert_eq!(
            parse_utc_offset("+0530").unwrap().local_minus_utc(),
            5 * 3600 + 30 * 60
        );
        assert_eq!(parse_utc_offset("UTC").unwrap().local_minus_utc(), 0);
        assert!(parse_utc_offset("8:00").is_err());
        assert!(parse_utc_offset("+25:00").is_err());
        assert!(parse_utc_offset("+1:75").is_err());
    }

    #[test]
    fn test_time_source_from_str() {
        assert_eq!("local".parse::<TimeSource>().unwrap(), TimeSource::Local);
        assert!(matches!(
            "+2:00".parse::<TimeSource>().unwrap(),
            TimeSource::Fixed(_)
        ));
        assert!("mars".parse::<TimeSource>().is_err());
    }

    #[test]
    fn test_fixed_offset_now() {
        let utc: TimeSource = "+0:00".parse().unwrap();
        let ahead: TimeSource = "+2:00".parse().unwrap();
        let diff = ahead.now() - utc.now();
        assert!((diff.num_seconds() - 7200).abs() <= 1);
    }
}
