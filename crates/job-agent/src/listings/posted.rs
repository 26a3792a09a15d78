use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime};

/// Posting time as advertised by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostedDate {
    /// Relative text such as "2 days ago", stored as the elapsed age.
    Ago(Duration),
    /// Absolute timestamp (ISO date or RFC 3339).
    At(NaiveDateTime),
    Unknown,
}

impl PostedDate {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Unknown;
        }

        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            if let Some(at) = date.and_hms_opt(0, 0, 0) {
                return Self::At(at);
            }
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Self::At(dt.naive_utc());
        }

        parse_relative(&trimmed.to_ascii_lowercase())
            .map(Self::Ago)
            .unwrap_or(Self::Unknown)
    }

    /// Resolves the posting moment against the start of `as_of`.
    pub fn resolve(&self, as_of: NaiveDate) -> Option<NaiveDateTime> {
        match self {
            PostedDate::Ago(age) => as_of
                .and_hms_opt(0, 0, 0)
                .and_then(|anchor| anchor.checked_sub_signed(*age)),
            PostedDate::At(at) => Some(*at),
            PostedDate::Unknown => None,
        }
    }
}

fn parse_relative(text: &str) -> Option<Duration> {
    match text {
        "just now" | "today" | "now" => return Some(Duration::zero()),
        "yesterday" => return Some(Duration::days(1)),
        _ => {}
    }

    let body = text.strip_suffix("ago")?.trim();
    let mut words = body.split_whitespace();
    let amount = match words.next()? {
        "a" | "an" => 1,
        count => count.trim_end_matches('+').parse::<i64>().ok()?,
    };
    let unit = words.next()?;
    if words.next().is_some() {
        return None;
    }

    let per_unit = match unit.trim_end_matches('s') {
        "minute" | "min" => Duration::minutes(1),
        "hour" | "hr" => Duration::hours(1),
        "day" => Duration::days(1),
        "week" => Duration::weeks(1),
        "month" => Duration::days(30),
        "year" => Duration::days(365),
        _ => return None,
    };

    per_unit.checked_mul(i32::try_from(amount).ok()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 18).expect("valid date")
    }

    #[test]
    fn parses_relative_ages() {
        assert_eq!(PostedDate::parse("2 days ago"), PostedDate::Ago(Duration::days(2)));
        assert_eq!(PostedDate::parse("1 week ago"), PostedDate::Ago(Duration::weeks(1)));
        assert_eq!(PostedDate::parse("an hour ago"), PostedDate::Ago(Duration::hours(1)));
        assert_eq!(PostedDate::parse("30+ days ago"), PostedDate::Ago(Duration::days(30)));
        assert_eq!(PostedDate::parse("Yesterday"), PostedDate::Ago(Duration::days(1)));
    }

    #[test]
    fn parses_absolute_dates() {
        let expected = as_of().and_hms_opt(0, 0, 0).expect("midnight");
        assert_eq!(PostedDate::parse("2025-10-18"), PostedDate::At(expected));
        assert!(matches!(
            PostedDate::parse("2025-10-17T09:30:00Z"),
            PostedDate::At(_)
        ));
    }

    #[test]
    fn unknown_text_does_not_resolve() {
        let posted = PostedDate::parse("sometime last spring");
        assert_eq!(posted, PostedDate::Unknown);
        assert!(posted.resolve(as_of()).is_none());
    }

    #[test]
    fn relative_ages_resolve_before_reference_date() {
        let resolved = PostedDate::parse("3 days ago")
            .resolve(as_of())
            .expect("resolves");
        assert_eq!(resolved.date(), NaiveDate::from_ymd_opt(2025, 10, 15).expect("valid"));
    }
}
