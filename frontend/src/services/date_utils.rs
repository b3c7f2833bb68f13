use chrono::{
    DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc,
    Weekday,
};

/// A backend timestamp resolved in the display time zone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalTimestamp {
    /// Absolute instant, used for ordering
    pub instant: DateTime<Utc>,
    /// Wall-clock time in the display zone, used for calendar placement
    pub wall: NaiveDateTime,
}

impl LocalTimestamp {
    pub fn date(&self) -> NaiveDate {
        self.wall.date()
    }
}

/// Resolve a backend timestamp in `tz`.
///
/// Timestamps with an offset (`2025-06-25T08:00:00-04:00`, `...Z`) are
/// converted into the zone; naive ones (`2025-06-25T08:00:00`, the FastAPI
/// default) are read as wall-clock time in the zone. A naive time that falls
/// in a daylight-saving gap is moved forward an hour, ambiguous ones take the
/// earlier instant.
pub fn resolve_timestamp<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<LocalTimestamp> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Some(with_offset) = parse_with_offset(raw) {
        return Some(LocalTimestamp {
            instant: with_offset.with_timezone(&Utc),
            wall: with_offset.with_timezone(tz).naive_local(),
        });
    }

    let naive = parse_naive(raw)?;
    let instant = match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        LocalResult::None => tz
            .from_local_datetime(&(naive + Duration::hours(1)))
            .earliest()?
            .with_timezone(&Utc),
    };
    Some(LocalTimestamp { instant, wall: naive })
}

fn parse_with_offset(raw: &str) -> Option<DateTime<chrono::FixedOffset>> {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z"))
        .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%z"))
        .ok()
}

fn parse_naive(raw: &str) -> Option<NaiveDateTime> {
    const FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];

    FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

/// Today in the browser's local zone
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a `<input type="date">` value
pub fn parse_input_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Parse a `<input type="time">` value (seconds optional)
pub fn parse_input_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .ok()
}

pub fn to_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn to_iso_datetime(value: NaiveDateTime) -> String {
    value.format("%Y-%m-%dT%H:%M:%S").to_string()
}

pub fn month_name_es(month: u32) -> &'static str {
    match month {
        1 => "enero", 2 => "febrero", 3 => "marzo", 4 => "abril",
        5 => "mayo", 6 => "junio", 7 => "julio", 8 => "agosto",
        9 => "septiembre", 10 => "octubre", 11 => "noviembre", 12 => "diciembre",
        _ => "mes inválido",
    }
}

pub fn weekday_short_es(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Lun",
        Weekday::Tue => "Mar",
        Weekday::Wed => "Mié",
        Weekday::Thu => "Jue",
        Weekday::Fri => "Vie",
        Weekday::Sat => "Sáb",
        Weekday::Sun => "Dom",
    }
}

pub fn weekday_name_es(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "lunes",
        Weekday::Tue => "martes",
        Weekday::Wed => "miércoles",
        Weekday::Thu => "jueves",
        Weekday::Fri => "viernes",
        Weekday::Sat => "sábado",
        Weekday::Sun => "domingo",
    }
}

/// e.g. "miércoles, 25 de junio de 2025"
pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{}, {} de {} de {}",
        weekday_name_es(date.weekday()),
        date.day(),
        month_name_es(date.month()),
        date.year()
    )
}

/// e.g. "25/06/2025"
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Title for a week header. The month and year are only repeated when the
/// week crosses them.
pub fn format_week_title(start: NaiveDate, end: NaiveDate) -> String {
    if start.year() != end.year() {
        format!(
            "Semana del {} de {} de {} al {} de {} de {}",
            start.day(),
            month_name_es(start.month()),
            start.year(),
            end.day(),
            month_name_es(end.month()),
            end.year()
        )
    } else if start.month() != end.month() {
        format!(
            "Semana del {} de {} al {} de {} de {}",
            start.day(),
            month_name_es(start.month()),
            end.day(),
            month_name_es(end.month()),
            end.year()
        )
    } else {
        format!(
            "Semana del {} al {} de {} de {}",
            start.day(),
            end.day(),
            month_name_es(end.month()),
            end.year()
        )
    }
}

/// e.g. "08:30"
pub fn format_time(value: NaiveDateTime) -> String {
    value.format("%H:%M").to_string()
}

/// Compact duration: "45m", "2h", "1h 30m"
pub fn format_duration(minutes: i64) -> String {
    if minutes <= 0 {
        return "—".to_string();
    }
    let hours = minutes / 60;
    let rest = minutes % 60;
    match (hours, rest) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}

/// "25/06/2025 08:30" in `tz`, or the raw text when it cannot be parsed
pub fn format_timestamp_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> String {
    match resolve_timestamp(raw, tz) {
        Some(resolved) => format!(
            "{} {}",
            format_short_date(resolved.date()),
            format_time(resolved.wall)
        ),
        None => raw.to_string(),
    }
}

pub fn format_timestamp(raw: &str) -> String {
    format_timestamp_in(raw, &chrono::Local)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn santiago_winter() -> FixedOffset {
        FixedOffset::west_opt(4 * 3600).unwrap()
    }

    #[test]
    fn test_resolve_converts_offset_timestamps_into_zone() {
        let resolved = resolve_timestamp("2025-06-26T02:30:00Z", &santiago_winter()).unwrap();
        assert_eq!(resolved.date(), NaiveDate::from_ymd_opt(2025, 6, 25).unwrap());
        assert_eq!(format_time(resolved.wall), "22:30");
        assert_eq!(
            resolved.instant,
            Utc.with_ymd_and_hms(2025, 6, 26, 2, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_resolve_reads_naive_timestamps_as_wall_time() {
        let resolved = resolve_timestamp("2025-06-25T08:00:00", &santiago_winter()).unwrap();
        assert_eq!(format_time(resolved.wall), "08:00");
        assert_eq!(
            resolved.instant,
            Utc.with_ymd_and_hms(2025, 6, 25, 12, 0, 0).unwrap()
        );

        let with_fraction = resolve_timestamp("2025-06-25 08:00:00.250", &Utc).unwrap();
        assert_eq!(format_time(with_fraction.wall), "08:00");

        let minutes_only = resolve_timestamp("2025-06-25T08:15", &Utc).unwrap();
        assert_eq!(format_time(minutes_only.wall), "08:15");
    }

    #[test]
    fn test_resolve_moves_spring_forward_gap_ahead_one_hour() {
        // Santiago skips 00:00-00:59 on 2024-09-08
        let resolved =
            resolve_timestamp("2024-09-08T00:30:00", &chrono_tz::America::Santiago).unwrap();
        assert_eq!(resolved.date(), NaiveDate::from_ymd_opt(2024, 9, 8).unwrap());
        assert_eq!(format_time(resolved.wall), "00:30");
        assert_eq!(
            resolved.instant,
            Utc.with_ymd_and_hms(2024, 9, 8, 4, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_resolve_takes_earlier_instant_in_fall_back_overlap() {
        // 23:00-23:59 on 2024-04-06 happens twice in Santiago, first at -03
        let resolved =
            resolve_timestamp("2024-04-06T23:30:00", &chrono_tz::America::Santiago).unwrap();
        assert_eq!(resolved.date(), NaiveDate::from_ymd_opt(2024, 4, 6).unwrap());
        assert_eq!(
            resolved.instant,
            Utc.with_ymd_and_hms(2024, 4, 7, 2, 30, 0).unwrap()
        );

        let later = resolve_timestamp("2024-04-07T03:30:00Z", &chrono_tz::America::Santiago).unwrap();
        assert_eq!(later.wall, resolved.wall);
        assert!(later.instant > resolved.instant);
    }

    #[test]
    fn test_resolve_rejects_garbage() {
        assert_eq!(resolve_timestamp("", &Utc), None);
        assert_eq!(resolve_timestamp("mañana a las 8", &Utc), None);
        assert_eq!(resolve_timestamp("2025-13-40T08:00:00", &Utc), None);
    }

    #[test]
    fn test_input_parsing() {
        assert_eq!(parse_input_date("2025-06-25"), NaiveDate::from_ymd_opt(2025, 6, 25));
        assert_eq!(parse_input_date("25/06/2025"), None);
        assert_eq!(parse_input_time("08:30"), NaiveTime::from_hms_opt(8, 30, 0));
        assert_eq!(parse_input_time("08:30:15"), NaiveTime::from_hms_opt(8, 30, 15));
        assert_eq!(parse_input_time("8h30"), None);
    }

    #[test]
    fn test_week_titles() {
        let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
        assert_eq!(
            format_week_title(d(2025, 6, 23), d(2025, 6, 29)),
            "Semana del 23 al 29 de junio de 2025"
        );
        assert_eq!(
            format_week_title(d(2025, 6, 30), d(2025, 7, 6)),
            "Semana del 30 de junio al 6 de julio de 2025"
        );
        assert_eq!(
            format_week_title(d(2025, 12, 29), d(2026, 1, 4)),
            "Semana del 29 de diciembre de 2025 al 4 de enero de 2026"
        );
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(45), "45m");
        assert_eq!(format_duration(120), "2h");
        assert_eq!(format_duration(90), "1h 30m");
        assert_eq!(format_duration(0), "—");
    }

    #[test]
    fn test_format_long_date_and_timestamp() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 25).unwrap();
        assert_eq!(format_long_date(date), "miércoles, 25 de junio de 2025");
        assert_eq!(format_timestamp_in("2025-06-25T14:30:00", &Utc), "25/06/2025 14:30");
        assert_eq!(format_timestamp_in("sin fecha", &Utc), "sin fecha");
    }
}
