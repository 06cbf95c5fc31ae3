use crate::profile::AppSettings;

/// Parses `HH:MM` (24h) into minutes after midnight.
fn parse_hhmm(value: &str) -> Option<u32> {
    let (hours, minutes) = value.split_once(':')?;
    let two_digits = |s: &str| s.len() == 2 && s.bytes().all(|b| b.is_ascii_digit());
    if !two_digits(hours) || !two_digits(minutes) {
        return None;
    }
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    (hours < 24 && minutes < 60).then_some(hours * 60 + minutes)
}

/// Returns every rule `settings` breaks. Empty means valid.
pub fn validate_settings(settings: &AppSettings) -> Vec<String> {
    let mut violations = Vec::new();

    if !(0..=100).contains(&settings.min_match_score) {
        violations.push(format!(
            "min_match_score must be between 0 and 100 (got {})",
            settings.min_match_score
        ));
    }

    if !(1..=500).contains(&settings.daily_outreach_limit) {
        violations.push(format!(
            "daily_outreach_limit must be between 1 and 500 (got {})",
            settings.daily_outreach_limit
        ));
    }

    let start = parse_hhmm(&settings.working_hours_start);
    let end = parse_hhmm(&settings.working_hours_end);
    if start.is_none() {
        violations.push(format!(
            "working_hours_start must be HH:MM (got {:?})",
            settings.working_hours_start
        ));
    }
    if end.is_none() {
        violations.push(format!(
            "working_hours_end must be HH:MM (got {:?})",
            settings.working_hours_end
        ));
    }
    if let (Some(start), Some(end)) = (start, end) {
        if start >= end {
            violations.push("working_hours_start must be before working_hours_end".to_string());
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate_settings(&AppSettings::default()).is_empty());
    }

    #[test]
    fn test_out_of_range_numbers() {
        let settings = AppSettings {
            min_match_score: 101,
            daily_outreach_limit: 0,
            ..AppSettings::default()
        };
        let violations = validate_settings(&settings);
        assert_eq!(violations.len(), 2);
        assert!(violations[0].contains("min_match_score"));
        assert!(violations[1].contains("daily_outreach_limit"));
    }

    #[test]
    fn test_malformed_hours() {
        for bad in ["8:00", "24:00", "08:60", "eight", "08-00"] {
            let settings = AppSettings {
                working_hours_start: bad.to_string(),
                ..AppSettings::default()
            };
            assert_eq!(validate_settings(&settings).len(), 1, "{bad}");
        }
    }

    #[test]
    fn test_inverted_hours() {
        let settings = AppSettings {
            working_hours_start: "19:00".to_string(),
            working_hours_end: "08:00".to_string(),
            ..AppSettings::default()
        };
        assert_eq!(
            validate_settings(&settings),
            vec!["working_hours_start must be before working_hours_end".to_string()]
        );
    }

    #[test]
    fn test_parse_hhmm() {
        assert_eq!(parse_hhmm("00:00"), Some(0));
        assert_eq!(parse_hhmm("23:59"), Some(23 * 60 + 59));
        assert_eq!(parse_hhmm("+1:00"), None);
    }
}
