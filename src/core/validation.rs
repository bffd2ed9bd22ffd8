//! Validators and classifiers
//!
//! The spam and screen-time checks each combine several independent rules;
//! the first rule that fires is logged at debug level.

use crate::config::{ScreenTimeLimits, SpamRules};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// `+<country> (<area>) <exchange>-<subscriber>`
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+(\d+) \((\d{3})\) (\d{3})-(\d{4})$").expect("Valid regex pattern")
});

/// Pure: Whether `ip` is a dotted-quad IPv4 address
///
/// Each of the four segments must be plain decimal digits in 0-255 with no
/// leading zero, except for `0` itself.
pub fn is_valid_ipv4(ip: &str) -> bool {
    let segments: Vec<&str> = ip.split('.').collect();
    segments.len() == 4 && segments.iter().all(|segment| is_valid_octet(segment))
}

fn is_valid_octet(segment: &str) -> bool {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if segment.len() > 1 && segment.starts_with('0') {
        return false;
    }
    segment.parse::<u8>().is_ok()
}

/// Pure: Classify a formatted phone number with the default rules
///
/// # Examples
///
/// ```
/// use quickfns::core::validation::is_spam;
///
/// assert!(is_spam("+1 (555) 435-4792"));
/// assert!(!is_spam("+0 (200) 234-0182"));
/// ```
pub fn is_spam(number: &str) -> bool {
    is_spam_with(number, &SpamRules::default())
}

/// Pure: Classify a formatted phone number as spam
///
/// Numbers that do not match `+C (AAA) EEE-SSSS` are not classified and
/// return `false`. Otherwise the number is spam when any of these hold:
/// - the country code is too long or does not start with `0`
/// - the area code is outside `rules.area_min..=rules.area_max`
/// - the digit sum of the exchange appears inside the subscriber digits
/// - the raw string holds a run of `rules.repeat_run` identical digits
pub fn is_spam_with(number: &str, rules: &SpamRules) -> bool {
    let Some(caps) = PHONE_PATTERN.captures(number) else {
        trace!("Not a formatted phone number: {:?}", number);
        return false;
    };

    let country = &caps[1];
    let area: u32 = match caps[2].parse() {
        Ok(area) => area,
        Err(_) => return false,
    };
    let exchange = &caps[3];
    let subscriber = &caps[4];

    if country.len() > rules.max_country_code_len || !country.starts_with('0') {
        debug!("Spam: country code {} rejected", country);
        return true;
    }

    if area < rules.area_min || area > rules.area_max {
        debug!("Spam: area code {} out of range", area);
        return true;
    }

    let exchange_sum: u32 = exchange.chars().filter_map(|c| c.to_digit(10)).sum();
    trace!("Exchange {} digit sum {}", exchange, exchange_sum);
    if subscriber.contains(&exchange_sum.to_string()) {
        debug!(
            "Spam: exchange digit sum {} found in {}",
            exchange_sum, subscriber
        );
        return true;
    }

    if has_repeated_digit_run(number, rules.repeat_run) {
        debug!("Spam: {} repeated digits in {}", rules.repeat_run, number);
        return true;
    }

    false
}

/// Whether `s` contains `run` consecutive identical ASCII digits
fn has_repeated_digit_run(s: &str, run: usize) -> bool {
    let mut previous = None;
    let mut length = 0;

    for c in s.chars() {
        if c.is_ascii_digit() && previous == Some(c) {
            length += 1;
        } else {
            length = 1;
        }
        previous = Some(c);

        if c.is_ascii_digit() && length >= run {
            return true;
        }
    }

    false
}

/// What a thermostat should do to reach its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThermostatAction {
    Heat,
    Cool,
    Hold,
}

impl ThermostatAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThermostatAction::Heat => "heat",
            ThermostatAction::Cool => "cool",
            ThermostatAction::Hold => "hold",
        }
    }
}

impl fmt::Display for ThermostatAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pure: Heat below target, cool above it, otherwise hold
pub fn thermostat_action(current: f64, target: f64) -> ThermostatAction {
    if current < target {
        ThermostatAction::Heat
    } else if current > target {
        ThermostatAction::Cool
    } else {
        ThermostatAction::Hold
    }
}

/// Pure: Check a week of daily screen hours against the default limits
pub fn too_much_screen_time(hours: &[f64]) -> bool {
    too_much_screen_time_with(hours, &ScreenTimeLimits::default())
}

/// Pure: Whether any single day, any rolling window, or the overall
/// average reaches its limit
pub fn too_much_screen_time_with(hours: &[f64], limits: &ScreenTimeLimits) -> bool {
    if hours.is_empty() {
        return false;
    }

    if let Some(day) = hours.iter().position(|&h| h >= limits.daily_max) {
        debug!("Screen time: day {} at {} hours", day, hours[day]);
        return true;
    }

    let window_len = limits.window_len.max(1);
    if let Some(start) = hours
        .windows(window_len)
        .position(|window| mean(window) >= limits.window_avg)
    {
        debug!(
            "Screen time: {} days starting at day {} over the window average",
            window_len, start
        );
        return true;
    }

    let overall = mean(hours);
    trace!("Screen time overall average {}", overall);
    if overall >= limits.overall_avg {
        debug!("Screen time: overall average {} over the limit", overall);
        return true;
    }

    false
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// How many readings exceeded a limit and by how much on average
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SpeedingSummary {
    pub count: usize,
    pub average_excess: f64,
}

/// Pure: Count speeds above `limit` and average the amount over it
///
/// Returns a zeroed summary when nobody was speeding.
pub fn speeding(speeds: &[f64], limit: f64) -> SpeedingSummary {
    let excesses: Vec<f64> = speeds
        .iter()
        .filter(|&&speed| speed > limit)
        .map(|&speed| speed - limit)
        .collect();

    if excesses.is_empty() {
        return SpeedingSummary::default();
    }

    SpeedingSummary {
        count: excesses.len(),
        average_excess: mean(&excesses),
    }
}
