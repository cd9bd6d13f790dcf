use std::fmt;
use std::time::Duration;

use crate::benchmark::RaceResult;

const SUB_UNIT_FLOOR: f64 = 0.000_001;

/// Authoritative timings of one comparison, in canonical algorithm order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceReport {
    results: Vec<RaceResult>,
    animated: bool,
}

impl RaceReport {
    pub fn new(results: Vec<RaceResult>, animated: bool) -> Self {
        Self { results, animated }
    }

    pub fn results(&self) -> &[RaceResult] {
        &self.results
    }

    /// Whether an animated race preceded the measurement.
    pub fn animated(&self) -> bool {
        self.animated
    }

    /// Fastest algorithm; ties go to the earlier one in canonical order.
    pub fn winner(&self) -> Option<&RaceResult> {
        self.results.iter().min_by_key(|r| r.elapsed)
    }
}

impl fmt::Display for RaceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<12} {:>14} {:>12} {:>14}", "algorithm", "ms", "s", "ticks")?;
        let winner = self.winner().map(|r| r.algorithm);
        for result in &self.results {
            let marker = if Some(result.algorithm) == winner { " *" } else { "" };
            writeln!(
                f,
                "{:<12} {:>14} {:>12} {:>14}{marker}",
                result.name(),
                format_millis(result.elapsed),
                format_seconds(result.elapsed),
                result.ticks,
            )?;
        }
        if let Some(best) = self.winner() {
            write!(f, "winner: {} in {:.3} ms", best.name(), millis(best.elapsed))?;
        }
        Ok(())
    }
}

#[inline]
fn millis(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * 1000.0
}

pub fn format_millis(elapsed: Duration) -> String {
    format_time_value(millis(elapsed))
}

pub fn format_seconds(elapsed: Duration) -> String {
    format_time_value(elapsed.as_secs_f64())
}

/// Three decimals with thousands separators from one unit up; below that,
/// up to six decimals with trailing zeros trimmed, and `<0.000001` for
/// anything smaller.
pub fn format_time_value(value: f64) -> String {
    if value >= 1.0 {
        return group_thousands(&format!("{value:.3}"));
    }
    if value <= 0.0 {
        return "0".to_owned();
    }
    if value < SUB_UNIT_FLOOR {
        return "<0.000001".to_owned();
    }
    let text = format!("{value:.6}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "0" {
        "<0.000001".to_owned()
    } else {
        text.to_owned()
    }
}

fn group_thousands(text: &str) -> String {
    let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));
    let mut grouped = String::with_capacity(text.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if !fraction.is_empty() {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}
