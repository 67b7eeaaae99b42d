//! Local state machines behind the interactive instant-answer blocks.
//!
//! The components in the `ui` crate only wire events to these types, which keeps the
//! behaviour testable without a renderer.

use crate::models::{CurrencyConversion, MathResult, TimerResult, UnitConversion};

// ─── Timer ───

/// Client-local countdown driven by a one-second tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Countdown {
    total: u64,
    remaining: u64,
    running: bool,
    finished: bool,
}

impl Countdown {
    pub fn new(total: u64) -> Self {
        Self {
            total,
            remaining: total,
            running: total > 0,
            finished: total == 0,
        }
    }

    pub fn from_result(result: &TimerResult) -> Self {
        Self::new(result.seconds)
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance one second. Returns `true` exactly when the countdown reaches zero,
    /// which is when the chime plays.
    pub fn tick(&mut self) -> bool {
        if !self.running || self.finished {
            return false;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            self.finished = true;
            return true;
        }
        false
    }

    /// Play/pause. On a finished countdown this restarts it.
    pub fn toggle(&mut self) {
        if self.finished {
            self.reset();
        } else {
            self.running = !self.running;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.total);
    }

    /// Fraction of time left, in `0.0..=1.0`.
    pub fn fraction_left(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.remaining as f64 / self.total as f64
        }
    }

    pub fn label(&self) -> String {
        format_time(self.remaining)
    }
}

/// `m:ss`, or `h:mm:ss` from one hour up.
pub fn format_time(secs: u64) -> String {
    let h = secs / 3600;
    let m = (secs % 3600) / 60;
    let s = secs % 60;
    if h > 0 {
        format!("{h}:{m:02}:{s:02}")
    } else {
        format!("{m}:{s:02}")
    }
}

// ─── Calculator ───

pub const CALCULATOR_KEYS: [&str; 20] = [
    "(", ")", "^", "AC", //
    "7", "8", "9", "/", //
    "4", "5", "6", "*", //
    "1", "2", "3", "-", //
    "0", ".", "=", "+",
];

/// Visual role of a keypad key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyKind {
    Equals,
    Clear,
    Operator,
    Digit,
}

pub fn key_kind(key: &str) -> KeyKind {
    match key {
        "=" => KeyKind::Equals,
        "AC" => KeyKind::Clear,
        "/" | "*" | "-" | "+" | "(" | ")" | "^" => KeyKind::Operator,
        _ => KeyKind::Digit,
    }
}

/// Keypad state of the math block.
#[derive(Clone, Debug, PartialEq)]
pub struct Calculator {
    pub expression: String,
    pub display: String,
    reset_next: bool,
}

impl Calculator {
    pub fn from_result(result: &MathResult) -> Self {
        Self {
            expression: result.expression.clone(),
            display: result.result.clone(),
            reset_next: true,
        }
    }

    /// Handle a key press. Returns the expression to evaluate when `=` is pressed.
    pub fn press(&mut self, key: &str) -> Option<String> {
        match key_kind(key) {
            KeyKind::Clear => {
                self.expression.clear();
                self.display = "0".to_string();
                None
            }
            KeyKind::Equals => {
                self.reset_next = true;
                let expr = self.expression.trim();
                (!expr.is_empty()).then(|| expr.to_string())
            }
            _ => {
                let starts_number = key.chars().all(|c| c.is_ascii_digit());
                if self.reset_next && starts_number {
                    // A fresh number after a result starts over
                    self.expression = key.to_string();
                } else if self.reset_next {
                    // An operator after a result continues from the result
                    self.expression = format!("{}{}", self.display, key);
                } else {
                    self.expression.push_str(key);
                }
                self.reset_next = false;
                None
            }
        }
    }

    /// Expression shown above the display, with a trailing `=` while it shows a result.
    pub fn expression_line(&self) -> String {
        let expr = self.expression.trim();
        if self.reset_next && !expr.is_empty() {
            format!("{expr} =")
        } else {
            expr.to_string()
        }
    }

    /// Apply the server's evaluation. Empty results leave the display unchanged.
    pub fn apply_result(&mut self, result: Option<String>) {
        if let Some(result) = result.filter(|r| !r.trim().is_empty()) {
            self.display = result;
        }
    }
}

// ─── Converter ───

/// Editable form of the unit/currency converter.
#[derive(Clone, Debug, PartialEq)]
pub struct ConversionForm {
    pub amount: String,
    pub from: String,
    pub to: String,
    /// Only currency codes are editable; units are fixed by the query.
    pub editable_units: bool,
}

impl ConversionForm {
    pub fn from_unit(result: &UnitConversion) -> Self {
        Self {
            amount: format_amount(result.amount),
            from: result.from.clone(),
            to: result.to.clone(),
            editable_units: false,
        }
    }

    pub fn from_currency(result: &CurrencyConversion) -> Self {
        Self {
            amount: format_amount(result.amount),
            from: result.from.clone(),
            to: result.to.clone(),
            editable_units: true,
        }
    }

    /// Validate the form and build the search query it submits.
    pub fn to_query(&self) -> Result<String, String> {
        let amount: f64 = self
            .amount
            .trim()
            .parse()
            .map_err(|_| "Amount must be a number".to_string())?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err("Amount must be positive".to_string());
        }

        let from = self.from.trim();
        let to = self.to.trim();
        for unit in [from, to] {
            let len = unit.chars().count();
            if len == 0 || len > 10 {
                return Err("Units must be 1 to 10 characters".to_string());
            }
        }

        Ok(format!("{} {} to {}", format_amount(amount), from, to))
    }

    /// Currency rate footer, e.g. `1 USD = 0.92 EUR`.
    pub fn rate_line(&self, rate: &str) -> String {
        format!(
            "1 {} = {} {}",
            self.from.trim().to_uppercase(),
            rate,
            self.to.trim().to_uppercase()
        )
    }
}

fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 && amount.abs() < 1e15 {
        format!("{}", amount as i64)
    } else {
        amount.to_string()
    }
}

// ─── Result list formatting ───

/// Host plus path of a URL, for the compact line above a result title.
pub fn display_url(url: &str) -> String {
    let Some((_, rest)) = url.split_once("://") else {
        return url.to_string();
    };
    let rest = rest.split(['?', '#']).next().unwrap_or_default();
    let (host, path) = match rest.find('/') {
        Some(i) => rest.split_at(i),
        None => (rest, ""),
    };
    if host.is_empty() {
        return url.to_string();
    }
    if path == "/" || path.is_empty() {
        host.to_string()
    } else {
        format!("{host}{path}")
    }
}

/// Relevance score as a percentage badge.
pub fn score_badge(score: f64) -> String {
    format!("{:.0}%", score * 100.0)
}

pub fn result_count_label(total: usize) -> String {
    if total == 1 {
        "1 result".to_string()
    } else {
        format!("{total} results")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(59), "0:59");
        assert_eq!(format_time(60), "1:00");
        assert_eq!(format_time(605), "10:05");
        assert_eq!(format_time(3600), "1:00:00");
        assert_eq!(format_time(3725), "1:02:05");
    }

    #[test]
    fn test_countdown_finishes_once() {
        let mut timer = Countdown::new(3);
        assert!(timer.is_running());
        assert!(!timer.tick());
        assert!(!timer.tick());
        assert!(timer.tick());
        assert!(timer.is_finished());
        assert!(!timer.is_running());
        // No second chime
        assert!(!timer.tick());
        assert_eq!(timer.remaining(), 0);
    }

    #[test]
    fn test_countdown_pause_and_restart() {
        let mut timer = Countdown::new(2);
        timer.toggle();
        assert!(!timer.is_running());
        assert!(!timer.tick());
        assert_eq!(timer.remaining(), 2);

        timer.toggle();
        timer.tick();
        timer.tick();
        assert!(timer.is_finished());

        // Toggling a finished timer restarts it
        timer.toggle();
        assert_eq!(timer.remaining(), 2);
        assert!(timer.is_running());
        assert!(!timer.is_finished());
    }

    #[test]
    fn test_zero_second_timer_is_finished() {
        let mut timer = Countdown::new(0);
        assert!(timer.is_finished());
        assert!(!timer.tick());
        assert_eq!(timer.fraction_left(), 0.0);
    }

    #[test]
    fn test_calculator_fresh_number_replaces_expression() {
        let mut calc = Calculator::from_result(&MathResult {
            expression: "5+5".to_string(),
            result: "10".to_string(),
        });
        assert_eq!(calc.expression_line(), "5+5 =");
        assert_eq!(calc.display, "10");

        calc.press("7");
        assert_eq!(calc.expression_line(), "7");
        assert_eq!(calc.expression, "7");
        calc.press("*");
        calc.press("2");
        assert_eq!(calc.press("="), Some("7*2".to_string()));
    }

    #[test]
    fn test_calculator_operator_continues_from_result() {
        let mut calc = Calculator::from_result(&MathResult {
            expression: "5+5".to_string(),
            result: "10".to_string(),
        });
        calc.press("+");
        calc.press("1");
        assert_eq!(calc.expression, "10+1");

        let expr = calc.press("=");
        assert_eq!(expr.as_deref(), Some("10+1"));
        calc.apply_result(Some("11".to_string()));
        assert_eq!(calc.display, "11");

        calc.press("*");
        assert_eq!(calc.expression, "11*");
    }

    #[test]
    fn test_calculator_clear_and_empty_equals() {
        let mut calc = Calculator::from_result(&MathResult::default());
        calc.press("AC");
        assert_eq!(calc.display, "0");
        assert_eq!(calc.press("="), None);

        calc.apply_result(Some("".to_string()));
        assert_eq!(calc.display, "0");
    }

    #[test]
    fn test_key_kinds() {
        assert_eq!(key_kind("="), KeyKind::Equals);
        assert_eq!(key_kind("AC"), KeyKind::Clear);
        assert_eq!(key_kind("^"), KeyKind::Operator);
        assert_eq!(key_kind("."), KeyKind::Digit);
        assert_eq!(CALCULATOR_KEYS.len(), 20);
    }

    #[test]
    fn test_conversion_query() {
        let form = ConversionForm::from_currency(&CurrencyConversion {
            amount: 100.0,
            from: "usd".to_string(),
            to: "eur".to_string(),
            result: "92.00".to_string(),
            rate: Some("0.92".to_string()),
        });
        assert_eq!(form.to_query().unwrap(), "100 usd to eur");
        assert_eq!(form.rate_line("0.92"), "1 USD = 0.92 EUR");
        assert!(form.editable_units);
    }

    #[test]
    fn test_conversion_validation() {
        let mut form = ConversionForm::from_unit(&UnitConversion {
            amount: 2.5,
            from: "km".to_string(),
            to: "mi".to_string(),
            result: "1.55".to_string(),
            category: "Length".to_string(),
        });
        assert_eq!(form.to_query().unwrap(), "2.5 km to mi");

        form.amount = "-3".to_string();
        assert!(form.to_query().is_err());
        form.amount = "abc".to_string();
        assert!(form.to_query().is_err());
        form.amount = "3".to_string();
        form.to = "".to_string();
        assert!(form.to_query().is_err());
        form.to = "x".repeat(11);
        assert!(form.to_query().is_err());
    }

    #[test]
    fn test_display_url() {
        assert_eq!(display_url("https://example.com/"), "example.com");
        assert_eq!(display_url("https://example.com"), "example.com");
        assert_eq!(
            display_url("https://en.wikipedia.org/wiki/Rust?x=1#top"),
            "en.wikipedia.org/wiki/Rust"
        );
        assert_eq!(display_url("not a url"), "not a url");
    }

    #[test]
    fn test_score_and_count_labels() {
        assert_eq!(score_badge(0.876), "88%");
        assert_eq!(result_count_label(1), "1 result");
        assert_eq!(result_count_label(0), "0 results");
        assert_eq!(result_count_label(12), "12 results");
    }
}
