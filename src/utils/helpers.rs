//! Helper functions and utilities
//!
//! Presentation helpers shared by the page view models: price and date
//! formatting, badge truncation, and date-of-birth assembly from the
//! three registration selectors.

use chrono::NaiveDate;

/// Render a ticket price for the event detail modal: "Free" or "$45"
pub fn format_price_full(ticket_price: f64) -> String {
    if ticket_price == 0.0 {
        "Free".to_string()
    } else {
        format!("${}", format_amount(ticket_price))
    }
}

/// Render a ticket price for the compact list badge: "Free" or "45"
pub fn format_price_badge(ticket_price: f64) -> String {
    if ticket_price == 0.0 {
        "Free".to_string()
    } else {
        format_amount(ticket_price)
    }
}

/// Whole-dollar prices drop the fractional part, others keep two digits
fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{}", amount as i64)
    } else {
        format!("{:.2}", amount)
    }
}

/// Full weekday/month/day/year form used in the event detail modal,
/// e.g. "Friday, June 14, 2024"
pub fn format_event_date_long(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Compact form used in the event list, e.g. "Jun 14, 2024"
pub fn format_event_date_short(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Truncate text to a maximum length with ellipsis, for list badges
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_length.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

/// Assemble a date of birth from the independently chosen day, month and
/// year selectors. Invalid combinations (e.g. February 30) yield None and
/// are rejected by form validation.
pub fn assemble_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_price_renders_literal_free() {
        assert_eq!(format_price_full(0.0), "Free");
        assert_eq!(format_price_badge(0.0), "Free");
    }

    #[test]
    fn test_paid_price_formats() {
        assert_eq!(format_price_full(45.0), "$45");
        assert_eq!(format_price_badge(45.0), "45");
        assert_eq!(format_price_full(19.5), "$19.50");
        assert_eq!(format_price_badge(19.5), "19.50");
    }

    #[test]
    fn test_event_date_formats() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
        assert_eq!(format_event_date_long(date), "Friday, June 14, 2024");
        assert_eq!(format_event_date_short(date), "Jun 14, 2024");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("a very long badge label", 10), "a very ...");
    }

    #[test]
    fn test_assemble_date_rejects_february_30() {
        assert!(assemble_date(2023, 2, 30).is_none());
        assert!(assemble_date(2023, 2, 28).is_some());
        // Leap day
        assert!(assemble_date(2024, 2, 29).is_some());
        assert!(assemble_date(2023, 2, 29).is_none());
    }
}
