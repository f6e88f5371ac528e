//! Dividend calendar event assembly.
//!
//! Produces the event records the dashboard renders: upcoming ex-dividend
//! dates and historical payment dates per ticker. Data assembly only, no
//! rendering.

use crate::models::market::{Dividend, TickerInfo};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const EX_DIVIDEND_COLOR: &str = "#FF6B6B";
pub const PAYMENT_COLOR: &str = "#4ECDC4";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub title: String,
    pub start: NaiveDate,
    pub all_day: bool,
    pub color: String,
}

/// Build the calendar events for one ticker: one ex-dividend event if the
/// date is known, plus one event per historical payment.
pub fn dividend_events(info: &TickerInfo, dividends: &[Dividend]) -> Vec<CalendarEvent> {
    let mut events = Vec::with_capacity(dividends.len() + 1);

    if let Some(ex_date) = info.ex_dividend_date {
        events.push(CalendarEvent {
            title: format!("[{}] ex-dividend", info.symbol),
            start: ex_date,
            all_day: true,
            color: EX_DIVIDEND_COLOR.to_string(),
        });
    }

    for dividend in dividends {
        events.push(CalendarEvent {
            title: format!("[{}] ${:.2} payment", info.symbol, dividend.amount),
            start: dividend.pay_date,
            all_day: true,
            color: PAYMENT_COLOR.to_string(),
        });
    }

    events
}
