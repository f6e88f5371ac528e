use chrono::NaiveDate;
use dividash::models::market::{Dividend, TickerInfo};
use dividash::services::calendar::{
    dividend_events, EX_DIVIDEND_COLOR, PAYMENT_COLOR,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_events_for_ticker_with_ex_date_and_payments() {
    let info = TickerInfo {
        symbol: "AAPL".to_string(),
        short_name: Some("Apple Inc.".to_string()),
        ex_dividend_date: Some(date(2026, 9, 5)),
    };
    let dividends = vec![
        Dividend {
            pay_date: date(2026, 2, 13),
            amount: 0.24,
        },
        Dividend {
            pay_date: date(2026, 5, 15),
            amount: 0.25,
        },
    ];

    let events = dividend_events(&info, &dividends);
    assert_eq!(events.len(), 3);

    assert_eq!(events[0].title, "[AAPL] ex-dividend");
    assert_eq!(events[0].start, date(2026, 9, 5));
    assert_eq!(events[0].color, EX_DIVIDEND_COLOR);
    assert!(events[0].all_day);

    assert_eq!(events[1].title, "[AAPL] $0.24 payment");
    assert_eq!(events[1].color, PAYMENT_COLOR);
    assert_eq!(events[2].title, "[AAPL] $0.25 payment");
    assert_eq!(events[2].start, date(2026, 5, 15));
}

#[test]
fn test_no_ex_date_yields_payment_events_only() {
    let info = TickerInfo::bare("MSFT");
    let dividends = vec![Dividend {
        pay_date: date(2026, 3, 12),
        amount: 0.83,
    }];
    let events = dividend_events(&info, &dividends);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].title, "[MSFT] $0.83 payment");
}

#[test]
fn test_no_dividend_data_yields_no_events() {
    let info = TickerInfo::bare("TSLA");
    assert!(dividend_events(&info, &[]).is_empty());
}
