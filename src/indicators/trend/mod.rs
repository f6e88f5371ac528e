pub mod macd;
