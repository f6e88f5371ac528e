pub mod calendar;
pub mod market_data;
pub mod sentiment;
pub mod watchlist;
pub mod yahoo;
