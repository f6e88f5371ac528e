pub mod bollinger;
