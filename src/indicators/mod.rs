pub mod momentum;
pub mod trend;
pub mod volatility;
