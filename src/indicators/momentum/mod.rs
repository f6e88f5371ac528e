pub mod cci;
pub mod momentum;
pub mod rsi;
pub mod stochastic;
