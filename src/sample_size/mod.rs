//----------------------------------------
// sample size mod
//----------------------------------------
pub mod compute_power;
pub mod compute_ss;
pub mod types;
