//----------------------------------------
// sim mod
//----------------------------------------
pub mod error;
pub mod power_sim;
