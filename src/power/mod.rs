//----------------------------------------
// power mod
//----------------------------------------
pub mod error;
pub mod normal_ind;
pub mod ttest_ind;
pub mod types;
