//----------------------------------------
// effect size mod
//----------------------------------------
pub mod error;
pub mod means;
pub mod proportions;
pub mod types;

use crate::design::types::{Endpoint, SampleSizeRequest};
use crate::error::FisherErr;
use types::EffectSize;

pub fn compute_effect_size(request: &SampleSizeRequest) -> Result<EffectSize, FisherErr> {
    match &request.endpoint {
        Endpoint::Means(input) => means::means_effect_size(&request.design, input),
        Endpoint::Proportions(input) => {
            proportions::proportions_effect_size(&request.design, input)
        }
    }
}
