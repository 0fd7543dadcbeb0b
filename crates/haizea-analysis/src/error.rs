use haizea_core::models::milestone::Percentiles;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AnalysisError {
    #[error("percentile ages are not strictly increasing: {percentiles:?}")]
    MalformedPercentiles { percentiles: Percentiles },
}
