use haizea_core::models::milestone::Percentiles;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum DatasetError {
    #[error("duplicate milestone id: {0}")]
    DuplicateId(String),

    #[error("milestone '{0}' has an empty label")]
    EmptyLabel(String),

    #[error("milestone '{id}': percentile ages must satisfy p25 < p50 < p75 < p90, got {percentiles:?}")]
    MalformedPercentiles { id: String, percentiles: Percentiles },
}
