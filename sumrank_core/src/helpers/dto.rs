use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fallback used when a request omits the percentage field.
pub const DEFAULT_PERCENTAGE: f64 = 0.5;

fn default_percentage() -> f64 {
    DEFAULT_PERCENTAGE
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SummarizeRequest {
    pub text: String,
    #[serde(default = "default_percentage")]
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SummarizeResponse {
    pub summary: Vec<String>,
}
