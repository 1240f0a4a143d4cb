/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Confirmation from POST /fapi/v1/leverage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeLeverageResponse {
    pub symbol: String,
    pub leverage: u32,
    /// Kept as a string: the exchange sends "INF" for unlimited tiers
    pub max_notional_value: String,
}
