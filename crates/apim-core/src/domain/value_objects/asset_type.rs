//! AssetType - Kind of definition a scoring asset was produced from

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetType {
    #[serde(rename = "OPENAPI")]
    OpenApi,
    #[serde(rename = "ASYNCAPI")]
    AsyncApi,
    GraviteeProxy,
    GraviteeMessage,
    GraviteeFederated,
    GraviteeNative,
}
