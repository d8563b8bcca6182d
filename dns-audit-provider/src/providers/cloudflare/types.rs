//! Cloudflare API 类型定义

use serde::Deserialize;

/// Cloudflare API 通用响应
///
/// Only `result` is read; a missing or `null` result is an empty list.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct CloudflareResponse<T> {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub result: Vec<T>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
