//! 宽松的数值/字符串反序列化工具
//!
//! Porkbun 对同一字段时而返回 JSON 数字、时而返回数字字符串
//! （如 `"id": 106926659` 与 `"id": "106926659"`），这里统一兼容：
//! - `deserialize_i64`: 数字 或 数字字符串 -> `i64`
//! - `deserialize_string`: 字符串 或 数字 -> `String`
//! - `deserialize_optional_string`: 额外接受 `null` -> `None`

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    String(String),
    I64(i64),
    U64(u64),
}

impl Scalar {
    fn into_string(self) -> String {
        match self {
            Self::String(s) => s,
            Self::I64(n) => n.to_string(),
            Self::U64(n) => n.to_string(),
        }
    }
}

/// 反序列化：数字或数字字符串 -> `i64`
pub fn deserialize_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Scalar::deserialize(deserializer)? {
        Scalar::I64(n) => Ok(n),
        Scalar::U64(n) => {
            i64::try_from(n).map_err(|_| Error::custom(format!("value out of range: {n}")))
        }
        Scalar::String(s) => s
            .trim()
            .parse()
            .map_err(|e| Error::custom(format!("invalid numeric string {s:?}: {e}"))),
    }
}

/// 反序列化：字符串或数字 -> `String`
pub fn deserialize_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Scalar::deserialize(deserializer).map(Scalar::into_string)
}

/// 反序列化：字符串、数字或 `null` -> `Option<String>`
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Scalar>::deserialize(deserializer).map(|v| v.map(Scalar::into_string))
}
