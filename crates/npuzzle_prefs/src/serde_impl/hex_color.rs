use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub fn serialize<S: Serializer>(value: &[u8; 3], serializer: S) -> Result<S::Ok, S::Error> {
    rgb_to_hex_string(*value).serialize(serializer)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<[u8; 3], D::Error> {
    let s = <String>::deserialize(deserializer)?;
    hex_string_to_rgb(&s).ok_or_else(|| D::Error::custom(format!("invalid color {s:?}")))
}

pub fn rgb_to_hex_string([r, g, b]: [u8; 3]) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

pub fn hex_string_to_rgb(string: &str) -> Option<[u8; 3]> {
    let digits = string.strip_prefix('#').unwrap_or(string);
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}
