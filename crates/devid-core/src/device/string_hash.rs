//! Platform-standard 32-bit string hash.
//!
//! `h = s[0]*31^(n-1) + s[1]*31^(n-2) + ... + s[n-1]` over UTF-16 code units,
//! computed with wrapping signed 32-bit arithmetic. Matching the host platform
//! bit for bit keeps identifiers equal to the ones produced on-device.

const MULTIPLIER: i32 = 31;

/// Hash a string exactly like the host platform's string hash.
/// 与宿主平台字符串哈希逐位一致
pub fn platform_string_hash(value: &str) -> i32 {
    value.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_mul(MULTIPLIER).wrapping_add(i32::from(unit))
    })
}
