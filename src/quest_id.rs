//! Legacy FTB Quests identifiers and their Heracles counterparts.
use crate::error::{ConvertError, Result};
use num_bigint::BigUint;
use uuid::Uuid;

/// FTB Quests identifies objects with a hexadecimal string of arbitrary length.
/// The value is kept at full precision; only the conversion to a Heracles id
/// truncates it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LegacyQuestId(BigUint);

impl LegacyQuestId {
    /// Parse a hexadecimal id (case-insensitive, no prefix, no separators).
    pub fn parse(hex: &str) -> Result<Self> {
        if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ConvertError::InvalidQuestId(hex.to_string()));
        }
        BigUint::parse_bytes(hex.as_bytes(), 16)
            .map(LegacyQuestId)
            .ok_or_else(|| ConvertError::InvalidQuestId(hex.to_string()))
    }

    /// The low 64 bits of the id.
    pub fn low_u64(&self) -> u64 {
        self.0.iter_u64_digits().next().unwrap_or(0)
    }

    /// The 128-bit id used by checkmark tasks.
    ///
    /// The low 64 bits are written twice as little-endian bytes, so both
    /// halves of the result are always identical. Ids that agree in their low
    /// 64 bits map to the same value.
    pub fn check_uuid(&self) -> Uuid {
        let half = self.low_u64().to_le_bytes();
        let mut bytes = [0u8; 16];
        bytes[..8].copy_from_slice(&half);
        bytes[8..].copy_from_slice(&half);
        Uuid::from_bytes(bytes)
    }
}

/// Render a numeric dependency as uppercase hex without padding.
pub fn legacy_dependency_hex(id: i64) -> String {
    if id < 0 {
        format!("-{:X}", id.unsigned_abs())
    } else {
        format!("{:X}", id)
    }
}
