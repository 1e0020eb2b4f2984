use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::TopologyError;

/// Number of low bits of an RLOC16 that address a child of its router.
const CHILD_ID_BITS: u32 = 10;

/// 16-bit routing locator. Displays as `0x` plus four lowercase hex digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rloc16(pub u16);

/// Router slot taken from the top six bits of an RLOC16. Displays as `0x` plus two hex digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct RouterId(pub u8);

impl Rloc16 {
	/// Router slot the locator belongs to.
	pub fn router_id(self) -> RouterId {
		RouterId((self.0 >> CHILD_ID_BITS) as u8)
	}

	/// Locator of a child attached to this router. The sum must fit in 16 bits.
	pub fn child(self, child_id: u16) -> Result<Rloc16, TopologyError> {
		self.0
			.checked_add(child_id)
			.map(Rloc16)
			.ok_or(TopologyError::LocatorOverflow {
				parent: self,
				child_id,
			})
	}
}

impl RouterId {
	/// Base locator of the router occupying this slot.
	pub fn base_locator(self) -> Rloc16 {
		Rloc16(u16::from(self.0) << CHILD_ID_BITS)
	}
}

impl fmt::Display for Rloc16 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "0x{:04x}", self.0)
	}
}

impl fmt::Display for RouterId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "0x{:02x}", self.0)
	}
}

impl Serialize for Rloc16 {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

impl Serialize for RouterId {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

// Agents report locators as plain numbers; some node-info payloads carry hex strings.
struct LocatorVisitor;

impl Visitor<'_> for LocatorVisitor {
	type Value = u64;

	fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("an unsigned integer or a hex string")
	}

	fn visit_u64<E: de::Error>(self, v: u64) -> Result<u64, E> {
		Ok(v)
	}

	fn visit_i64<E: de::Error>(self, v: i64) -> Result<u64, E> {
		u64::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
	}

	fn visit_str<E: de::Error>(self, v: &str) -> Result<u64, E> {
		let digits = v
			.strip_prefix("0x")
			.or_else(|| v.strip_prefix("0X"))
			.unwrap_or(v);
		u64::from_str_radix(digits, 16).map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
	}
}

impl<'de> Deserialize<'de> for Rloc16 {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let raw = deserializer.deserialize_any(LocatorVisitor)?;
		u16::try_from(raw)
			.map(Rloc16)
			.map_err(|_| de::Error::custom(format!("locator {raw:#x} exceeds 16 bits")))
	}
}

impl<'de> Deserialize<'de> for RouterId {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let raw = deserializer.deserialize_any(LocatorVisitor)?;
		u8::try_from(raw)
			.ok()
			.filter(|id| *id < 64)
			.map(RouterId)
			.ok_or_else(|| de::Error::custom(format!("router id {raw} out of range")))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn formats_with_fixed_width() {
		assert_eq!(Rloc16(0x400).to_string(), "0x0400");
		assert_eq!(Rloc16(0x3).to_string(), "0x0003");
		assert_eq!(RouterId(1).to_string(), "0x01");
		assert_eq!(RouterId(0x3e).to_string(), "0x3e");
	}

	#[test]
	fn router_id_is_top_six_bits() {
		assert_eq!(Rloc16(0x0400).router_id(), RouterId(1));
		assert_eq!(Rloc16(0x0c01).router_id(), RouterId(3));
		assert_eq!(RouterId(2).base_locator(), Rloc16(0x0800));
	}

	#[test]
	fn child_locator_adds_child_id() {
		assert_eq!(Rloc16(0x0400).child(3).unwrap(), Rloc16(0x0403));
	}

	#[test]
	fn child_locator_overflow_is_an_error() {
		let err = Rloc16(0xfc00).child(0x0400).unwrap_err();
		assert!(matches!(
			err,
			TopologyError::LocatorOverflow { parent: Rloc16(0xfc00), child_id: 0x0400 }
		));
	}

	#[test]
	fn deserializes_numbers_and_hex_strings() {
		let n: Rloc16 = serde_json::from_str("1024").unwrap();
		let s: Rloc16 = serde_json::from_str("\"0x0400\"").unwrap();
		let bare: Rloc16 = serde_json::from_str("\"0400\"").unwrap();
		assert_eq!(n, Rloc16(0x400));
		assert_eq!(s, n);
		assert_eq!(bare, n);
		assert!(serde_json::from_str::<Rloc16>("70000").is_err());
		assert!(serde_json::from_str::<RouterId>("64").is_err());
	}

	#[test]
	fn serializes_as_hex_string() {
		assert_eq!(serde_json::to_string(&Rloc16(0x0801)).unwrap(), "\"0x0801\"");
	}
}
