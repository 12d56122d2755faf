//! Generational handle for engine objects referenced by dynamic variables.
//! u64 layout: low 32 bits = index (0 = nil), high 32 bits = generation.
//! Handles are issued by the owning arena; slot reuse bumps the generation so
//! stale handles stop matching. The variable system never owns the object a
//! handle points at.

#![forbid(unsafe_code)]

use std::fmt;

/// Opaque engine-object handle. Index + generation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectID(pub u64);

impl ObjectID {
    #[inline]
    pub const fn new(index: u32) -> Self {
        Self::from_parts(index, 0)
    }

    #[inline]
    pub const fn nil() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn index(self) -> u32 {
        (self.0 & 0xFFFF_FFFF) as u32
    }

    #[inline]
    pub const fn generation(self) -> u32 {
        (self.0 >> 32) as u32
    }

    #[inline]
    pub const fn from_parts(index: u32, generation: u32) -> Self {
        Self((index as u64) | ((generation as u64) << 32))
    }

    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn from_u64(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn is_nil(self) -> bool {
        self.0 == 0
    }

    /// Legacy: index in low 32, generation 0 (e.g. deserialization).
    #[inline]
    pub const fn from_u32(index: u32) -> Self {
        Self::from_parts(index, 0)
    }
}

impl Default for ObjectID {
    fn default() -> Self {
        Self::nil()
    }
}

impl fmt::Debug for ObjectID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectID({}:{})", self.index(), self.generation())
    }
}

impl fmt::Display for ObjectID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.index(), self.generation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nil() {
        let nil = ObjectID::nil();
        assert_eq!(nil.as_u64(), 0);
        assert!(nil.is_nil());
        assert_eq!(ObjectID::default(), nil);
    }

    #[test]
    fn test_parts_round_trip() {
        let id = ObjectID::from_parts(42, 7);
        assert_eq!(id.index(), 42);
        assert_eq!(id.generation(), 7);
        assert!(!id.is_nil());

        let same = ObjectID::from_u64(id.as_u64());
        assert_eq!(id, same);
    }

    #[test]
    fn test_generation_distinguishes_reused_slots() {
        let old = ObjectID::from_parts(3, 0);
        let fresh = ObjectID::from_parts(3, 1);
        assert_ne!(old, fresh);
        assert_eq!(old.index(), fresh.index());
    }

    #[test]
    fn test_from_u32_legacy() {
        let id = ObjectID::from_u32(1234);
        assert_eq!(id.index(), 1234);
        assert_eq!(id.generation(), 0);
    }

    #[test]
    fn test_display() {
        let id = ObjectID::from_parts(5, 2);
        assert_eq!(format!("{id}"), "5:2");
        assert_eq!(format!("{id:?}"), "ObjectID(5:2)");
    }
}
