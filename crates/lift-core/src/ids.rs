//! Strongly typed identifier wrappers.
//!
//! Both IDs are `Copy + Ord + Hash` so they can be used as map keys and
//! sorted collection elements without ceremony.  The inner integer is `pub`
//! to allow direct indexing into the building's `Vec`s, but callers should
//! prefer the `.index()` helper for clarity.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Stable elevator identifier, unique per building.  Doubles as the
    /// elevator's position in iteration order (the dispatch tie-break).
    pub struct ElevatorId(u32);
}

typed_id! {
    /// 0-indexed floor number.
    pub struct FloorId(u32);
}

impl FloorId {
    /// The floor every elevator starts on.
    pub const GROUND: FloorId = FloorId(0);

    /// Number of floors between `self` and `other`.
    #[inline]
    pub fn distance(self, other: FloorId) -> u32 {
        self.0.abs_diff(other.0)
    }
}
