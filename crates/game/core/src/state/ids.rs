//! Strongly typed row identifiers.

use core::fmt;

macro_rules! row_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> u32 {
                id.0
            }
        }
    };
}

row_id!(
    /// Arena game identifier.
    GameId
);
row_id!(
    /// Arena player identifier (one per user per game).
    PlayerId
);
row_id!(
    /// Catalog item identifier.
    ItemId
);
row_id!(
    /// Registered user identifier.
    UserId
);
row_id!(
    /// Team identifier.
    TeamId
);
row_id!(
    /// Arena zone identifier.
    ZoneId
);
