//! Closed enumerations for material kinds and their subtypes.
//!
//! Each enum maps to a fixed `u8` ordinal. Serde encodes the ordinal, and
//! decoding an out-of-range ordinal fails with the matching `ArchiveError`.

use serde::{Deserialize, Serialize};

use crate::error::ArchiveError;

macro_rules! ordinal_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $err:expr, { $($variant:ident = $ord:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "u8", into = "u8")]
        #[repr(u8)]
        pub enum $name {
            $($variant = $ord),+
        }

        impl $name {
            /// All variants in ordinal order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
        }

        impl TryFrom<u8> for $name {
            type Error = ArchiveError;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                match value {
                    $($ord => Ok($name::$variant),)+
                    _ => Err($err),
                }
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> u8 {
                value as u8
            }
        }
    };
}

ordinal_enum!(
    /// The category of a material.
    MaterialType, ArchiveError::InvalidMaterialType, {
        Book = 0,
        Journal = 1,
        Newspaper = 2,
    }
);

ordinal_enum!(
    BookSubtype, ArchiveError::InvalidBookSubtype, {
        Novel = 0,
        Biography = 1,
        History = 2,
    }
);

ordinal_enum!(
    JournalSubtype, ArchiveError::InvalidJournalSubtype, {
        Science = 0,
        Literature = 1,
        Art = 2,
    }
);

ordinal_enum!(
    NewspaperSubtype, ArchiveError::InvalidNewspaperSubtype, {
        Daily = 0,
        Weekly = 1,
        Monthly = 2,
    }
);
