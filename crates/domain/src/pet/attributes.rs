//! Enumerated pet attributes.
//!
//! Every attribute travels on the wire as a SCREAMING_SNAKE_CASE string
//! (`"DOG"`, `"GERMAN_SHEPHERD"`).

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! wire_names {
    ($ty:ident { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            /// Returns the wire name of this value.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Category of an inventory item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PetType {
    /// Dog
    Dog,
    /// Cat
    Cat,
    /// Bird
    Bird,
    /// Fish
    Fish,
    /// Snake
    Snake,
    /// Rabbit
    Rabbit,
}

wire_names!(PetType {
    Dog => "DOG",
    Cat => "CAT",
    Bird => "BIRD",
    Fish => "FISH",
    Snake => "SNAKE",
    Rabbit => "RABBIT",
});

/// Gender of an inventory item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Not recorded
    #[default]
    Unknown,
}

wire_names!(Gender {
    Male => "MALE",
    Female => "FEMALE",
    Unknown => "UNKNOWN",
});

/// Covering of an inventory item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Skin {
    /// Fur
    Fur,
    /// Hair
    Hair,
    /// Feathers
    Feathers,
    /// Scales
    Scales,
    /// Bare skin
    Skin,
    /// Not recorded
    #[default]
    Unknown,
}

wire_names!(Skin {
    Fur => "FUR",
    Hair => "HAIR",
    Feathers => "FEATHERS",
    Scales => "SCALES",
    Skin => "SKIN",
    Unknown => "UNKNOWN",
});

/// Breed of an inventory item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Breed {
    /// Poodle
    Poodle,
    /// Maltese
    Maltese,
    /// German shepherd
    GermanShepherd,
    /// Beagle
    Beagle,
    /// Labrador
    Labrador,
    /// Bulldog
    Bulldog,
    /// Siamese
    Siamese,
    /// Persian
    Persian,
    /// Parrot
    Parrot,
    /// Goldfish
    Goldfish,
    /// Python
    Python,
    /// Not recorded
    #[default]
    Unknown,
}

wire_names!(Breed {
    Poodle => "POODLE",
    Maltese => "MALTESE",
    GermanShepherd => "GERMAN_SHEPHERD",
    Beagle => "BEAGLE",
    Labrador => "LABRADOR",
    Bulldog => "BULLDOG",
    Siamese => "SIAMESE",
    Persian => "PERSIAN",
    Parrot => "PARROT",
    Goldfish => "GOLDFISH",
    Python => "PYTHON",
    Unknown => "UNKNOWN",
});
