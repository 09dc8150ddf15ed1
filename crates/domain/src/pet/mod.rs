//! Inventory entity model.

mod attributes;
mod entity;
mod money;

pub use attributes::{Breed, Gender, PetType, Skin};
pub use entity::{PetEntity, PetField, PetId};
pub use money::Money;
