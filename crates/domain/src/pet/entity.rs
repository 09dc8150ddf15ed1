//! The inventory entity record.

use serde::{Deserialize, Serialize};

use super::{Breed, Gender, Money, PetType, Skin};
use crate::error::{DomainError, DomainResult};

/// Identifier of an inventory item, unique within a dataset snapshot.
pub type PetId = u32;

/// One inventory item as stored by the service and echoed by its API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetEntity {
    /// Identifier
    pub pet_id: PetId,
    /// Category
    pub pet_type: PetType,
    /// Price, never negative in a valid entity
    pub cost: Money,
    /// Gender
    pub gender: Gender,
    /// Covering
    pub skin_type: Skin,
    /// Species; mirrors `pet_type` in current data
    pub pet_species: PetType,
    /// Breed
    pub breed: Breed,
    /// Age
    pub age: i32,
    /// Units in stock
    pub quantity: i32,
}

impl PetEntity {
    /// Creates an entity with unrecorded attributes and zero counts.
    #[must_use]
    pub fn new(pet_id: PetId, pet_type: PetType, cost: Money) -> Self {
        Self {
            pet_id,
            pet_type,
            cost,
            gender: Gender::default(),
            skin_type: Skin::default(),
            pet_species: pet_type,
            breed: Breed::default(),
            age: 0,
            quantity: 0,
        }
    }

    /// Sets the gender (builder pattern).
    #[must_use]
    pub const fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    /// Sets the covering (builder pattern).
    #[must_use]
    pub const fn with_skin(mut self, skin: Skin) -> Self {
        self.skin_type = skin;
        self
    }

    /// Sets the breed (builder pattern).
    #[must_use]
    pub const fn with_breed(mut self, breed: Breed) -> Self {
        self.breed = breed;
        self
    }

    /// Sets the age (builder pattern).
    #[must_use]
    pub const fn with_age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }

    /// Sets the stock quantity (builder pattern).
    #[must_use]
    pub const fn with_quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets the cost (builder pattern).
    #[must_use]
    pub fn with_cost(mut self, cost: Money) -> Self {
        self.cost = cost;
        self
    }

    /// Checks the entity invariants.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NegativeCost` when the cost is below zero.
    pub fn validate(&self) -> DomainResult<()> {
        if self.cost.is_negative() {
            return Err(DomainError::NegativeCost {
                pet_id: self.pet_id,
                cost: self.cost.to_string(),
            });
        }
        Ok(())
    }

    /// Lists the fields whose values differ from `other`, skipping `ignored`.
    #[must_use]
    pub fn differing_fields(&self, other: &Self, ignored: &[PetField]) -> Vec<PetField> {
        PetField::ALL
            .iter()
            .copied()
            .filter(|field| !ignored.contains(field))
            .filter(|field| !self.same_value(other, *field))
            .collect()
    }

    /// Compares one field by value.
    #[must_use]
    pub fn same_value(&self, other: &Self, field: PetField) -> bool {
        match field {
            PetField::PetId => self.pet_id == other.pet_id,
            PetField::PetType => self.pet_type == other.pet_type,
            PetField::Cost => self.cost == other.cost,
            PetField::Gender => self.gender == other.gender,
            PetField::SkinType => self.skin_type == other.skin_type,
            PetField::PetSpecies => self.pet_species == other.pet_species,
            PetField::Breed => self.breed == other.breed,
            PetField::Age => self.age == other.age,
            PetField::Quantity => self.quantity == other.quantity,
        }
    }

    /// Renders a single field's value for reporting.
    #[must_use]
    pub fn render(&self, field: PetField) -> String {
        match field {
            PetField::PetId => self.pet_id.to_string(),
            PetField::PetType => self.pet_type.to_string(),
            PetField::Cost => self.cost.to_string(),
            PetField::Gender => self.gender.to_string(),
            PetField::SkinType => self.skin_type.to_string(),
            PetField::PetSpecies => self.pet_species.to_string(),
            PetField::Breed => self.breed.to_string(),
            PetField::Age => self.age.to_string(),
            PetField::Quantity => self.quantity.to_string(),
        }
    }
}

/// Names the fields of a [`PetEntity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PetField {
    /// `petId`
    PetId,
    /// `petType`
    PetType,
    /// `cost`
    Cost,
    /// `gender`
    Gender,
    /// `skinType`
    SkinType,
    /// `petSpecies`
    PetSpecies,
    /// `breed`
    Breed,
    /// `age`
    Age,
    /// `quantity`
    Quantity,
}

impl PetField {
    /// Every field, in wire order.
    pub const ALL: [Self; 9] = [
        Self::PetId,
        Self::PetType,
        Self::Cost,
        Self::Gender,
        Self::SkinType,
        Self::PetSpecies,
        Self::Breed,
        Self::Age,
        Self::Quantity,
    ];

    /// Returns the JSON name of the field.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::PetId => "petId",
            Self::PetType => "petType",
            Self::Cost => "cost",
            Self::Gender => "gender",
            Self::SkinType => "skinType",
            Self::PetSpecies => "petSpecies",
            Self::Breed => "breed",
            Self::Age => "age",
            Self::Quantity => "quantity",
        }
    }
}
