//! Point-in-time inventory snapshots.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::pet::{PetEntity, PetId, PetType};

/// An ordered snapshot of every inventory entity, read as a whole.
///
/// A snapshot never changes after it is built; comparing two snapshots taken
/// around an operation is how the harness observes the service's effect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PetEntity>", into = "Vec<PetEntity>")]
pub struct Dataset {
    pets: Vec<PetEntity>,
}

impl Dataset {
    /// Builds a snapshot, enforcing unique identifiers and valid entities.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateId` when two entities share an id, or
    /// the entity's own validation error.
    pub fn new(pets: Vec<PetEntity>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(pets.len());
        for pet in &pets {
            pet.validate()?;
            if !seen.insert(pet.pet_id) {
                return Err(DomainError::DuplicateId(pet.pet_id));
            }
        }
        Ok(Self { pets })
    }

    /// Number of entities.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.pets.len()
    }

    /// Returns true for an empty inventory.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }

    /// Iterates entities in snapshot order.
    pub fn iter(&self) -> impl Iterator<Item = &PetEntity> {
        self.pets.iter()
    }

    /// Returns true if an entity equal by value is present.
    #[must_use]
    pub fn contains(&self, pet: &PetEntity) -> bool {
        self.pets.contains(pet)
    }

    /// Looks up an entity by identifier.
    #[must_use]
    pub fn find(&self, id: PetId) -> Option<&PetEntity> {
        self.pets.iter().find(|p| p.pet_id == id)
    }

    /// Largest identifier in the snapshot.
    #[must_use]
    pub fn max_id(&self) -> Option<PetId> {
        self.pets.iter().map(|p| p.pet_id).max()
    }

    /// First entity of the given type, in snapshot order.
    #[must_use]
    pub fn first_of_type(&self, pet_type: PetType) -> Option<&PetEntity> {
        self.pets.iter().find(|p| p.pet_type == pet_type)
    }
}

impl TryFrom<Vec<PetEntity>> for Dataset {
    type Error = DomainError;

    fn try_from(pets: Vec<PetEntity>) -> DomainResult<Self> {
        Self::new(pets)
    }
}

impl From<Dataset> for Vec<PetEntity> {
    fn from(dataset: Dataset) -> Self {
        dataset.pets
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a PetEntity;
    type IntoIter = std::slice::Iter<'a, PetEntity>;

    fn into_iter(self) -> Self::IntoIter {
        self.pets.iter()
    }
}
