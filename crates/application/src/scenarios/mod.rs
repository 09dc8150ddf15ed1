//! The scenario catalog.
//!
//! Every scenario is one linear run: setup (baseline read), execute, decode,
//! verify. Setup failures abort with a [`SetupError`]; everything after
//! setup is turned into named checks.

mod add_pet;
mod update_pet;

use std::fmt;
use std::str::FromStr;

use petcheck_domain::CheckResult;
use thiserror::Error;

pub use add_pet::{add_pet_with_missing_fields, add_new_pet, new_dog};
pub use update_pet::{
    price_body, repeat_update_missing_pet, update_dog_price, update_missing_pet,
    update_with_negative_price,
};

use crate::error::SetupResult;
use crate::ports::{DatasetReader, HttpClient};
use crate::scenario_runner::ScenarioRunner;

/// Raised when a scenario selector matches nothing in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown scenario '{0}'")]
pub struct UnknownScenario(pub String);

/// Every scenario the harness knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScenarioKind {
    /// Create a new dog and verify the inventory grew to include it.
    AddPet,
    /// Create with an empty body and verify the 400 contract.
    AddPetMissingFields,
    /// Raise a dog's price and verify only the price changed.
    UpdatePrice,
    /// Update an identifier that does not exist and verify the 404 contract.
    UpdateMissingPet,
    /// Update with a negative price and verify the 400 contract.
    UpdateNegativePrice,
    /// Repeat the missing-identifier update and verify identical contracts.
    RepeatUpdateMissingPet,
}

impl ScenarioKind {
    /// The full catalog in default execution order.
    pub const ALL: [Self; 6] = [
        Self::AddPet,
        Self::AddPetMissingFields,
        Self::UpdatePrice,
        Self::UpdateMissingPet,
        Self::UpdateNegativePrice,
        Self::RepeatUpdateMissingPet,
    ];

    /// Display name used in reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AddPet => "Add New Pet Entity [Dog]",
            Self::AddPetMissingFields => "Add Pet Entity with Missing Fields",
            Self::UpdatePrice => "Update Dog Price - Happy Path",
            Self::UpdateMissingPet => "Update Non-Existent Pet",
            Self::UpdateNegativePrice => "Invalid Update - Negative Price",
            Self::RepeatUpdateMissingPet => "Repeat Update Non-Existent Pet",
        }
    }

    /// Short selector used on the command line and in configuration.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::AddPet => "add-pet",
            Self::AddPetMissingFields => "add-pet-missing-fields",
            Self::UpdatePrice => "update-price",
            Self::UpdateMissingPet => "update-missing-pet",
            Self::UpdateNegativePrice => "update-negative-price",
            Self::RepeatUpdateMissingPet => "repeat-update-missing-pet",
        }
    }

    /// Resolves selectors to scenarios; an empty selection means all.
    ///
    /// # Errors
    ///
    /// Returns `UnknownScenario` for the first selector that matches nothing.
    pub fn select<S: AsRef<str>>(selectors: &[S]) -> Result<Vec<Self>, UnknownScenario> {
        if selectors.is_empty() {
            return Ok(Self::ALL.to_vec());
        }
        selectors.iter().map(|s| s.as_ref().parse()).collect()
    }

    /// Runs the scenario and returns its checks in order.
    ///
    /// # Errors
    ///
    /// Returns a `SetupError` when the scenario cannot start.
    pub async fn execute<C, R>(
        self,
        runner: &ScenarioRunner<C>,
        reader: &R,
    ) -> SetupResult<Vec<CheckResult>>
    where
        C: HttpClient,
        R: DatasetReader,
    {
        match self {
            Self::AddPet => add_new_pet(runner, reader).await,
            Self::AddPetMissingFields => add_pet_with_missing_fields(runner, reader).await,
            Self::UpdatePrice => update_dog_price(runner, reader).await,
            Self::UpdateMissingPet => update_missing_pet(runner, reader).await,
            Self::UpdateNegativePrice => update_with_negative_price(runner, reader).await,
            Self::RepeatUpdateMissingPet => repeat_update_missing_pet(runner, reader).await,
        }
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScenarioKind {
    type Err = UnknownScenario;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|k| k.slug().eq_ignore_ascii_case(wanted) || k.name() == wanted)
            .ok_or_else(|| UnknownScenario(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_select_all_by_default() {
        let none: [&str; 0] = [];
        assert_eq!(ScenarioKind::select(&none), Ok(ScenarioKind::ALL.to_vec()));
    }

    #[test]
    fn test_select_by_slug_or_name() {
        let picked = ScenarioKind::select(&["update-price", "Update Non-Existent Pet"]);
        assert_eq!(
            picked,
            Ok(vec![ScenarioKind::UpdatePrice, ScenarioKind::UpdateMissingPet])
        );
    }

    #[test]
    fn test_select_unknown() {
        assert_eq!(
            ScenarioKind::select(&["delete-pet"]),
            Err(UnknownScenario("delete-pet".to_string()))
        );
    }

    #[test]
    fn test_slugs_are_unique() {
        let mut slugs: Vec<_> = ScenarioKind::ALL.iter().map(|k| k.slug()).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), ScenarioKind::ALL.len());
    }
}
