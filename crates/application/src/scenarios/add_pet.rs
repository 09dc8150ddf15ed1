//! `POST /inventory/add` scenarios.

use petcheck_domain::{
    BodyKind, Breed, CheckResult, ErrorContract, Gender, Money, PetEntity, PetId, PetType, Skin,
};
use tracing::warn;

use crate::checks::{
    ContractChecker, StateDiffVerifier, content_type_check, decode_check, status_check,
    transport_failure,
};
use crate::error::{SetupError, SetupResult};
use crate::identifiers::next_free_id;
use crate::operation::Operation;
use crate::ports::{DatasetReader, HttpClient};
use crate::scenario_runner::ScenarioRunner;

const NEW_PET_COST: &str = "249.99";
const MISSING_FIELDS_DETAIL: &str = "Required fields are missing or invalid in request body.";

/// The dog every create scenario submits.
///
/// # Errors
///
/// Returns `SetupError::Request` if the fixed cost does not parse.
pub fn new_dog(pet_id: PetId) -> SetupResult<PetEntity> {
    let cost = Money::parse(NEW_PET_COST).map_err(|e| SetupError::Request(e.to_string()))?;
    Ok(PetEntity::new(pet_id, PetType::Dog, cost)
        .with_gender(Gender::Female)
        .with_skin(Skin::Fur)
        .with_breed(Breed::Poodle)
        .with_age(25)
        .with_quantity(4))
}

/// Adds a new dog and verifies the inventory grew to include it.
///
/// # Errors
///
/// Returns a `SetupError` if the baseline cannot be read.
pub async fn add_new_pet<C: HttpClient, R: DatasetReader>(
    runner: &ScenarioRunner<C>,
    reader: &R,
) -> SetupResult<Vec<CheckResult>> {
    let before = reader.read_dataset().await?;
    let pet = new_dog(next_free_id(&before))?;
    let body = serde_json::to_string(&pet).map_err(|e| SetupError::Request(e.to_string()))?;

    let operation = Operation::Create;
    let result = match runner.run(operation, &body).await {
        Ok(result) => result,
        Err(e) => return Ok(vec![transport_failure(&e)]),
    };

    let mut checks = vec![
        status_check(operation.success_status(), &result),
        content_type_check(&result),
        decode_check(BodyKind::Entity, &result),
    ];

    let after = reader.read_dataset().await;
    if let Err(e) = &after {
        warn!(error = %e, "post-operation dataset read failed");
    }
    checks.extend(StateDiffVerifier::verify_create_result(
        &before,
        after.as_ref(),
        &result,
    ));
    Ok(checks)
}

/// Posts an empty object and verifies the 400 contract.
///
/// # Errors
///
/// Returns a `SetupError` if the baseline cannot be read.
pub async fn add_pet_with_missing_fields<C: HttpClient, R: DatasetReader>(
    runner: &ScenarioRunner<C>,
    reader: &R,
) -> SetupResult<Vec<CheckResult>> {
    reader.read_dataset().await?;

    let operation = Operation::Create;
    let result = match runner.run(operation, "{}").await {
        Ok(result) => result,
        Err(e) => return Ok(vec![transport_failure(&e)]),
    };

    let expected = ErrorContract::bad_request(MISSING_FIELDS_DETAIL, operation.path());
    let mut checks = vec![
        status_check(expected.status, &result),
        decode_check(BodyKind::Problem, &result),
    ];
    checks.extend(ContractChecker::check_result(&expected, &result));
    Ok(checks)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ports::DataStoreError;
    use crate::test_support::{
        FakeDatasetReader, FakeHttpClient, context, dataset, json_response, pet,
    };
    use petcheck_domain::Dataset;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn names(checks: &[CheckResult]) -> Vec<&str> {
        checks.iter().map(|c| c.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_add_new_pet_passes() {
        let baseline = dataset(vec![pet(1, PetType::Dog, "10"), pet(7, PetType::Cat, "20")]);
        let created = new_dog(8).unwrap();
        let mut pets: Vec<PetEntity> = baseline.clone().into();
        pets.push(created.clone());
        let reader = FakeDatasetReader::new(vec![Ok(baseline), Ok(dataset(pets))]);

        let echoed = serde_json::to_string(&created).unwrap();
        let client = Arc::new(FakeHttpClient::new(vec![Ok(json_response(201, &echoed))]));
        let runner = ScenarioRunner::new(Arc::clone(&client), context());

        let checks = add_new_pet(&runner, &reader).await.unwrap();
        assert_eq!(
            names(&checks),
            vec![
                "Response status is 201",
                "Response content type is application/json",
                "Response decodes as pet entity",
                "Pet list increased by one",
                "Pet list contains the new pet",
            ]
        );
        assert!(checks.iter().all(|c| c.passed), "{checks:#?}");

        let sent: PetEntity =
            serde_json::from_str(client.requests()[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(sent.pet_id, 8);
    }

    #[tokio::test]
    async fn test_add_new_pet_when_service_ignores_write() {
        let baseline = dataset(vec![pet(1, PetType::Dog, "10")]);
        let reader = FakeDatasetReader::fixed(baseline);
        let echoed = serde_json::to_string(&new_dog(2).unwrap()).unwrap();
        let client = Arc::new(FakeHttpClient::new(vec![Ok(json_response(201, &echoed))]));
        let runner = ScenarioRunner::new(client, context());

        let checks = add_new_pet(&runner, &reader).await.unwrap();
        let passed: Vec<_> = checks.iter().map(|c| c.passed).collect();
        assert_eq!(passed, vec![true, true, true, false, false]);
    }

    #[tokio::test]
    async fn test_add_new_pet_setup_failure() {
        let reader = FakeDatasetReader::failing();
        let client = Arc::new(FakeHttpClient::new(vec![]));
        let runner = ScenarioRunner::new(Arc::clone(&client), context());

        let result = add_new_pet(&runner, &reader).await;
        assert!(matches!(
            result,
            Err(SetupError::DataStore(DataStoreError::Unreadable { .. }))
        ));
        assert!(client.requests().is_empty());
    }

    #[tokio::test]
    async fn test_missing_fields_contract() {
        let reader = FakeDatasetReader::fixed(Dataset::default());
        let body = r#"{"title": "Bad Request", "status": 400, "instance": "/inventory/add",
            "detail": "Required fields are missing or invalid in request body."}"#;
        let client = Arc::new(FakeHttpClient::new(vec![Ok(json_response(400, body))]));
        let runner = ScenarioRunner::new(Arc::clone(&client), context());

        let checks = add_pet_with_missing_fields(&runner, &reader).await.unwrap();
        assert_eq!(checks.len(), 6);
        assert!(checks.iter().all(|c| c.passed), "{checks:#?}");
        assert_eq!(client.requests()[0].body.as_deref(), Some("{}"));
    }

    #[tokio::test]
    async fn test_missing_fields_accepted_by_service() {
        let reader = FakeDatasetReader::fixed(Dataset::default());
        let echoed = serde_json::to_string(&new_dog(1).unwrap()).unwrap();
        let client = Arc::new(FakeHttpClient::new(vec![Ok(json_response(201, &echoed))]));
        let runner = ScenarioRunner::new(client, context());

        let checks = add_pet_with_missing_fields(&runner, &reader).await.unwrap();
        assert_eq!(checks.len(), 6);
        assert!(checks.iter().all(|c| !c.passed));
    }
}
