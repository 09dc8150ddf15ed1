//! `PATCH /inventory/dog/{id}` scenarios.

use petcheck_domain::{BodyKind, CheckResult, Dataset, ErrorContract, Money, PetEntity, PetType};

use crate::checks::{
    ContractChecker, StateDiffVerifier, content_type_check, decode_check, status_check,
    transport_failure,
};
use crate::error::{SetupError, SetupResult};
use crate::identifiers::missing_id;
use crate::operation::Operation;
use crate::ports::{DatasetReader, HttpClient};
use crate::scenario_runner::ScenarioRunner;

const PRICE_DELTA: &str = "50.00";
const MISSING_PET_PRICE: &str = "100.00";
const NEGATIVE_PRICE: &str = "-10.00";
const NEGATIVE_PRICE_DETAIL: &str = "Price must be positive";

/// JSON body of a price update; `price` is emitted verbatim as a number.
#[must_use]
pub fn price_body(price: &str) -> String {
    format!("{{\"price\": {price}}}")
}

fn target_dog(dataset: &Dataset) -> SetupResult<PetEntity> {
    dataset
        .first_of_type(PetType::Dog)
        .cloned()
        .ok_or(SetupError::NoCandidate(PetType::Dog))
}

fn parse_money(text: &str) -> SetupResult<Money> {
    Money::parse(text).map_err(|e| SetupError::Request(e.to_string()))
}

/// Raises the first dog's price by 50 and verifies nothing else changed.
///
/// # Errors
///
/// Returns a `SetupError` if the baseline cannot be read or has no dog.
pub async fn update_dog_price<C: HttpClient, R: DatasetReader>(
    runner: &ScenarioRunner<C>,
    reader: &R,
) -> SetupResult<Vec<CheckResult>> {
    let before = reader.read_dataset().await?;
    let dog = target_dog(&before)?;
    let rendered = (&dog.cost + &parse_money(PRICE_DELTA)?).to_fixed(2);
    let requested = parse_money(&rendered)?;

    let operation = Operation::UpdatePrice { id: dog.pet_id };
    let result = match runner.run(operation, &price_body(&rendered)).await {
        Ok(result) => result,
        Err(e) => return Ok(vec![transport_failure(&e)]),
    };

    let mut checks = vec![
        status_check(operation.success_status(), &result),
        content_type_check(&result),
        decode_check(BodyKind::Entity, &result),
    ];
    checks.extend(StateDiffVerifier::verify_price_update_result(
        &dog, &result, &requested,
    ));
    Ok(checks)
}

/// Updates an identifier beyond every existing one and verifies the 404
/// contract names it.
///
/// # Errors
///
/// Returns a `SetupError` if the baseline cannot be read.
pub async fn update_missing_pet<C: HttpClient, R: DatasetReader>(
    runner: &ScenarioRunner<C>,
    reader: &R,
) -> SetupResult<Vec<CheckResult>> {
    let before = reader.read_dataset().await?;
    let id = missing_id(&before);

    let operation = Operation::UpdatePrice { id };
    let result = match runner.run(operation, &price_body(MISSING_PET_PRICE)).await {
        Ok(result) => result,
        Err(e) => return Ok(vec![transport_failure(&e)]),
    };

    let expected = ErrorContract::not_found(format!("Pet with ID {id} not found"), operation.path());
    let mut checks = vec![
        status_check(expected.status, &result),
        decode_check(BodyKind::Problem, &result),
    ];
    checks.extend(ContractChecker::check_result(&expected, &result));

    let name = "Detail references the identifier";
    checks.push(match result.problem() {
        Some(problem) if problem.detail.contains(&id.to_string()) => CheckResult::pass(name),
        Some(problem) => CheckResult::fail(
            name,
            format!("detail '{}' does not mention {id}", problem.detail),
        ),
        None => CheckResult::fail(name, result.diagnostic()),
    });
    Ok(checks)
}

/// Sends a negative price for the first dog and verifies the 400 contract.
///
/// # Errors
///
/// Returns a `SetupError` if the baseline cannot be read or has no dog.
pub async fn update_with_negative_price<C: HttpClient, R: DatasetReader>(
    runner: &ScenarioRunner<C>,
    reader: &R,
) -> SetupResult<Vec<CheckResult>> {
    let before = reader.read_dataset().await?;
    let dog = target_dog(&before)?;

    let operation = Operation::UpdatePrice { id: dog.pet_id };
    let result = match runner.run(operation, &price_body(NEGATIVE_PRICE)).await {
        Ok(result) => result,
        Err(e) => return Ok(vec![transport_failure(&e)]),
    };

    let expected = ErrorContract::bad_request(NEGATIVE_PRICE_DETAIL, operation.path());
    let mut checks = vec![
        status_check(expected.status, &result),
        decode_check(BodyKind::Problem, &result),
    ];
    checks.extend(ContractChecker::check_result(&expected, &result));
    Ok(checks)
}

/// Sends the missing-identifier update twice and verifies both answers carry
/// the same contract.
///
/// # Errors
///
/// Returns a `SetupError` if the baseline cannot be read.
pub async fn repeat_update_missing_pet<C: HttpClient, R: DatasetReader>(
    runner: &ScenarioRunner<C>,
    reader: &R,
) -> SetupResult<Vec<CheckResult>> {
    let before = reader.read_dataset().await?;
    let operation = Operation::UpdatePrice {
        id: missing_id(&before),
    };
    let body = price_body(MISSING_PET_PRICE);

    let first = match runner.run(operation, &body).await {
        Ok(result) => result,
        Err(e) => return Ok(vec![transport_failure(&e)]),
    };
    let second = match runner.run(operation, &body).await {
        Ok(result) => result,
        Err(e) => return Ok(vec![status_check(404, &first), transport_failure(&e)]),
    };

    let name = "Repeated request yields identical error contract";
    let identical = match (first.problem(), second.problem()) {
        (Some(a), Some(b)) => CheckResult::equals(name, a, b),
        (None, _) => CheckResult::fail(name, format!("first response: {}", first.diagnostic())),
        (_, None) => CheckResult::fail(name, format!("second response: {}", second.diagnostic())),
    };
    Ok(vec![
        status_check(404, &first),
        status_check(404, &second),
        identical,
    ])
}
