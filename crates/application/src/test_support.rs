//! In-memory fakes of the ports for unit tests.

#![allow(clippy::unwrap_used)]

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use petcheck_domain::{
    Breed, Dataset, Gender, Header, Headers, HttpRequest, HttpResponse, Money, PetEntity, PetId,
    PetType, Skin,
};
use url::Url;

use crate::context::HarnessContext;
use crate::ports::{DataStoreError, DatasetReader, HttpClient, HttpClientError};

/// Context pointing at a fake host.
pub fn context() -> HarnessContext {
    HarnessContext::new(Url::parse("http://inventory.test/").unwrap())
}

/// A JSON response with the given status and body.
pub fn json_response(status: u16, body: &str) -> HttpResponse {
    HttpResponse::new(
        status,
        Headers::new().with(Header::new("Content-Type", "application/json")),
        body,
        Duration::from_millis(3),
    )
}

/// A fully populated entity.
pub fn pet(id: PetId, pet_type: PetType, cost: &str) -> PetEntity {
    PetEntity::new(id, pet_type, Money::parse(cost).unwrap())
        .with_gender(Gender::Male)
        .with_skin(Skin::Fur)
        .with_breed(Breed::Beagle)
        .with_age(3)
        .with_quantity(1)
}

/// A dataset built from entities.
pub fn dataset(pets: Vec<PetEntity>) -> Dataset {
    Dataset::new(pets).unwrap()
}

/// HTTP client that replays scripted results and records requests.
pub struct FakeHttpClient {
    script: Mutex<VecDeque<Result<HttpResponse, HttpClientError>>>,
    sent: Mutex<Vec<HttpRequest>>,
}

impl FakeHttpClient {
    pub fn new(script: Vec<Result<HttpResponse, HttpClientError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.sent.lock().unwrap().clone()
    }
}

impl HttpClient for FakeHttpClient {
    async fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, HttpClientError> {
        self.sent.lock().unwrap().push(request.clone());
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(HttpClientError::Other("script exhausted".to_string())))
    }
}

/// Dataset reader that returns scripted snapshots in order, repeating the last.
pub struct FakeDatasetReader {
    snapshots: Mutex<VecDeque<Result<Dataset, DataStoreError>>>,
}

impl FakeDatasetReader {
    pub fn new(snapshots: Vec<Result<Dataset, DataStoreError>>) -> Self {
        Self {
            snapshots: Mutex::new(snapshots.into()),
        }
    }

    pub fn fixed(dataset: Dataset) -> Self {
        Self::new(vec![Ok(dataset)])
    }

    pub fn failing() -> Self {
        Self::new(vec![Err(DataStoreError::Unreadable {
            location: "memory".to_string(),
            message: "gone".to_string(),
        })])
    }
}

impl DatasetReader for FakeDatasetReader {
    async fn read_dataset(&self) -> Result<Dataset, DataStoreError> {
        let mut snapshots = self.snapshots.lock().unwrap();
        if snapshots.len() > 1 {
            snapshots.pop_front().unwrap()
        } else {
            snapshots.front().cloned().unwrap()
        }
    }
}
