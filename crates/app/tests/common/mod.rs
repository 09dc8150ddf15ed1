//! In-process stand-in for the pet-inventory service.
//!
//! The stub persists to the same JSON fixture the harness reads, so the
//! before/after snapshots observe its writes.
#![allow(clippy::unwrap_used, clippy::expect_used, dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use axum::Router;
use axum::extract::{Path as UrlPath, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{patch, post};
use petcheck_domain::{Breed, Gender, Money, PetEntity, PetId, PetType, Skin};
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// Writes a three-pet fixture into `dir` and returns its path.
pub fn seed_fixture(dir: &TempDir) -> PathBuf {
    let pets = vec![
        pet(1, PetType::Cat, "80.00", Breed::Persian),
        pet(2, PetType::Dog, "149.50", Breed::Beagle),
        pet(3, PetType::Dog, "310.00", Breed::Labrador),
    ];
    let path = dir.path().join("petstore.json");
    store(&path, &pets);
    path
}

pub fn pet(id: PetId, pet_type: PetType, cost: &str, breed: Breed) -> PetEntity {
    PetEntity::new(id, pet_type, Money::parse(cost).unwrap())
        .with_gender(Gender::Male)
        .with_skin(Skin::Fur)
        .with_breed(breed)
        .with_age(4)
        .with_quantity(2)
}

pub fn load(path: &Path) -> Vec<PetEntity> {
    serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap()
}

fn store(path: &Path, pets: &[PetEntity]) {
    std::fs::write(path, serde_json::to_vec_pretty(pets).unwrap()).unwrap();
}

#[derive(Clone)]
struct Inventory {
    path: Arc<PathBuf>,
    lock: Arc<Mutex<()>>,
    problems: Arc<AtomicU64>,
}

impl Inventory {
    fn problem(&self, status: StatusCode, detail: &str, instance: &str) -> Response {
        let served = self.problems.fetch_add(1, Ordering::SeqCst);
        let title = status.canonical_reason().unwrap_or_default();
        let body = serde_json::json!({
            "type": "about:blank",
            "title": title,
            "status": status.as_u16(),
            "detail": detail,
            "instance": instance,
            "timestamp": format!("2026-01-01T00:00:{:02}Z", served % 60),
        });
        (
            status,
            [(header::CONTENT_TYPE, "application/problem+json")],
            body.to_string(),
        )
            .into_response()
    }
}

fn entity(status: StatusCode, pet: &PetEntity) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        serde_json::to_string(pet).unwrap(),
    )
        .into_response()
}

async fn add_pet(State(inventory): State<Inventory>, body: String) -> Response {
    let Ok(pet) = serde_json::from_str::<PetEntity>(&body) else {
        return inventory.problem(
            StatusCode::BAD_REQUEST,
            "Required fields are missing or invalid in request body.",
            "/inventory/add",
        );
    };

    let _guard = inventory.lock.lock().await;
    let mut pets = load(&inventory.path);
    pets.push(pet.clone());
    store(&inventory.path, &pets);
    entity(StatusCode::CREATED, &pet)
}

async fn update_price(
    State(inventory): State<Inventory>,
    UrlPath(id): UrlPath<PetId>,
    body: String,
) -> Response {
    let instance = format!("/inventory/dog/{id}");
    let price = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("price").cloned())
        .and_then(|v| serde_json::from_value::<Money>(v).ok());
    let Some(price) = price else {
        return inventory.problem(StatusCode::BAD_REQUEST, "Price is required", &instance);
    };
    if price.is_negative() {
        return inventory.problem(StatusCode::BAD_REQUEST, "Price must be positive", &instance);
    }

    let _guard = inventory.lock.lock().await;
    let mut pets = load(&inventory.path);
    let Some(dog) = pets
        .iter_mut()
        .find(|p| p.pet_id == id && p.pet_type == PetType::Dog)
    else {
        return inventory.problem(
            StatusCode::NOT_FOUND,
            &format!("Pet with ID {id} not found"),
            &instance,
        );
    };
    dog.cost = price;
    let updated = dog.clone();
    store(&inventory.path, &pets);
    entity(StatusCode::OK, &updated)
}

/// Serves a well-behaved inventory over `fixture`; returns its base URL.
pub async fn spawn_inventory(fixture: &Path) -> String {
    let inventory = Inventory {
        path: Arc::new(fixture.to_path_buf()),
        lock: Arc::new(Mutex::new(())),
        problems: Arc::new(AtomicU64::new(0)),
    };
    let router = Router::new()
        .route("/inventory/add", post(add_pet))
        .route("/inventory/dog/{id}", patch(update_price))
        .with_state(inventory);
    serve(router).await
}

/// Serves an inventory that answers every call with a plain-text 500.
pub async fn spawn_broken_inventory() -> String {
    let broken = || async {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, "text/plain")],
            "boom",
        )
    };
    let router = Router::new()
        .route("/inventory/add", post(broken))
        .route("/inventory/dog/{id}", patch(broken));
    serve(router).await
}

/// A local port with nothing listening on it.
pub fn closed_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/")
}
