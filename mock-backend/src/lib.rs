//! In-memory places backend for integration tests.
//!
//! Implements the REST surface the client consumes, with hooks to inject
//! failures into individual endpoints: a set of place ids whose details
//! endpoint answers 500, and an upload budget after which further photo
//! uploads answer 500. Place storage is insertion-ordered so the list
//! endpoint has a stable order tests can rely on.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct GeoCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct PlaceSummary {
    pub id: String,
    pub name: String,
    pub city: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceRecord {
    pub id: String,
    pub name: String,
    pub city: String,
    pub description: String,
    pub location: GeoCoordinates,
    pub photo_ids: Vec<String>,
}

#[derive(Deserialize)]
pub struct CreatePlace {
    pub name: String,
    pub city: String,
    pub description: String,
    pub location: GeoCoordinates,
}

#[derive(Deserialize)]
pub struct UpdatePlace {
    pub id: String,
    pub name: String,
    pub city: String,
    pub description: String,
    pub location: GeoCoordinates,
}

/// Shared backend state with failure-injection hooks for tests
#[derive(Default)]
pub struct Backend {
    /// Insertion order is list order
    pub places: Vec<PlaceRecord>,
    /// Uploaded photo bytes keyed by generated photo id
    pub photos: HashMap<String, Vec<u8>>,
    /// Place ids whose details endpoint answers 500
    pub fail_details: HashSet<String>,
    /// When set, only this many further photo uploads succeed
    pub upload_budget: Option<usize>,
}

pub type Db = Arc<RwLock<Backend>>;

pub fn new_db() -> Db {
    Arc::new(RwLock::new(Backend::default()))
}

pub fn app(db: Db) -> Router {
    Router::new()
        .route("/places", get(list_places).post(create_place))
        .route(
            "/places/{id}",
            get(get_place).put(update_place).delete(delete_place),
        )
        .route("/places/{id}/photo", post(add_photo))
        .route("/places/{id}/photo/{photo_id}", delete(delete_photo))
        .route("/files/{photo_id}", get(get_photo))
        .with_state(db)
}

pub async fn run(listener: TcpListener, db: Db) -> Result<(), std::io::Error> {
    axum::serve(listener, app(db)).await
}

/// Seed set drawn from the app's starter data
pub fn sample_places() -> Vec<PlaceRecord> {
    [
        (
            "Central Park",
            "New York",
            "A sprawling green oasis in the heart of New York City offering scenic views and recreational areas.",
            40.785091,
            -73.968285,
        ),
        (
            "Golden Gate Bridge",
            "San Francisco",
            "An iconic suspension bridge known for its stunning views and engineering excellence.",
            37.8199,
            -122.4783,
        ),
        (
            "The Louvre",
            "Paris",
            "The world's largest art museum, home to thousands of artworks including the Mona Lisa.",
            48.8606,
            2.3376,
        ),
    ]
    .into_iter()
    .map(|(name, city, description, latitude, longitude)| PlaceRecord {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        city: city.to_string(),
        description: description.to_string(),
        location: GeoCoordinates {
            latitude,
            longitude,
        },
        photo_ids: Vec::new(),
    })
    .collect()
}

async fn list_places(State(db): State<Db>) -> Json<Vec<PlaceSummary>> {
    let backend = db.read().await;
    let summaries = backend
        .places
        .iter()
        .map(|place| PlaceSummary {
            id: place.id.clone(),
            name: place.name.clone(),
            city: place.city.clone(),
        })
        .collect();
    Json(summaries)
}

async fn get_place(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<PlaceRecord>, StatusCode> {
    let backend = db.read().await;
    if backend.fail_details.contains(&id) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    backend
        .places
        .iter()
        .find(|place| place.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn create_place(
    State(db): State<Db>,
    Json(input): Json<CreatePlace>,
) -> (StatusCode, Json<String>) {
    let record = PlaceRecord {
        id: Uuid::new_v4().to_string(),
        name: input.name,
        city: input.city,
        description: input.description,
        location: input.location,
        photo_ids: Vec::new(),
    };
    let id = record.id.clone();
    db.write().await.places.push(record);
    (StatusCode::CREATED, Json(id))
}

async fn update_place(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<UpdatePlace>,
) -> StatusCode {
    let mut backend = db.write().await;
    match backend.places.iter_mut().find(|place| place.id == id) {
        Some(place) => {
            place.name = input.name;
            place.city = input.city;
            place.description = input.description;
            place.location = input.location;
            StatusCode::NO_CONTENT
        }
        None => StatusCode::NOT_FOUND,
    }
}

async fn delete_place(State(db): State<Db>, Path(id): Path<String>) -> StatusCode {
    let mut backend = db.write().await;
    let before = backend.places.len();
    backend.places.retain(|place| place.id != id);
    if backend.places.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::NO_CONTENT
    }
}

async fn add_photo(
    State(db): State<Db>,
    Path(id): Path<String>,
    mut multipart: Multipart,
) -> StatusCode {
    let mut data = None;
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some("file") {
            data = field.bytes().await.ok().map(|bytes| bytes.to_vec());
        }
    }
    let Some(bytes) = data else {
        return StatusCode::BAD_REQUEST;
    };

    let mut backend = db.write().await;
    let Some(index) = backend.places.iter().position(|place| place.id == id) else {
        return StatusCode::NOT_FOUND;
    };

    if let Some(budget) = backend.upload_budget {
        if budget == 0 {
            return StatusCode::INTERNAL_SERVER_ERROR;
        }
        backend.upload_budget = Some(budget - 1);
    }

    let photo_id = Uuid::new_v4().to_string();
    backend.places[index].photo_ids.push(photo_id.clone());
    backend.photos.insert(photo_id, bytes);
    StatusCode::NO_CONTENT
}

async fn delete_photo(
    State(db): State<Db>,
    Path((id, photo_id)): Path<(String, String)>,
) -> StatusCode {
    let mut backend = db.write().await;
    let Some(index) = backend.places.iter().position(|place| place.id == id) else {
        return StatusCode::NOT_FOUND;
    };

    let photos = &mut backend.places[index].photo_ids;
    let before = photos.len();
    photos.retain(|existing| existing != &photo_id);
    if photos.len() == before {
        return StatusCode::NOT_FOUND;
    }

    backend.photos.remove(&photo_id);
    StatusCode::NO_CONTENT
}

async fn get_photo(
    State(db): State<Db>,
    Path(photo_id): Path<String>,
) -> Result<Vec<u8>, StatusCode> {
    let backend = db.read().await;
    backend
        .photos
        .get(&photo_id)
        .cloned()
        .ok_or(StatusCode::NOT_FOUND)
}
