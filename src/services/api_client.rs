//! HTTP client for the places backend.
//!
//! Every method performs exactly one request/response round-trip; retries,
//! caching and reconciliation live in the store layer on top of this.

use crate::config::ApiConfig;
use crate::error::AppError;
use crate::models::{GeoCoordinates, NewPhoto, Place};
use reqwest::multipart;
use serde::{Deserialize, Serialize};

/// Place entry as returned by the list endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaceSummary {
    pub id: String,
    pub name: String,
    pub city: String,
}

/// Full place record as returned by the details endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlaceDetails {
    pub id: String,
    pub name: String,
    pub city: String,
    pub description: String,
    pub location: GeoCoordinates,
    #[serde(default)]
    pub photo_ids: Vec<String>,
}

impl From<PlaceDetails> for Place {
    fn from(details: PlaceDetails) -> Self {
        Place {
            id: details.id,
            name: details.name,
            city: details.city,
            description: details.description,
            location: details.location,
            photo_ids: details.photo_ids,
        }
    }
}

/// Payload for creating a place; the backend assigns the id
#[derive(Debug, Clone, Serialize)]
pub struct CreatePlaceCommand {
    pub name: String,
    pub city: String,
    pub description: String,
    pub location: GeoCoordinates,
}

impl From<&Place> for CreatePlaceCommand {
    fn from(place: &Place) -> Self {
        Self {
            name: place.name.clone(),
            city: place.city.clone(),
            description: place.description.clone(),
            location: place.location,
        }
    }
}

/// Payload for updating an existing place
#[derive(Debug, Clone, Serialize)]
pub struct UpdatePlaceCommand {
    pub id: String,
    pub name: String,
    pub city: String,
    pub description: String,
    pub location: GeoCoordinates,
}

impl From<&Place> for UpdatePlaceCommand {
    fn from(place: &Place) -> Self {
        Self {
            id: place.id.clone(),
            name: place.name.clone(),
            city: place.city.clone(),
            description: place.description.clone(),
            location: place.location,
        }
    }
}

/// REST client for the places backend
#[derive(Debug, Clone)]
pub struct PlacesApi {
    base_url: String,
    http: reqwest::Client,
}

impl PlacesApi {
    /// Create a new API client from connection settings
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Lists all places as summaries
    pub async fn get_places(&self) -> Result<Vec<PlaceSummary>, AppError> {
        let url = format!("{}/places", self.base_url);
        log::debug!("GET {}", url);
        let response = self.http.get(&url).send().await?;
        let response = check_status(response, "Place list").await?;
        Ok(response.json().await?)
    }

    /// Fetches the full record of one place
    pub async fn get_place_details(&self, id: &str) -> Result<PlaceDetails, AppError> {
        let url = format!("{}/places/{}", self.base_url, id);
        log::debug!("GET {}", url);
        let response = self.http.get(&url).send().await?;
        let response = check_status(response, "Place").await?;
        Ok(response.json().await?)
    }

    /// Creates a place and returns the server-assigned id
    pub async fn create_place(&self, command: &CreatePlaceCommand) -> Result<String, AppError> {
        let url = format!("{}/places", self.base_url);
        log::debug!("POST {}", url);
        let response = self.http.post(&url).json(command).send().await?;
        let response = check_status(response, "Place").await?;
        Ok(response.json().await?)
    }

    pub async fn update_place(
        &self,
        id: &str,
        command: &UpdatePlaceCommand,
    ) -> Result<(), AppError> {
        let url = format!("{}/places/{}", self.base_url, id);
        log::debug!("PUT {}", url);
        let response = self.http.put(&url).json(command).send().await?;
        check_status(response, "Place").await?;
        Ok(())
    }

    pub async fn delete_place(&self, id: &str) -> Result<(), AppError> {
        let url = format!("{}/places/{}", self.base_url, id);
        log::debug!("DELETE {}", url);
        let response = self.http.delete(&url).send().await?;
        check_status(response, "Place").await?;
        Ok(())
    }

    /// Uploads one picked photo as a multipart form.
    ///
    /// The bytes are read from the photo's source URI at call time; the
    /// part is always named `file` with the filename `photo.jpg`, which is
    /// what the backend expects regardless of the actual MIME type.
    pub async fn add_photo(&self, place_id: &str, photo: &NewPhoto) -> Result<(), AppError> {
        let url = format!("{}/places/{}/photo", self.base_url, place_id);
        log::debug!("POST {} ({})", url, photo.mime_type);

        let data = std::fs::read(&photo.uri)
            .map_err(|e| AppError::Other(format!("Failed to read photo {}: {}", photo.uri, e)))?;
        let part = multipart::Part::bytes(data)
            .file_name("photo.jpg")
            .mime_str(&photo.mime_type)?;
        let form = multipart::Form::new().part("file", part);

        let response = self.http.post(&url).multipart(form).send().await?;
        check_status(response, "Place").await?;
        Ok(())
    }

    pub async fn delete_photo(&self, place_id: &str, photo_id: &str) -> Result<(), AppError> {
        let url = format!("{}/places/{}/photo/{}", self.base_url, place_id, photo_id);
        log::debug!("DELETE {}", url);
        let response = self.http.delete(&url).send().await?;
        check_status(response, "Photo").await?;
        Ok(())
    }

    /// Downloads the binary content of a photo
    pub async fn fetch_photo(&self, photo_id: &str) -> Result<Vec<u8>, AppError> {
        let url = self.photo_url(photo_id);
        log::debug!("GET {}", url);
        let response = self.http.get(&url).send().await?;
        let response = check_status(response, "Photo").await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Display URL for a photo; no network access
    pub fn photo_url(&self, photo_id: &str) -> String {
        format!("{}/files/{}", self.base_url, photo_id)
    }
}

/// Maps non-success statuses to the matching error variant
async fn check_status(
    response: reqwest::Response,
    what: &str,
) -> Result<reqwest::Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(AppError::NotFound(what.to_string()));
    }
    let message = response.text().await.unwrap_or_default();
    Err(AppError::Backend {
        status: status.as_u16(),
        message,
    })
}
