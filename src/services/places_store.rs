//! Process-local cache and orchestration layer for the place collection.
//!
//! The store is the single source of truth within a running session: every
//! create, update and delete goes through [`PlacesApi`], and after each
//! mutation the local collection is reconciled with the last known server
//! state. Screens hold no copies of their own; they read through the
//! accessors here and re-render from them.

use crate::error::AppError;
use crate::models::{NewPhoto, PhotoDeleteOutcome, PhotoUploadOutcome, Place};
use crate::services::api_client::{CreatePlaceCommand, PlacesApi, UpdatePlaceCommand};
use tokio::task::JoinSet;

pub struct PlacesStore {
    api: PlacesApi,
    places: Vec<Place>,
    is_loading: bool,
    error: Option<String>,
}

impl PlacesStore {
    pub fn new(api: PlacesApi) -> Self {
        Self {
            api,
            places: Vec::new(),
            is_loading: false,
            error: None,
        }
    }

    /// The cached place collection, in server list order
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Message of the last failed operation, cleared on the next attempt
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replaces the local collection with the current server state.
    ///
    /// Fetches the summary list, then the full details of every entry
    /// concurrently. A detail fetch that fails is logged and its place
    /// dropped from the result without cancelling its siblings; only a
    /// failure of the list request itself lands in `error`, in which case
    /// the previous collection is kept.
    pub async fn fetch_places(&mut self) {
        self.is_loading = true;
        self.error = None;

        match self.load_places().await {
            Ok(places) => {
                log::info!("Fetched {} places", places.len());
                self.places = places;
            }
            Err(e) => {
                log::error!("Failed to fetch places: {}", e);
                self.error = Some(e.user_message());
            }
        }

        self.is_loading = false;
    }

    async fn load_places(&self) -> Result<Vec<Place>, AppError> {
        let summaries = self.api.get_places().await?;

        let mut join_set = JoinSet::new();
        for (index, summary) in summaries.into_iter().enumerate() {
            let api = self.api.clone();
            join_set.spawn(async move {
                let details = api.get_place_details(&summary.id).await;
                (index, summary, details)
            });
        }

        let mut fetched = Vec::new();
        while let Some(result) = join_set.join_next().await {
            match result {
                Ok((index, _, Ok(details))) => fetched.push((index, Place::from(details))),
                Ok((_, summary, Err(e))) => {
                    log::warn!("Dropping place {} from the list: {}", summary.id, e);
                }
                Err(e) => {
                    log::warn!("Detail fetch task failed: {}", e);
                }
            }
        }

        // JoinSet yields in completion order; restore server list order.
        fetched.sort_by_key(|(index, _)| *index);
        Ok(fetched.into_iter().map(|(_, place)| place).collect())
    }

    /// Fetches the current state of one place directly from the backend.
    ///
    /// Deliberately bypasses the local cache so detail and edit views
    /// always start from the server's copy.
    pub async fn get_place_by_id(&mut self, id: &str) -> Option<Place> {
        self.error = None;
        match self.api.get_place_details(id).await {
            Ok(details) => Some(Place::from(details)),
            Err(e) => {
                log::error!("Failed to fetch place {}: {}", id, e);
                self.error = Some(e.user_message());
                None
            }
        }
    }

    /// Creates a place on the backend, then uploads its new photos.
    ///
    /// The place fields are submitted first to obtain the server-assigned
    /// id; each photo is then uploaded sequentially under that id. Photo
    /// uploads are best-effort: a failed upload shows up in the returned
    /// outcomes and the loop continues. Afterwards the whole collection is
    /// re-fetched so `photo_ids` reflects what the backend accepted.
    ///
    /// Only a validation failure or a failed create call records `error`
    /// and skips the uploads and the resync.
    pub async fn add_place(
        &mut self,
        place: &Place,
        new_photos: &[NewPhoto],
    ) -> Vec<PhotoUploadOutcome> {
        if let Err(e) = place.validate() {
            self.error = Some(e.user_message());
            return Vec::new();
        }

        self.is_loading = true;
        self.error = None;

        let created_id = match self.api.create_place(&CreatePlaceCommand::from(place)).await {
            Ok(id) => id,
            Err(e) => {
                log::error!("Failed to create place: {}", e);
                self.error = Some(e.user_message());
                self.is_loading = false;
                return Vec::new();
            }
        };
        log::info!("Created place {}", created_id);

        let outcomes = self.upload_photos(&created_id, new_photos).await;
        self.is_loading = false;

        self.fetch_places().await;
        outcomes
    }

    /// Updates an existing place, then uploads any new photos.
    ///
    /// Same shape as [`add_place`](Self::add_place): best-effort per photo,
    /// full resync afterwards.
    pub async fn update_place(
        &mut self,
        place: &Place,
        new_photos: &[NewPhoto],
    ) -> Vec<PhotoUploadOutcome> {
        if let Err(e) = place.validate() {
            self.error = Some(e.user_message());
            return Vec::new();
        }

        self.is_loading = true;
        self.error = None;

        if let Err(e) = self
            .api
            .update_place(&place.id, &UpdatePlaceCommand::from(place))
            .await
        {
            log::error!("Failed to update place {}: {}", place.id, e);
            self.error = Some(e.user_message());
            self.is_loading = false;
            return Vec::new();
        }

        let outcomes = self.upload_photos(&place.id, new_photos).await;
        self.is_loading = false;

        self.fetch_places().await;
        outcomes
    }

    /// Uploads photos one at a time, isolating failures per photo
    async fn upload_photos(
        &self,
        place_id: &str,
        new_photos: &[NewPhoto],
    ) -> Vec<PhotoUploadOutcome> {
        let mut outcomes = Vec::with_capacity(new_photos.len());
        for photo in new_photos {
            let result = self.api.add_photo(place_id, photo).await;
            if let Err(e) = &result {
                log::error!("Failed to upload photo {}: {}", photo.uri, e);
            }
            outcomes.push(PhotoUploadOutcome {
                uri: photo.uri.clone(),
                result,
            });
        }
        outcomes
    }

    /// Deletes a place and removes it from the local collection.
    ///
    /// An empty id is a caller bug and returns `AppError::Validation`
    /// without contacting the backend; this is the only error that escapes
    /// the store boundary. Transport failures land in `error` like in
    /// every other operation.
    pub async fn delete_place(&mut self, id: &str) -> Result<(), AppError> {
        if id.trim().is_empty() {
            return Err(AppError::Validation(
                "Place id must not be empty".to_string(),
            ));
        }

        self.error = None;
        match self.api.delete_place(id).await {
            Ok(()) => {
                self.places.retain(|place| place.id != id);
                log::info!("Deleted place {}", id);
            }
            Err(e) => {
                log::error!("Failed to delete place {}: {}", id, e);
                self.error = Some(e.user_message());
            }
        }
        Ok(())
    }

    /// Deletes one photo and removes its id from the owning place locally
    pub async fn delete_photo(&mut self, place_id: &str, photo_id: &str) {
        self.error = None;
        match self.api.delete_photo(place_id, photo_id).await {
            Ok(()) => {
                self.remove_local_photo(place_id, photo_id);
                log::info!("Deleted photo {} from place {}", photo_id, place_id);
            }
            Err(e) => {
                log::error!("Failed to delete photo {}: {}", photo_id, e);
                self.error = Some(e.user_message());
            }
        }
    }

    /// Best-effort removal of several photos from one place.
    ///
    /// Mirrors the edit flow where photos marked for deletion are removed
    /// before the place itself is updated; one failed delete does not
    /// abort the rest.
    pub async fn delete_photos(
        &mut self,
        place_id: &str,
        photo_ids: &[String],
    ) -> Vec<PhotoDeleteOutcome> {
        let mut outcomes = Vec::with_capacity(photo_ids.len());
        for photo_id in photo_ids {
            let result = self.api.delete_photo(place_id, photo_id).await;
            match &result {
                Ok(()) => self.remove_local_photo(place_id, photo_id),
                Err(e) => log::error!("Failed to delete photo {}: {}", photo_id, e),
            }
            outcomes.push(PhotoDeleteOutcome {
                photo_id: photo_id.clone(),
                result,
            });
        }
        outcomes
    }

    fn remove_local_photo(&mut self, place_id: &str, photo_id: &str) {
        if let Some(place) = self.places.iter_mut().find(|place| place.id == place_id) {
            place.photo_ids.retain(|id| id.as_str() != photo_id);
        }
    }

    /// Display URL for a photo; pure derivation, no network or state access
    pub fn photo_url(&self, photo_id: &str) -> String {
        self.api.photo_url(photo_id)
    }
}
