//! # City Explorer
//!
//! Client-side data layer for a "places" (points of interest) application.
//!
//! This crate provides the pieces a mobile or desktop frontend builds on:
//! - Typed place/photo models with form validation
//! - A REST client for the places backend ([`PlacesApi`])
//! - A process-local place/photo store that orchestrates CRUD and keeps
//!   the local collection in sync with the last known server state
//!   ([`PlacesStore`])
//!
//! Screens, maps and navigation are deliberately out of scope; the UI layer
//! consumes the store through its read accessors and dispatches its actions.

pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use config::ApiConfig;
pub use error::AppError;
pub use models::{GeoCoordinates, NewPhoto, PhotoDeleteOutcome, PhotoUploadOutcome, Place};
pub use services::{PlacesApi, PlacesStore};
