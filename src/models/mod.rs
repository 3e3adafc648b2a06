pub mod photo;
pub mod place;

pub use photo::{NewPhoto, PhotoDeleteOutcome, PhotoUploadOutcome};
pub use place::{GeoCoordinates, Place};
