pub mod api_client;
pub mod places_store;

pub use api_client::{
    CreatePlaceCommand, PlaceDetails, PlaceSummary, PlacesApi, UpdatePlaceCommand,
};
pub use places_store::PlacesStore;
