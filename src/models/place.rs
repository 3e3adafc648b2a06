use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// Geographical coordinates of a place
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for GeoCoordinates {
    /// Warsaw city centre, the position new places start from
    fn default() -> Self {
        Self {
            latitude: 52.2297,
            longitude: 21.0122,
        }
    }
}

/// A named point of interest with location, description and photos.
///
/// `photo_ids` is kept in insertion order, which is also display order.
/// The list is only ever populated from the backend after uploads have
/// been acknowledged; the client never holds photo bytes itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: String,
    pub name: String,
    pub city: String,
    pub description: String,
    pub location: GeoCoordinates,
    #[serde(default)]
    pub photo_ids: Vec<String>,
}

impl Place {
    /// Creates a new place with generated UUID and no photos
    pub fn new(
        name: String,
        city: String,
        description: String,
        location: GeoCoordinates,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            city,
            description,
            location,
            photo_ids: Vec::new(),
        }
    }

    /// Validates all fields of the place
    pub fn validate(&self) -> Result<(), AppError> {
        validate_name(&self.name).map_err(AppError::Validation)?;
        validate_city(&self.city).map_err(AppError::Validation)?;
        validate_description(&self.description).map_err(AppError::Validation)?;
        Ok(())
    }
}

/// Checks the name field (3-100 characters)
pub fn validate_name(value: &str) -> Result<(), String> {
    check_length("Name", value, 3, 100)
}

/// Checks the city field (3-100 characters)
pub fn validate_city(value: &str) -> Result<(), String> {
    check_length("City", value, 3, 100)
}

/// Checks the description field (3-250 characters)
pub fn validate_description(value: &str) -> Result<(), String> {
    check_length("Description", value, 3, 250)
}

fn check_length(field: &str, value: &str, min: usize, max: usize) -> Result<(), String> {
    let len = value.chars().count();
    if len < min {
        return Err(format!("{} must be at least {} characters", field, min));
    }
    if len > max {
        return Err(format!("{} must not exceed {} characters", field, max));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_place() -> Place {
        Place::new(
            "Central Park".to_string(),
            "New York".to_string(),
            "A sprawling green oasis in the heart of the city.".to_string(),
            GeoCoordinates {
                latitude: 40.785091,
                longitude: -73.968285,
            },
        )
    }

    #[test]
    fn test_new_place() {
        let place = valid_place();
        assert_eq!(place.name, "Central Park");
        assert!(place.photo_ids.is_empty());
        assert!(uuid::Uuid::parse_str(&place.id).is_ok());
    }

    #[test]
    fn test_validate_in_bounds() {
        assert!(valid_place().validate().is_ok());
    }

    #[test]
    fn test_validate_bounds_exactly() {
        let mut place = valid_place();
        place.name = "abc".to_string();
        place.city = "a".repeat(100);
        place.description = "b".repeat(250);
        assert!(place.validate().is_ok());
    }

    #[test]
    fn test_validate_name_too_short() {
        let mut place = valid_place();
        place.name = "ab".to_string();
        let err = place.validate().unwrap_err();
        assert!(err.user_message().contains("Name"));
    }

    #[test]
    fn test_validate_name_too_long() {
        let mut place = valid_place();
        place.name = "a".repeat(101);
        let err = place.validate().unwrap_err();
        assert!(err.user_message().contains("Name"));
    }

    #[test]
    fn test_validate_city_too_short() {
        assert!(validate_city("ab").is_err());
        assert!(validate_city("abc").is_ok());
    }

    #[test]
    fn test_validate_description_too_long() {
        assert!(validate_description(&"d".repeat(251)).is_err());
        assert!(validate_description(&"d".repeat(250)).is_ok());
    }

    #[test]
    fn test_field_scoped_messages() {
        assert!(validate_name("ab").unwrap_err().starts_with("Name"));
        assert!(validate_city("ab").unwrap_err().starts_with("City"));
        assert!(validate_description("ab")
            .unwrap_err()
            .starts_with("Description"));
    }

    #[test]
    fn test_photo_ids_serialized_as_camel_case() {
        let place = valid_place();
        let json = serde_json::to_value(&place).unwrap();
        assert!(json.get("photoIds").is_some());
        assert!(json.get("photo_ids").is_none());
    }

    #[test]
    fn test_photo_ids_default_to_empty_on_deserialize() {
        let json = r#"{
            "id": "4a3e9c1e-0000-0000-0000-000000000000",
            "name": "The Louvre",
            "city": "Paris",
            "description": "The largest art museum in the world.",
            "location": {"latitude": 48.8606, "longitude": 2.3376}
        }"#;
        let place: Place = serde_json::from_str(json).unwrap();
        assert!(place.photo_ids.is_empty());
    }
}
