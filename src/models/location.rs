use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Location {
    pub id: i32,
    pub address1: String,
    pub address2: String,
    pub city_id: i32,
}

/// Wire shape for a location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationProjection {
    pub address1: String,
    pub address2: String,
    pub city_id: i32,
}

impl From<Location> for LocationProjection {
    fn from(location: Location) -> Self {
        Self {
            address1: location.address1,
            address2: location.address2,
            city_id: location.city_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_omits_the_id() {
        let location = Location {
            id: 9,
            address1: "12 Main St".to_string(),
            address2: "Apt 3".to_string(),
            city_id: 4,
        };
        let value = serde_json::to_value(LocationProjection::from(location)).unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(map.len(), 3);
        assert!(map.get("id").is_none());
        assert_eq!(map["city_id"], 4);
    }
}
