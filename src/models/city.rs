use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct City {
    pub id: i32,
    pub city_name: String,
    pub city_code: String,
    pub country_id: i32,
}

/// Wire shape for a city. The parent country is referenced by id, never
/// embedded; callers resolve it with their own lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityProjection {
    pub city_name: String,
    pub city_code: String,
    pub country_id: i32,
}

impl From<City> for CityProjection {
    fn from(city: City) -> Self {
        Self {
            city_name: city.city_name,
            city_code: city.city_code,
            country_id: city.country_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_keeps_the_foreign_key() {
        let city = City {
            id: 4,
            city_name: "Nairobi".to_string(),
            city_code: "NBO".to_string(),
            country_id: 1,
        };
        let value = serde_json::to_value(CityProjection::from(city)).unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(map.len(), 3);
        assert_eq!(map["country_id"], 1);
        assert!(map.get("id").is_none());
    }
}
