use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Country {
    pub id: i32,
    pub country_name: String,
    pub country_code: String,
}

/// Wire shape for a country.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryProjection {
    pub country_name: String,
    pub country_code: String,
}

impl From<Country> for CountryProjection {
    fn from(country: Country) -> Self {
        Self {
            country_name: country.country_name,
            country_code: country.country_code,
        }
    }
}
