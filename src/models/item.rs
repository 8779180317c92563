use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full `item` row as stored. `created_on` and `updated_on` are set by the
/// store: both default to now() on insert and `updated_on` is rewritten on
/// every update.
#[derive(Debug, Clone, FromRow)]
pub struct Item {
    pub id: i32,
    pub item_name: String,
    pub description: String,
    pub picture: String,
    pub created_on: DateTime<Utc>,
    pub created_by: i32,
    pub updated_on: DateTime<Utc>,
    pub location_id: i32,
}

/// Wire shape for an item, used both as the response projection and as the
/// add/update request payload. id, created_on and updated_on never cross
/// the wire; clients depend on this exact field set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemProjection {
    pub item_name: String,
    pub description: String,
    pub picture: String,
    pub created_by: i32,
    pub location_id: i32,
}

impl From<Item> for ItemProjection {
    fn from(item: Item) -> Self {
        Self {
            item_name: item.item_name,
            description: item.description,
            picture: item.picture,
            created_by: item.created_by,
            location_id: item.location_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> Item {
        Item {
            id: 7,
            item_name: "umbrella".to_string(),
            description: "black, long handle".to_string(),
            picture: "umbrella.jpg".to_string(),
            created_on: Utc::now(),
            created_by: 1,
            updated_on: Utc::now(),
            location_id: 3,
        }
    }

    #[test]
    fn projection_hides_id_and_timestamps() {
        let value = serde_json::to_value(ItemProjection::from(sample_item())).unwrap();
        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            ["created_by", "description", "item_name", "location_id", "picture"]
        );
    }

    #[test]
    fn projection_parses_a_request_payload() {
        let payload = r#"{"item_name":"wallet","description":"brown leather","picture":"wallet.png","created_by":2,"location_id":5}"#;
        let parsed: ItemProjection = serde_json::from_str(payload).unwrap();
        assert_eq!(parsed.item_name, "wallet");
        assert_eq!(parsed.created_by, 2);
        assert_eq!(parsed.location_id, 5);
    }

    #[test]
    fn missing_payload_field_is_rejected() {
        let payload = r#"{"item_name":"wallet","description":"brown leather"}"#;
        assert!(serde_json::from_str::<ItemProjection>(payload).is_err());
    }
}
