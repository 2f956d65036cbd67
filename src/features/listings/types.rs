use serde::{Deserialize, Serialize};

/// Marketplace item as returned by the listings API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default, alias = "imageUrl")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
    #[serde(default, alias = "isSold")]
    pub is_sold: bool,
}

/// Body of `POST /listings`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreateListingRequest {
    pub title: String,
    pub description: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::{CreateListingRequest, Listing};

    #[test]
    fn deserializes_listing_response() {
        let listing: Listing = serde_json::from_str(
            r#"{"title":"Couch","description":"Barely used","price":40.0,"image_url":null,"location":"Pembina Hall","created_at":"2026-01-05T10:00:00","is_sold":false}"#,
        )
        .expect("valid json");

        assert_eq!(listing.title, "Couch");
        assert_eq!(listing.image_url, None);
        assert_eq!(listing.location.as_deref(), Some("Pembina Hall"));
        assert!(!listing.is_sold);
    }

    #[test]
    fn create_request_omits_missing_optionals() {
        let request = CreateListingRequest {
            title: "Desk".to_string(),
            description: "Solid oak desk".to_string(),
            price: 25.0,
            image_url: None,
            location: Some("University Centre".to_string()),
        };
        let json = serde_json::to_value(&request).expect("serializable");
        assert_eq!(
            json,
            serde_json::json!({
                "title": "Desk",
                "description": "Solid oak desk",
                "price": 25.0,
                "location": "University Centre",
            })
        );
    }
}
