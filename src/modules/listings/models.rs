use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Placeholder shown when a listing is created without an image.
pub const DEFAULT_IMAGE: &str =
    "https://images.unsplash.com/photo-1625505826533-5c80aca7d157?w=800";

/// A rentable-property record, the primary entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub description: String,
    pub image: String,
    pub price: f64,
    pub location: String,
    pub country: String,
    /// Ordered sequence of owned review references. Deleting the listing
    /// does not cascade to these.
    #[serde(default)]
    pub reviews: Vec<ObjectId>,
}

impl Listing {
    pub fn id_hex(&self) -> String {
        self.id.map(|id| id.to_hex()).unwrap_or_default()
    }
}

/// A comment+rating record owned by exactly one listing at creation time.
/// Its lifetime is not tied to the parent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub comment: String,
    pub rating: i32,
}

/// Listing creation/update payload. Fields are `Option` so a missing form
/// key surfaces as a `required` violation (400) instead of a rejection.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ListingForm {
    #[validate(
        required(message = "title is required"),
        length(min = 1, message = "title must not be empty")
    )]
    pub title: Option<String>,
    #[validate(
        required(message = "description is required"),
        length(min = 1, message = "description must not be empty")
    )]
    pub description: Option<String>,
    pub image: Option<String>,
    #[validate(
        required(message = "price is required"),
        range(min = 0.0, message = "price must be non-negative")
    )]
    pub price: Option<f64>,
    #[validate(
        required(message = "location is required"),
        length(min = 1, message = "location must not be empty")
    )]
    pub location: Option<String>,
    #[validate(
        required(message = "country is required"),
        length(min = 1, message = "country must not be empty")
    )]
    pub country: Option<String>,
}

impl ListingForm {
    /// Build the document to persist. Only meaningful after validation has
    /// passed; absent optional fields fall back to defaults.
    pub fn into_listing(self) -> Listing {
        let image = match self.image {
            Some(url) if !url.is_empty() => url,
            _ => DEFAULT_IMAGE.to_string(),
        };

        Listing {
            id: None,
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            image,
            price: self.price.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            country: self.country.unwrap_or_default(),
            reviews: Vec::new(),
        }
    }
}

/// Review creation payload.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReviewForm {
    #[validate(
        required(message = "comment is required"),
        length(min = 1, message = "comment must not be empty")
    )]
    pub comment: Option<String>,
    #[validate(
        required(message = "rating is required"),
        range(min = 1, max = 5, message = "rating must be between 1 and 5")
    )]
    pub rating: Option<i32>,
}

impl ReviewForm {
    /// Build the review document with a fresh id, so the parent's reference
    /// can be pushed without waiting for the insert to report one.
    pub fn into_review(self) -> Review {
        Review {
            id: Some(ObjectId::new()),
            comment: self.comment.unwrap_or_default(),
            rating: self.rating.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use staylist_http::error::AppError;
    use staylist_http::validate::validate;

    fn valid_form() -> ListingForm {
        ListingForm {
            title: Some("Seaside cabin".to_string()),
            description: Some("By the beach".to_string()),
            image: None,
            price: Some(1200.0),
            location: Some("Calangute, Goa".to_string()),
            country: Some("India".to_string()),
        }
    }

    #[test]
    fn valid_listing_form_passes() {
        assert!(validate(&valid_form()).is_ok());
    }

    #[test]
    fn missing_fields_and_negative_price_collect_into_one_message() {
        let form = ListingForm {
            title: None,
            price: Some(-10.0),
            ..valid_form()
        };

        match validate(&form).unwrap_err() {
            AppError::Validation { message } => {
                assert!(message.contains("title: title is required"));
                assert!(message.contains("price: price must be non-negative"));
            }
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn empty_title_is_rejected() {
        let form = ListingForm {
            title: Some(String::new()),
            ..valid_form()
        };
        assert!(validate(&form).is_err());
    }

    #[test]
    fn missing_image_falls_back_to_placeholder() {
        let listing = valid_form().into_listing();
        assert_eq!(listing.image, DEFAULT_IMAGE);
        assert!(listing.reviews.is_empty());

        let mut form = valid_form();
        form.image = Some("https://example.com/cabin.jpg".to_string());
        assert_eq!(form.into_listing().image, "https://example.com/cabin.jpg");
    }

    #[test]
    fn review_rating_is_bounded() {
        let form = ReviewForm {
            comment: Some("Lovely stay".to_string()),
            rating: Some(5),
        };
        assert!(validate(&form).is_ok());

        let form = ReviewForm {
            comment: Some("Lovely stay".to_string()),
            rating: Some(6),
        };
        assert!(validate(&form).is_err());

        let form = ReviewForm {
            comment: None,
            rating: Some(0),
        };
        match validate(&form).unwrap_err() {
            AppError::Validation { message } => {
                assert!(message.contains("comment: comment is required"));
                assert!(message.contains("rating: rating must be between 1 and 5"));
            }
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn review_form_assigns_fresh_id() {
        let review = ReviewForm {
            comment: Some("Great view".to_string()),
            rating: Some(4),
        }
        .into_review();

        assert!(review.id.is_some());
        assert_eq!(review.comment, "Great view");
        assert_eq!(review.rating, 4);
    }
}
