//! MongoDB persistence for listings and reviews.

use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database};

use super::models::{Listing, Review};

const LISTINGS: &str = "listings";
const REVIEWS: &str = "reviews";

/// Typed access to the two collections. Cloned into router state; the
/// underlying client is shared.
#[derive(Clone)]
pub struct ListingStore {
    listings: Collection<Listing>,
    reviews: Collection<Review>,
}

impl ListingStore {
    pub fn new(db: &Database) -> Self {
        Self {
            listings: db.collection(LISTINGS),
            reviews: db.collection(REVIEWS),
        }
    }

    pub async fn all(&self) -> mongodb::error::Result<Vec<Listing>> {
        self.listings.find(doc! {}).await?.try_collect().await
    }

    pub async fn find(&self, id: ObjectId) -> mongodb::error::Result<Option<Listing>> {
        self.listings.find_one(doc! { "_id": id }).await
    }

    pub async fn insert(&self, listing: &Listing) -> mongodb::error::Result<()> {
        self.listings.insert_one(listing).await?;
        Ok(())
    }

    /// Full-field overwrite of the identified listing. The review sequence
    /// is deliberately left untouched.
    pub async fn overwrite(&self, id: ObjectId, listing: &Listing) -> mongodb::error::Result<()> {
        self.listings
            .update_one(
                doc! { "_id": id },
                doc! { "$set": {
                    "title": listing.title.as_str(),
                    "description": listing.description.as_str(),
                    "image": listing.image.as_str(),
                    "price": listing.price,
                    "location": listing.location.as_str(),
                    "country": listing.country.as_str(),
                }},
            )
            .await?;
        Ok(())
    }

    /// Remove the listing only. Owned reviews are not cascade-deleted and
    /// may be orphaned.
    pub async fn delete(&self, id: ObjectId) -> mongodb::error::Result<()> {
        self.listings.delete_one(doc! { "_id": id }).await?;
        Ok(())
    }

    /// Persist a review and append its reference to the parent's ordered
    /// sequence. Two separate writes, not transactional: a crash in between
    /// leaves an orphaned review or an unsaved reference.
    pub async fn add_review(
        &self,
        listing_id: ObjectId,
        review: &Review,
    ) -> mongodb::error::Result<()> {
        self.reviews.insert_one(review).await?;
        self.listings
            .update_one(
                doc! { "_id": listing_id },
                doc! { "$push": { "reviews": review.id } },
            )
            .await?;
        Ok(())
    }

    /// Fetch a listing's reviews, ordered as the listing references them.
    pub async fn reviews_for(&self, listing: &Listing) -> mongodb::error::Result<Vec<Review>> {
        if listing.reviews.is_empty() {
            return Ok(Vec::new());
        }

        let reviews: Vec<Review> = self
            .reviews
            .find(doc! { "_id": { "$in": listing.reviews.clone() } })
            .await?
            .try_collect()
            .await?;

        Ok(order_reviews(&listing.reviews, reviews))
    }
}

/// `$in` does not preserve order; restore the listing's reference order.
/// Reviews whose id is absent from the sequence sort last.
fn order_reviews(sequence: &[ObjectId], mut reviews: Vec<Review>) -> Vec<Review> {
    reviews.sort_by_key(|review| {
        sequence
            .iter()
            .position(|id| review.id == Some(*id))
            .unwrap_or(usize::MAX)
    });
    reviews
}
