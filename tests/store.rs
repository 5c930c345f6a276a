//! Persistence tests against a local MongoDB.
//!
//! Each test runs in its own throwaway database and drops it afterwards.
//! When no server is reachable at the default endpoint the tests skip
//! themselves, so the rest of the suite stays runnable anywhere.

use std::time::Duration;

use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::ClientOptions;
use mongodb::Client;

use staylist_app::modules::listings::models::{Listing, ReviewForm};
use staylist_app::modules::listings::store::ListingStore;

async fn test_db() -> Option<mongodb::Database> {
    let mut options = ClientOptions::parse("mongodb://127.0.0.1:27017").await.ok()?;
    options.server_selection_timeout = Some(Duration::from_millis(500));

    let client = Client::with_options(options).ok()?;
    let db = client.database(&format!("staylist_test_{}", ObjectId::new().to_hex()));

    if db.run_command(doc! { "ping": 1 }).await.is_err() {
        eprintln!("skipping: no MongoDB reachable at 127.0.0.1:27017");
        return None;
    }

    Some(db)
}

fn sample_listing(title: &str) -> Listing {
    Listing {
        id: None,
        title: title.to_string(),
        description: "By the beach".to_string(),
        image: "https://example.com/cabin.jpg".to_string(),
        price: 1200.0,
        location: "Calangute, Goa".to_string(),
        country: "India".to_string(),
        reviews: Vec::new(),
    }
}

async fn insert_and_fetch(store: &ListingStore, title: &str) -> Listing {
    store.insert(&sample_listing(title)).await.unwrap();
    store
        .all()
        .await
        .unwrap()
        .into_iter()
        .find(|l| l.title == title)
        .unwrap()
}

#[tokio::test]
async fn created_listing_is_retrievable_with_identical_fields() {
    let Some(db) = test_db().await else { return };
    let store = ListingStore::new(&db);

    let persisted = insert_and_fetch(&store, "Seaside cabin").await;
    let fetched = store.find(persisted.id.unwrap()).await.unwrap().unwrap();

    assert_eq!(fetched.title, "Seaside cabin");
    assert_eq!(fetched.description, "By the beach");
    assert_eq!(fetched.image, "https://example.com/cabin.jpg");
    assert_eq!(fetched.price, 1200.0);
    assert_eq!(fetched.location, "Calangute, Goa");
    assert_eq!(fetched.country, "India");
    assert!(fetched.reviews.is_empty());

    db.drop().await.unwrap();
}

#[tokio::test]
async fn deleted_listing_is_gone_on_reread() {
    let Some(db) = test_db().await else { return };
    let store = ListingStore::new(&db);

    let persisted = insert_and_fetch(&store, "Doomed cabin").await;
    let id = persisted.id.unwrap();

    store.delete(id).await.unwrap();
    assert!(store.find(id).await.unwrap().is_none());

    db.drop().await.unwrap();
}

#[tokio::test]
async fn review_is_appended_to_parent_and_exists_independently() {
    let Some(db) = test_db().await else { return };
    let store = ListingStore::new(&db);

    let persisted = insert_and_fetch(&store, "Reviewed cabin").await;
    let id = persisted.id.unwrap();

    let review = ReviewForm {
        comment: Some("Lovely stay".to_string()),
        rating: Some(5),
    }
    .into_review();
    store.add_review(id, &review).await.unwrap();

    // Exactly one reference lands in the parent's sequence.
    let parent = store.find(id).await.unwrap().unwrap();
    assert_eq!(parent.reviews, vec![review.id.unwrap()]);

    // The review document stands on its own with the submitted fields.
    let reviews = store.reviews_for(&parent).await.unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].id, review.id);
    assert_eq!(reviews[0].comment, "Lovely stay");
    assert_eq!(reviews[0].rating, 5);

    db.drop().await.unwrap();
}

#[tokio::test]
async fn overwrite_replaces_all_fields_but_keeps_reviews() {
    let Some(db) = test_db().await else { return };
    let store = ListingStore::new(&db);

    let persisted = insert_and_fetch(&store, "Old cabin").await;
    let id = persisted.id.unwrap();

    let review = ReviewForm {
        comment: Some("Before the rewrite".to_string()),
        rating: Some(3),
    }
    .into_review();
    store.add_review(id, &review).await.unwrap();

    let mut replacement = sample_listing("New chalet");
    replacement.description = "In the mountains".to_string();
    replacement.image = "https://example.com/chalet.jpg".to_string();
    replacement.price = 80.5;
    replacement.location = "Zermatt".to_string();
    replacement.country = "Switzerland".to_string();
    store.overwrite(id, &replacement).await.unwrap();

    let updated = store.find(id).await.unwrap().unwrap();
    assert_eq!(updated.title, "New chalet");
    assert_eq!(updated.description, "In the mountains");
    assert_eq!(updated.image, "https://example.com/chalet.jpg");
    assert_eq!(updated.price, 80.5);
    assert_eq!(updated.location, "Zermatt");
    assert_eq!(updated.country, "Switzerland");
    // The review sequence survives the overwrite untouched.
    assert_eq!(updated.reviews, vec![review.id.unwrap()]);

    db.drop().await.unwrap();
}
