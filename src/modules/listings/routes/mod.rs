//! Route handlers for the listings module.
//!
//! Every handler returns `Result<_, AppError>`; failures are dispatched to
//! the centralized error page by the error type's `IntoResponse`.

use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::Form;
use maud::Markup;
use mongodb::bson::oid::ObjectId;

use staylist_http::error::AppError;
use staylist_http::validate::validate;

use super::models::{ListingForm, ReviewForm};
use super::store::ListingStore;
use super::views;

const NOT_FOUND_MESSAGE: &str = "Listing not found";

fn parse_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|_| AppError::not_found(NOT_FOUND_MESSAGE))
}

/// GET / — render all listings
pub async fn index(State(store): State<ListingStore>) -> Result<Markup, AppError> {
    let listings = store.all().await?;
    Ok(views::index(&listings))
}

/// GET /new — empty creation form, no persistence access
pub async fn new_form() -> Markup {
    views::new_form()
}

/// GET /{id} — render one listing with its reviews
pub async fn show(
    State(store): State<ListingStore>,
    Path(id): Path<String>,
) -> Result<Markup, AppError> {
    let id = parse_id(&id)?;
    let listing = store
        .find(id)
        .await?
        .ok_or_else(|| AppError::not_found(NOT_FOUND_MESSAGE))?;
    let reviews = store.reviews_for(&listing).await?;
    Ok(views::show(&listing, &reviews))
}

/// POST / — validate, persist, redirect to the collection view
pub async fn create(
    State(store): State<ListingStore>,
    Form(form): Form<ListingForm>,
) -> Result<Redirect, AppError> {
    validate(&form)?;
    let listing = form.into_listing();
    store.insert(&listing).await?;

    tracing::info!(title = %listing.title, "new listing saved");
    Ok(Redirect::to("/listings"))
}

/// GET /{id}/edit — prefilled edit form
pub async fn edit_form(
    State(store): State<ListingStore>,
    Path(id): Path<String>,
) -> Result<Markup, AppError> {
    let id = parse_id(&id)?;
    let listing = store
        .find(id)
        .await?
        .ok_or_else(|| AppError::not_found(NOT_FOUND_MESSAGE))?;
    Ok(views::edit_form(&listing))
}

/// PUT /{id} — validate, overwrite all provided fields, redirect to detail
pub async fn update(
    State(store): State<ListingStore>,
    Path(id): Path<String>,
    Form(form): Form<ListingForm>,
) -> Result<Redirect, AppError> {
    validate(&form)?;
    let id = parse_id(&id)?;
    store.overwrite(id, &form.into_listing()).await?;
    Ok(Redirect::to(&format!("/listings/{}", id.to_hex())))
}

/// DELETE /{id} — remove the listing, redirect to the collection view
pub async fn delete(
    State(store): State<ListingStore>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    let id = parse_id(&id)?;
    store.delete(id).await?;

    tracing::info!(listing_id = %id, "listing deleted");
    Ok(Redirect::to("/listings"))
}

/// POST /{id}/reviews — validate, persist the review, append its reference
/// to the parent, redirect to the parent's detail view
pub async fn create_review(
    State(store): State<ListingStore>,
    Path(id): Path<String>,
    Form(form): Form<ReviewForm>,
) -> Result<Redirect, AppError> {
    validate(&form)?;
    let id = parse_id(&id)?;

    // The parent must exist before its review sequence grows.
    store
        .find(id)
        .await?
        .ok_or_else(|| AppError::not_found(NOT_FOUND_MESSAGE))?;

    let review = form.into_review();
    store.add_review(id, &review).await?;

    tracing::info!(listing_id = %id, "new review saved");
    Ok(Redirect::to(&format!("/listings/{}", id.to_hex())))
}
