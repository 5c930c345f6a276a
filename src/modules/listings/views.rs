//! Server-side HTML views for the listings module.

use maud::{html, Markup, DOCTYPE};

use super::models::{Listing, Review};

/// Shared page layout; every listings view renders inside it.
fn layout(page_title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "staylist | " (page_title) }
            }
            body {
                nav {
                    a href="/listings" { "staylist" }
                    " "
                    a href="/listings/new" { "Add a listing" }
                }
                main { (content) }
            }
        }
    }
}

pub fn index(listings: &[Listing]) -> Markup {
    layout(
        "all listings",
        html! {
            h1 { "All listings" }
            ul class="listings" {
                @for listing in listings {
                    li {
                        a href=(format!("/listings/{}", listing.id_hex())) { (listing.title) }
                        " "
                        span class="price" { (listing.price) " / night" }
                    }
                }
            }
        },
    )
}

pub fn show(listing: &Listing, reviews: &[Review]) -> Markup {
    let id = listing.id_hex();
    layout(
        &listing.title,
        html! {
            h1 { (listing.title) }
            img src=(listing.image) alt=(listing.title);
            p { (listing.description) }
            ul class="details" {
                li { "Price: " (listing.price) }
                li { "Location: " (listing.location) }
                li { "Country: " (listing.country) }
            }
            div class="actions" {
                a href=(format!("/listings/{}/edit", id)) { "Edit" }
                form method="post" action=(format!("/listings/{}?_method=DELETE", id)) {
                    button type="submit" { "Delete" }
                }
            }
            section class="reviews" {
                h2 { "Reviews" }
                @if reviews.is_empty() {
                    p { "No reviews yet." }
                }
                ul {
                    @for review in reviews {
                        li {
                            strong { (review.rating) "/5" }
                            " "
                            (review.comment)
                        }
                    }
                }
                (review_form(&id))
            }
        },
    )
}

pub fn new_form() -> Markup {
    layout(
        "new listing",
        html! {
            h1 { "Create a new listing" }
            (listing_form(None, "/listings", "Create"))
        },
    )
}

pub fn edit_form(listing: &Listing) -> Markup {
    let action = format!("/listings/{}?_method=PUT", listing.id_hex());
    layout(
        "edit listing",
        html! {
            h1 { "Edit listing" }
            (listing_form(Some(listing), &action, "Update"))
        },
    )
}

fn listing_form(prefill: Option<&Listing>, action: &str, submit: &str) -> Markup {
    let title = prefill.map(|l| l.title.as_str()).unwrap_or_default();
    let description = prefill.map(|l| l.description.as_str()).unwrap_or_default();
    let image = prefill.map(|l| l.image.as_str()).unwrap_or_default();
    let price = prefill.map(|l| l.price.to_string()).unwrap_or_default();
    let location = prefill.map(|l| l.location.as_str()).unwrap_or_default();
    let country = prefill.map(|l| l.country.as_str()).unwrap_or_default();

    html! {
        form method="post" action=(action) {
            label { "Title"
                input type="text" name="title" value=(title);
            }
            label { "Description"
                textarea name="description" { (description) }
            }
            label { "Image URL"
                input type="text" name="image" value=(image);
            }
            label { "Price"
                input type="number" name="price" step="0.01" value=(price);
            }
            label { "Location"
                input type="text" name="location" value=(location);
            }
            label { "Country"
                input type="text" name="country" value=(country);
            }
            button type="submit" { (submit) }
        }
    }
}

fn review_form(listing_id: &str) -> Markup {
    html! {
        form method="post" action=(format!("/listings/{}/reviews", listing_id)) {
            label { "Rating"
                input type="number" name="rating" min="1" max="5" value="5";
            }
            label { "Comment"
                textarea name="comment" {}
            }
            button type="submit" { "Submit review" }
        }
    }
}
