//! Page handlers for the catalog site

pub mod book_instances;
pub mod genres;
pub mod health;

use axum::{response::Redirect, routing::get, Router};

use crate::AppState;

/// Build the application router with all catalog routes
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health::health_check))
        // Genres
        .route("/catalog/genres", get(genres::genre_list))
        .route(
            "/catalog/genre/create",
            get(genres::genre_create_get).post(genres::genre_create_post),
        )
        .route("/catalog/genre/:id", get(genres::genre_detail))
        .route(
            "/catalog/genre/:id/delete",
            get(genres::genre_delete_get).post(genres::genre_delete_post),
        )
        .route(
            "/catalog/genre/:id/update",
            get(genres::genre_update_get).post(genres::genre_update_post),
        )
        // Book copies
        .route(
            "/catalog/bookinstances",
            get(book_instances::bookinstance_list),
        )
        .route(
            "/catalog/bookinstance/create",
            get(book_instances::bookinstance_create_get)
                .post(book_instances::bookinstance_create_post),
        )
        .route(
            "/catalog/bookinstance/:id",
            get(book_instances::bookinstance_detail),
        )
        .route(
            "/catalog/bookinstance/:id/delete",
            get(book_instances::bookinstance_delete_get)
                .post(book_instances::bookinstance_delete_post),
        )
        .route(
            "/catalog/bookinstance/:id/update",
            get(book_instances::bookinstance_update_get)
                .post(book_instances::bookinstance_update_post),
        )
        .with_state(state)
}

async fn index() -> Redirect {
    Redirect::to("/catalog/genres")
}
