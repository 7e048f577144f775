//! Bookshelf server
//!
//! A small REST JSON API over an in-memory collection of books.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}

impl AppState {
    pub fn new(repository: repository::Repository) -> Self {
        Self {
            services: Arc::new(services::Services::new(repository)),
        }
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let books = Router::new()
        .route("/health", get(api::health::health_check))
        .route(
            "/books",
            get(api::books::list_books).post(api::books::create_book),
        )
        .route("/books/search", get(api::books::search_books))
        .route(
            "/books/:id",
            get(api::books::get_book)
                .put(api::books::update_book)
                .delete(api::books::delete_book),
        )
        .with_state(state);

    Router::new()
        .merge(books)
        .merge(api::openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
