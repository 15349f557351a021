//! Route definitions for the drink catalog.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::drinks;
use crate::state::AppState;

/// Drink routes, mounted at the root.
///
/// ```text
/// GET    /drinks           -> list_drinks (public)
/// GET    /drinks-detail    -> list_drinks_detail (read-detail)
/// POST   /drinks           -> create_drink (create)
/// PATCH  /drinks/{id}      -> update_drink (update)
/// DELETE /drinks/{id}      -> delete_drink (delete)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/drinks", get(drinks::list_drinks).post(drinks::create_drink))
        .route("/drinks-detail", get(drinks::list_drinks_detail))
        .route(
            "/drinks/{id}",
            patch(drinks::update_drink).delete(drinks::delete_drink),
        )
}
