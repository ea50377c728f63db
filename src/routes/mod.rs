pub mod create;
pub mod delete;
pub mod find;
pub mod health;
pub mod list;
pub mod update;
pub mod validation;

pub use create::create_user;
pub use delete::delete_user;
pub use find::find_user;
pub use health::health_check;
pub use list::list_users;
pub use update::update_user;

use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Build the application router with its middleware stack
///
/// Every request gets an `x-request-id`, trace logging, panic recovery, and
/// the configured request timeout.
pub fn router(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config.request_timeout_secs);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/users", post(create_user).get(list_users))
        .route(
            "/api/users/:id",
            get(find_user).put(update_user).delete(delete_user),
        )
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(CatchPanicLayer::new())
                .layer(TimeoutLayer::new(timeout)),
        )
        .with_state(state)
}
