use crate::handler::AppModule;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use self::book::*;

mod book;

pub fn app<D: BookServices>(module: AppModule<D>) -> axum::Router {
    axum::Router::<AppModule<D>>::new()
        .route_book()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(module)
}
