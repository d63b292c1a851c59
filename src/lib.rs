use std::sync::Arc;

use actix_web::{middleware::from_fn, web};

use crate::format::PriceFormat;
use crate::services::{course_query::CourseQuery, session::SessionProvider};

pub mod config;
pub mod errors;
pub mod format;
pub mod handlers;
pub mod listing;
pub mod middlewares;
pub mod models;
pub mod navigation;
pub mod schema;
pub mod services;
pub mod views;

#[cfg(test)]
mod test_init_app;

pub struct GlobalState{
    pub courses: Arc<dyn CourseQuery>,
    pub sessions: Arc<dyn SessionProvider>,
    pub prices: PriceFormat,
    pub featured_limit: usize,
}

/// Mounts every endpoint under `/api/v1`; expects `web::Data<GlobalState>` on the app.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
        .wrap(from_fn(middlewares::session::session_middleware))
        .service(
            web::scope("/storefront")
            .service(handlers::storefront::home_page_handler)
            .service(handlers::storefront::featured_courses_handler)
            .service(handlers::storefront::navbar_handler)
        )
        .service(
            web::scope("/session")
            .service(handlers::session::logout_handler)
        )
    );
}
