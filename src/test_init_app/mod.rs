use std::sync::Arc;

use actix_web::{test::{self}, App, web, dev::ServiceResponse, Error};
use actix_service::Service;
use actix_http::Request;

use crate::{
    format::PriceFormat,
    listing::FEATURED_COURSE_LIMIT,
    routes,
    services::{course_query::CourseQuery, session::{tests::TEST_SECRET, JwtSessionProvider}},
    GlobalState,
};

/// App wired with an in-memory course source and the test token secret.
pub async fn init(courses: impl CourseQuery + 'static) -> impl Service<Request, Response = ServiceResponse, Error = Error> {

    let global_state = GlobalState{
        courses: Arc::new(courses),
        sessions: Arc::new(JwtSessionProvider::new(TEST_SECRET)),
        prices: PriceFormat::default(),
        featured_limit: FEATURED_COURSE_LIMIT,
    };

    let app_data = web::Data::new(global_state);

    test::init_service(
        App::new()
            .app_data(app_data.clone())
            .configure(routes)
    ).await
}
