use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use sqlx::postgres::PgPoolOptions;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use lms_storefront::{
    config::{Config, CourseSource},
    errors::AppError,
    format::PriceFormat,
    routes,
    services::{course_query::{CourseQuery, HttpCourseQuery, PgCourseQuery}, session::JwtSessionProvider},
    GlobalState,
};

async fn course_query(source: &CourseSource) -> Result<Arc<dyn CourseQuery>, AppError> {
    match source {
        CourseSource::Api(base_url) => {
            let client = reqwest::Client::builder()
                .build()
                .map_err(|_e| AppError::HttpClient)?;
            Ok(Arc::new(HttpCourseQuery::new(client, base_url.clone())))
        }
        CourseSource::Database(database_url) => {
            let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await
            .map_err(|_e| AppError::DbConnect)?;
            Ok(Arc::new(PgCourseQuery::new(pool)))
        }
    }
}

#[actix_web::main]
async fn main() -> Result<(), AppError> {

    dotenv().ok();

    // no subscriber is listening if this fails, so report it directly
    if let Err(e) = fmt().with_env_filter(EnvFilter::from_default_env()).try_init() {
        eprintln!("tracing init failed: {e}");
    }

    let config = Config::from_env()?;

    let global_state = GlobalState{
        courses: course_query(&config.course_source).await?,
        sessions: Arc::new(JwtSessionProvider::new(&config.jwt_secret)),
        prices: PriceFormat::new(config.currency_symbol.clone()),
        featured_limit: config.featured_limit,
    };

    let app_data = web::Data::new(global_state);

    info!(address = %config.bind_address, "storefront listening");

    HttpServer::new(
        move||{
            App::new()
            .app_data(app_data.clone())
            .configure(routes)
        }
    ).bind(config.bind_address.as_str())
    .map_err(|_e|AppError::SocketBind)?
    .run()
    .await
    .map_err(|_e|AppError::ServerStart)?;

    Ok(())

}
