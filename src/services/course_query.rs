use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use tracing::debug;

use crate::{errors::CourseQueryError, models::course::{Course, CourseRow}, schema::CoursesEnvelope};

/// Source of course records for listings.
#[async_trait]
pub trait CourseQuery: Send + Sync {
    async fn list_courses(&self, limit: usize) -> Result<Vec<Course>, CourseQueryError>;
}

pub struct PgCourseQuery{
    pool: Pool<Postgres>,
}

impl PgCourseQuery {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PgCourseQuery{ pool }
    }
}

#[async_trait]
impl CourseQuery for PgCourseQuery {
    async fn list_courses(&self, limit: usize) -> Result<Vec<Course>, CourseQueryError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        let rows = sqlx::query_as::<_, CourseRow>(
            r#"
                SELECT c.id::text AS id, c.title, c.subtitle,
                       c.price::float8 AS price, c.discount_price::float8 AS discount_price,
                       c.thumbnail, i.name AS instructor_name,
                       c.average_rating::float8 AS average_rating, c.total_ratings::int8 AS total_ratings,
                       c.enrollment_count::int8 AS enrollment_count, c.level,
                       c.total_duration::int8 AS total_duration
                FROM courses c
                LEFT JOIN instructors i ON i.id = c.instructor_id
                ORDER BY c.created_at DESC
                LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Course::from).collect())
    }
}

/// Reads courses from the storefront's remote REST API.
pub struct HttpCourseQuery{
    client: reqwest::Client,
    base_url: String,
}

impl HttpCourseQuery {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        HttpCourseQuery{ client, base_url: base_url.into() }
    }

    fn courses_url(&self) -> String {
        format!("{}/courses", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl CourseQuery for HttpCourseQuery {
    async fn list_courses(&self, limit: usize) -> Result<Vec<Course>, CourseQueryError> {
        let url = self.courses_url();
        debug!(%url, limit, "requesting courses");

        let envelope = self.client
            .get(&url)
            .query(&[("limit", limit)])
            .send()
            .await?
            .error_for_status()?
            .json::<CoursesEnvelope>()
            .await?;

        Ok(envelope.courses.unwrap_or_default())
    }
}

#[cfg(test)]
pub mod tests{
    use actix_web::{http::StatusCode, web, App, HttpResponse, HttpServer};

    use super::*;

    /// Serves a fixed list, honouring the limit.
    pub struct StaticCourseQuery(pub Vec<Course>);

    #[async_trait]
    impl CourseQuery for StaticCourseQuery {
        async fn list_courses(&self, limit: usize) -> Result<Vec<Course>, CourseQueryError> {
            Ok(self.0.iter().take(limit).cloned().collect())
        }
    }

    pub struct FailingCourseQuery;

    #[async_trait]
    impl CourseQuery for FailingCourseQuery {
        async fn list_courses(&self, _limit: usize) -> Result<Vec<Course>, CourseQueryError> {
            Err(CourseQueryError::Transport("connection refused".to_string()))
        }
    }

    #[test]
    fn courses_url_joins_without_double_slash(){
        let query = HttpCourseQuery::new(reqwest::Client::new(), "https://api.example.com/v1/");
        assert_eq!(query.courses_url(), "https://api.example.com/v1/courses");
    }

    #[test]
    fn envelope_without_courses_is_empty(){
        let envelope: CoursesEnvelope = serde_json::from_str(r#"{"courses": null}"#).unwrap();
        assert!(envelope.courses.unwrap_or_default().is_empty());

        let envelope: CoursesEnvelope = serde_json::from_str(r#"{}"#).unwrap();
        assert!(envelope.courses.is_none());
    }

    /// Serves `GET /courses` from a local actix server and returns its base URL.
    fn serve_courses(status: StatusCode, body: &'static str) -> String {
        let server = HttpServer::new(move || {
            App::new().route("/courses", web::get().to(move || async move {
                HttpResponse::build(status).content_type("application/json").body(body)
            }))
        })
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))
        .unwrap();

        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());
        format!("http://{addr}")
    }

    #[actix_web::test]
    async fn http_query_reads_courses_from_the_envelope(){
        let base = serve_courses(StatusCode::OK, r#"{"courses":[{"_id":"a","title":"A","averageRating":null,"totalDuration":5400}]}"#);
        let query = HttpCourseQuery::new(reqwest::Client::new(), base);

        let courses = query.list_courses(6).await.unwrap();

        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].total_duration, 5400);
        assert_eq!(courses[0].average_rating, 0.0);
    }

    #[actix_web::test]
    async fn http_query_treats_null_courses_as_empty(){
        let base = serve_courses(StatusCode::OK, r#"{"courses":null}"#);
        let query = HttpCourseQuery::new(reqwest::Client::new(), base);

        assert!(query.list_courses(6).await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn http_query_maps_error_status(){
        let base = serve_courses(StatusCode::SERVICE_UNAVAILABLE, r#"{"error":"down"}"#);
        let query = HttpCourseQuery::new(reqwest::Client::new(), base);

        let err = query.list_courses(6).await.unwrap_err();

        assert!(matches!(err, CourseQueryError::Status(503)));
    }

    #[actix_web::test]
    async fn http_query_reports_unreachable_service_as_transport(){
        let query = HttpCourseQuery::new(reqwest::Client::new(), "http://127.0.0.1:9");

        let err = query.list_courses(6).await.unwrap_err();

        assert!(matches!(err, CourseQueryError::Transport(_)));
    }

    #[actix_web::test]
    async fn static_query_respects_limit(){
        let courses = (0..10).map(|i| Course{ id: i.to_string(), title: format!("Course {i}"), ..Course::default() }).collect();
        let query = StaticCourseQuery(courses);

        assert_eq!(query.list_courses(6).await.unwrap().len(), 6);
    }
}
