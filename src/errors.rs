use actix_web::{http::StatusCode, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use derive_more::derive::{Display, Error as DeriveMoreError};

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum AppError{
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Cant bind to the Socket")]
    SocketBind,
    #[error("Cant connect to the DB")]
    DbConnect,
    #[error("Cant build the course API client")]
    HttpClient,
    #[error("Cant start the server")]
    ServerStart,
}

/// Failures reported by a course query collaborator.
#[derive(Debug, Error)]
pub enum CourseQueryError{
    #[error("course service unreachable: {0}")]
    Transport(String),
    #[error("course service answered with status {0}")]
    Status(u16),
    #[error("course lookup failed in the database: {0}")]
    Database(String),
}

impl From<reqwest::Error> for CourseQueryError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => CourseQueryError::Status(status.as_u16()),
            None => CourseQueryError::Transport(err.to_string()),
        }
    }
}

impl From<sqlx::Error> for CourseQueryError {
    fn from(err: sqlx::Error) -> Self {
        CourseQueryError::Database(err.to_string())
    }
}

#[derive(Debug, Display, DeriveMoreError, Serialize, Deserialize)]
#[display("error :{}", error)]
pub struct CustomError{
    pub error:String
}

impl ResponseError for CustomError{}

impl ResponseError for AppError {
    fn error_response(&self) -> actix_web::HttpResponse<actix_web::body::BoxBody> {
        actix_web::HttpResponse::build(self.status_code()).json(CustomError{error:self.to_string()})
    }

    fn status_code(&self) -> actix_web::http::StatusCode {
        match *self {
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::DbConnect => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::HttpClient => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ServerStart => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::SocketBind => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
