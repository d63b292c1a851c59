pub mod course_query;
pub mod session;
