//! One-shot loading of the featured course listing.

use tracing::{error, info};

use crate::{models::course::Course, services::course_query::CourseQuery};

pub const FEATURED_COURSE_LIMIT: usize = 6;

#[derive(Debug, Clone, PartialEq)]
pub enum ListingState{
    Pending,
    Loaded(Vec<Course>),
    Failed,
}

impl ListingState {
    /// Courses to display; a failed fetch shows the same as an empty one.
    pub fn courses(&self) -> &[Course] {
        match self {
            ListingState::Loaded(courses) => courses,
            ListingState::Pending | ListingState::Failed => &[],
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ListingState::Pending)
    }
}

/// Featured courses for one page view. Fetched at most once.
#[derive(Debug)]
pub struct FeaturedCourses{
    limit: usize,
    state: ListingState,
}

impl FeaturedCourses {
    pub fn new(limit: usize) -> Self {
        FeaturedCourses{ limit, state: ListingState::Pending }
    }

    pub fn state(&self) -> &ListingState {
        &self.state
    }

    pub fn into_state(self) -> ListingState {
        self.state
    }

    /// Errors are logged and leave the listing in `Failed`; later calls do nothing.
    pub async fn load(&mut self, query: &dyn CourseQuery) {
        if !self.state.is_pending() {
            return;
        }

        self.state = match query.list_courses(self.limit).await {
            Ok(courses) => {
                info!(count = courses.len(), "loaded featured courses");
                ListingState::Loaded(courses)
            }
            Err(e) => {
                error!(error = %e, "failed to load courses");
                ListingState::Failed
            }
        };
    }
}
