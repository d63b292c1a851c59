use serde::Serialize;

use crate::{
    format::{self, PriceFormat, STAR_COUNT},
    models::course::Course,
    navigation::Destination,
};

pub const PLACEHOLDER_THUMBNAIL: &str = "https://via.placeholder.com/400x240?text=Course+Image";
pub const FALLBACK_INSTRUCTOR: &str = "Expert Instructor";
pub const FALLBACK_LEVEL: &str = "All Levels";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceView{
    /// Price the learner pays now.
    pub current: String,
    /// Struck-through list price, only while a discount is active.
    pub original: Option<String>,
    pub is_free: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingView{
    pub value: String,
    pub count: u64,
    /// Stars drawn next to the rating, all filled.
    pub stars: u8,
}

/// Summary card for one course.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseCardView{
    pub id: String,
    pub href: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub thumbnail: String,
    pub instructor: String,
    pub discount_badge: Option<String>,
    pub rating: RatingView,
    pub duration: String,
    pub level: String,
    pub enrollment_count: u64,
    pub price: PriceView,
}

fn price_view(course: &Course, prices: &PriceFormat) -> PriceView {
    match course.discount_price.filter(|_| format::discount_active(course.price, course.discount_price)) {
        Some(discounted) => PriceView{
            current: prices.format_price(discounted),
            original: Some(prices.format_price(course.price)),
            is_free: discounted == 0.0,
        },
        None => PriceView{
            current: prices.format_price(course.price),
            original: None,
            is_free: course.price == 0.0,
        },
    }
}

impl CourseCardView {
    pub fn render(course: &Course, prices: &PriceFormat) -> Self {
        CourseCardView{
            id: course.id.clone(),
            href: Destination::CourseDetail(course.id.clone()).path(),
            title: course.title.clone(),
            subtitle: course.subtitle.clone().filter(|s| !s.is_empty()),
            thumbnail: course.thumbnail.clone()
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| PLACEHOLDER_THUMBNAIL.to_string()),
            instructor: course.instructor_name()
                .filter(|n| !n.is_empty())
                .unwrap_or(FALLBACK_INSTRUCTOR)
                .to_string(),
            discount_badge: format::discount_badge(course.price, course.discount_price),
            rating: RatingView{
                value: format::format_rating(course.average_rating),
                count: format::ratings_count(course.total_ratings),
                stars: STAR_COUNT,
            },
            duration: format::format_duration(course.total_duration),
            level: course.level.clone()
                .filter(|l| !l.is_empty())
                .unwrap_or_else(|| FALLBACK_LEVEL.to_string()),
            enrollment_count: course.enrollment_count,
            price: price_view(course, prices),
        }
    }
}
