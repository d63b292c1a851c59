use serde::{Deserialize, Deserializer, Serialize};

/// `null` reads as `0.0`, like a missing key.
fn null_as_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts any JSON number; fractions are truncated and negatives or `null` read as 0.
fn whole_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let value = Option::<f64>::deserialize(deserializer)?.unwrap_or_default();
    if value.is_finite() && value > 0.0 {
        Ok(value.trunc() as u64)
    } else {
        Ok(0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Instructor{
    #[serde(default)]
    pub name: Option<String>,
}

/// One course as the course service returns it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course{
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub price: f64,
    #[serde(default)]
    pub discount_price: Option<f64>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub instructor: Option<Instructor>,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub average_rating: f64,
    #[serde(default, deserialize_with = "whole_number")]
    pub total_ratings: u64,
    #[serde(default, deserialize_with = "whole_number")]
    pub enrollment_count: u64,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default, deserialize_with = "whole_number")]
    pub total_duration: u64,
}

impl Course {
    pub fn instructor_name(&self) -> Option<&str> {
        self.instructor.as_ref().and_then(|instructor| instructor.name.as_deref())
    }
}

#[derive(Debug, sqlx::FromRow)]
pub struct CourseRow{
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub price: f64,
    pub discount_price: Option<f64>,
    pub thumbnail: Option<String>,
    pub instructor_name: Option<String>,
    pub average_rating: Option<f64>,
    pub total_ratings: Option<i64>,
    pub enrollment_count: Option<i64>,
    pub level: Option<String>,
    pub total_duration: Option<i64>,
}

fn non_negative(value: Option<i64>) -> u64 {
    value.and_then(|val| u64::try_from(val).ok()).unwrap_or(0)
}

impl From<CourseRow> for Course {
    fn from(row: CourseRow) -> Self {
        Course{
            id: row.id,
            title: row.title,
            subtitle: row.subtitle,
            price: row.price,
            discount_price: row.discount_price,
            thumbnail: row.thumbnail,
            instructor: row.instructor_name.map(|name| Instructor{ name: Some(name) }),
            average_rating: row.average_rating.unwrap_or(0.0),
            total_ratings: non_negative(row.total_ratings),
            enrollment_count: non_negative(row.enrollment_count),
            level: row.level,
            total_duration: non_negative(row.total_duration),
        }
    }
}
