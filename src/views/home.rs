use serde::Serialize;

use crate::{format::PriceFormat, listing::ListingState, navigation::Destination};

use super::card::CourseCardView;

pub const EMPTY_LISTING_MESSAGE: &str = "No courses available yet. Check back soon!";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stat{
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTile{
    pub name: &'static str,
    pub icon: &'static str,
    pub count: &'static str,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feature{
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FeaturedSection{
    Loading,
    Courses{ cards: Vec<CourseCardView> },
    Empty{ message: &'static str },
}

impl FeaturedSection {
    pub fn from_listing(listing: &ListingState, prices: &PriceFormat) -> Self {
        if listing.is_pending() {
            return FeaturedSection::Loading;
        }
        match listing.courses() {
            [] => FeaturedSection::Empty{ message: EMPTY_LISTING_MESSAGE },
            courses => FeaturedSection::Courses{
                cards: courses.iter().map(|course| CourseCardView::render(course, prices)).collect(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomePageView{
    pub stats: Vec<Stat>,
    pub categories: Vec<CategoryTile>,
    pub featured: FeaturedSection,
    pub features: Vec<Feature>,
    pub explore_href: String,
    pub signup_href: String,
}

const STATS: [Stat; 4] = [
    Stat{ label: "Active Students", value: "15M+" },
    Stat{ label: "Total Courses", value: "1.2K+" },
    Stat{ label: "Success Rate", value: "94%" },
    Stat{ label: "Expert Instructors", value: "200+" },
];

const CATEGORIES: [(&str, &str, &str); 4] = [
    ("Development", "💻", "450+"),
    ("Business", "📊", "380+"),
    ("Design", "🎨", "290+"),
    ("Marketing", "📱", "320+"),
];

const FEATURES: [Feature; 4] = [
    Feature{ title: "Expert Instructors", description: "Learn from industry professionals with years of experience.", icon: "👨‍🏫" },
    Feature{ title: "Flexible Learning", description: "Study at your own pace, anywhere and anytime.", icon: "⏰" },
    Feature{ title: "Interactive Content", description: "Engage with hands-on projects and real-world applications.", icon: "💡" },
    Feature{ title: "Career Support", description: "Get guidance and support to achieve your career goals.", icon: "🎯" },
];

impl HomePageView {
    pub fn render(listing: &ListingState, prices: &PriceFormat) -> Self {
        let catalog = Destination::Catalog.path();

        HomePageView{
            stats: STATS.to_vec(),
            categories: CATEGORIES.iter()
                .map(|&(name, icon, count)| CategoryTile{ name, icon, count, href: catalog.clone() })
                .collect(),
            featured: FeaturedSection::from_listing(listing, prices),
            features: FEATURES.to_vec(),
            explore_href: catalog,
            signup_href: Destination::Register.path(),
        }
    }
}
