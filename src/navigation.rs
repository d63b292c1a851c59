//! Named destinations and the rule deciding which navigation links a visitor sees.

use actix_web::{http::header::LOCATION, HttpResponse};
use serde::Serialize;

use crate::models::user::Role;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination{
    Home,
    Catalog,
    CourseDetail(String),
    Login,
    Register,
    Profile,
    LearnerDashboard,
    InstructorDashboard,
    AdminDashboard,
}

impl Destination {
    pub fn path(&self) -> String {
        match self {
            Destination::Home => "/".to_string(),
            Destination::Catalog => "/courses".to_string(),
            Destination::CourseDetail(id) => format!("/courses/{id}"),
            Destination::Login => "/login".to_string(),
            Destination::Register => "/register".to_string(),
            Destination::Profile => "/profile".to_string(),
            Destination::LearnerDashboard => "/dashboard".to_string(),
            Destination::InstructorDashboard => "/instructor/dashboard".to_string(),
            Destination::AdminDashboard => "/admin/dashboard".to_string(),
        }
    }
}

/// Sends the client on to `destination`.
pub fn navigate_to(destination: &Destination) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, destination.path()))
        .finish()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavLink{
    Courses,
    Login,
    Signup,
    Dashboard,
    Profile,
    Logout,
    Teach,
    Admin,
}

impl NavLink {
    pub fn label(self) -> &'static str {
        match self {
            NavLink::Courses => "Courses",
            NavLink::Login => "Log in",
            NavLink::Signup => "Sign up",
            NavLink::Dashboard => "Dashboard",
            NavLink::Profile => "Profile",
            NavLink::Logout => "Sign out",
            NavLink::Teach => "Teach",
            NavLink::Admin => "Admin",
        }
    }

    /// `None` for links that trigger an action rather than a page.
    pub fn destination(self) -> Option<Destination> {
        match self {
            NavLink::Courses => Some(Destination::Catalog),
            NavLink::Login => Some(Destination::Login),
            NavLink::Signup => Some(Destination::Register),
            NavLink::Dashboard => Some(Destination::LearnerDashboard),
            NavLink::Profile => Some(Destination::Profile),
            NavLink::Teach => Some(Destination::InstructorDashboard),
            NavLink::Admin => Some(Destination::AdminDashboard),
            NavLink::Logout => None,
        }
    }
}

/// Links visible for every combination of sign-in state and role.
pub fn visible_links(authenticated: bool, role: Option<Role>) -> Vec<NavLink> {
    if !authenticated {
        return vec![NavLink::Courses, NavLink::Login, NavLink::Signup];
    }

    let mut links = vec![NavLink::Courses];
    match role {
        Some(Role::Instructor) => links.push(NavLink::Teach),
        Some(Role::Admin) => links.push(NavLink::Admin),
        Some(Role::Learner) | None => {}
    }
    links.extend([NavLink::Dashboard, NavLink::Profile, NavLink::Logout]);
    links
}
