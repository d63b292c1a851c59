use serde::Serialize;

use crate::{
    models::user::Session,
    navigation::{visible_links, Destination, NavLink},
};

pub const BRAND: &str = "LMS";
const PROFILE_FALLBACK_LABEL: &str = "Profile";
const MOBILE_DASHBOARD_LABEL: &str = "My Learning";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavEntry{
    pub link: NavLink,
    pub label: String,
    /// Absent for actions such as signing out.
    pub href: Option<String>,
}

impl NavEntry {
    fn new(link: NavLink) -> Self {
        NavEntry{
            link,
            label: link.label().to_string(),
            href: link.destination().map(|d| d.path()),
        }
    }

    fn labelled(link: NavLink, label: &str) -> Self {
        NavEntry{ label: label.to_string(), ..NavEntry::new(link) }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavbarView{
    pub brand: String,
    pub home_href: String,
    pub desktop: Vec<NavEntry>,
    /// Label of the profile button; `None` when nobody is signed in.
    pub profile_button: Option<String>,
    pub profile_open: bool,
    pub dropdown: Vec<NavEntry>,
    pub menu_open: bool,
    pub mobile: Vec<NavEntry>,
}

/// Navigation bar for one visitor, with its own menu and dropdown flags.
#[derive(Debug, Clone)]
pub struct Navbar{
    session: Session,
    menu_open: bool,
    profile_open: bool,
}

impl Navbar {
    pub fn new(session: Session) -> Self {
        Navbar{ session, menu_open: false, profile_open: false }
    }

    pub fn with_toggles(session: Session, menu_open: bool, profile_open: bool) -> Self {
        Navbar{ session, menu_open, profile_open }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn toggle_profile(&mut self) {
        self.profile_open = !self.profile_open;
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn profile_open(&self) -> bool {
        self.profile_open
    }

    pub fn links(&self) -> Vec<NavLink> {
        visible_links(self.session.authenticated, self.session.role())
    }

    pub fn render(&self) -> NavbarView {
        let links = self.links();
        let authenticated = self.session.authenticated;

        // account links live in the dropdown on desktop
        let desktop = links.iter()
            .copied()
            .filter(|link| !matches!(link, NavLink::Dashboard | NavLink::Profile | NavLink::Logout))
            .map(NavEntry::new)
            .collect();

        let dropdown = if authenticated && self.profile_open {
            [NavLink::Profile, NavLink::Dashboard, NavLink::Logout].into_iter().map(NavEntry::new).collect()
        } else {
            Vec::new()
        };

        let mobile = if self.menu_open {
            links.iter()
                .map(|&link| match link {
                    NavLink::Dashboard => NavEntry::labelled(link, MOBILE_DASHBOARD_LABEL),
                    _ => NavEntry::new(link),
                })
                .collect()
        } else {
            Vec::new()
        };

        NavbarView{
            brand: BRAND.to_string(),
            home_href: Destination::Home.path(),
            desktop,
            profile_button: authenticated.then(|| {
                self.session.user_name()
                    .filter(|name| !name.is_empty())
                    .unwrap_or(PROFILE_FALLBACK_LABEL)
                    .to_string()
            }),
            profile_open: self.profile_open,
            dropdown,
            menu_open: self.menu_open,
            mobile,
        }
    }
}
