use serde::{Deserialize, Serialize};

use crate::models::user::Role;

/// Claims carried by a session token.
#[derive(Deserialize, Serialize, Debug)]
pub struct JWTClaims{
    pub sub: String,
    pub exp: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Envelope returned by the remote course API.
#[derive(Deserialize, Debug, Default)]
pub struct CoursesEnvelope{
    #[serde(default)]
    pub courses: Option<Vec<crate::models::course::Course>>,
}

#[derive(Deserialize, Debug, Default)]
pub struct NavbarQuery{
    #[serde(default)]
    pub menu_open: bool,
    #[serde(default)]
    pub profile_open: bool,
}
