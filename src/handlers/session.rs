use actix_web::{post, web, HttpMessage, HttpRequest, Responder};
use tracing::info;

use crate::{models::user::Session, navigation::{navigate_to, Destination}, GlobalState};

#[post("/logout")]
pub async fn logout_handler(data:web::Data<GlobalState>, req:HttpRequest) -> impl Responder {
    let session = req.extensions().get::<Session>().cloned().unwrap_or_default();

    if session.authenticated {
        data.sessions.logout(&session);
        info!(user = session.user_name().unwrap_or("unknown"), "signed out");
    }

    navigate_to(&Destination::Home)
}
