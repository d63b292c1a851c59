use actix_web::{body::MessageBody, dev::{ServiceRequest, ServiceResponse}, http::header::AUTHORIZATION, middleware::Next, web, Error, HttpMessage};
use tracing::error;

use crate::{errors::CustomError, GlobalState};

/// Resolves the caller's session and stores it in the request extensions.
pub async fn session_middleware(
    req:ServiceRequest,
    next: Next<impl MessageBody>) -> Result<ServiceResponse<impl MessageBody>, Error>
{
    let Some(state) = req.app_data::<web::Data<GlobalState>>().cloned() else {
        error!("session middleware mounted without application state");
        return Err(Error::from(CustomError{error:"Internal Error".to_string()}));
    };

    let bearer = req.headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    let session = state.sessions.resolve(bearer.as_deref());

    req.extensions_mut().insert(session);
    next.call(req).await
}
