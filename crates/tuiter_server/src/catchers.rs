use rocket::request::Request;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use tuiter_common::errors::TuiterServerError;
use tuiter_common::http::responses::ErrorBody;

/// JSON error body `{"error": ...}`
#[derive(Debug)]
pub struct ErrorMessage(pub String);

impl<'r> Responder<'r, 'static> for ErrorMessage {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        Json(ErrorBody { error: self.0 }).respond_to(req)
    }
}

#[derive(Debug, Responder)]
pub enum TuiterResponse {
    #[response(status = 400)]
    BadRequest(ErrorMessage),
    #[response(status = 404)]
    NotFound(ErrorMessage),
    #[response(status = 422)]
    Unprocessable(ErrorMessage),
    #[response(status = 500)]
    InternalError(ErrorMessage),
}

impl From<TuiterServerError> for TuiterResponse {
    fn from(e: TuiterServerError) -> Self {
        match e {
            TuiterServerError::InvalidObjectId(_) | TuiterServerError::InvalidDate(_, _) => {
                TuiterResponse::BadRequest(ErrorMessage(e.to_string()))
            }
            _ => {
                tracing::error!("{}", e);
                TuiterResponse::InternalError(ErrorMessage(e.to_string()))
            }
        }
    }
}

#[catch(400)]
pub fn bad_request(_req: &Request) -> TuiterResponse {
    TuiterResponse::BadRequest(ErrorMessage(String::from("Malformed request")))
}

#[catch(404)]
pub fn not_found(req: &Request) -> TuiterResponse {
    TuiterResponse::NotFound(ErrorMessage(format!(
        "No route for {} {}",
        req.method(),
        req.uri()
    )))
}

#[catch(422)]
pub fn unprocessable_entity(_req: &Request) -> TuiterResponse {
    TuiterResponse::Unprocessable(ErrorMessage(String::from(
        "Request body is missing fields or has fields of the wrong type",
    )))
}

#[catch(500)]
pub fn internal_error(_req: &Request) -> TuiterResponse {
    TuiterResponse::InternalError(ErrorMessage(
        TuiterServerError::InternalError.to_string(),
    ))
}
