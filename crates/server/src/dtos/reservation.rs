use chrono::{NaiveDate, NaiveDateTime};
use database::{entities::reservations, services::reservation::NewReservation};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Confirmation returned by a delete, whether or not a row matched
pub const DELETED_MESSAGE: &str = "Réservation supprimée";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReservationResponse {
    pub id: i32,
    #[schema(example = "Salle Test")]
    pub salle: String,
    #[schema(example = "Alice")]
    pub nom: String,
    #[schema(value_type = String, format = Date, example = "2025-10-25")]
    pub date: NaiveDate,
    #[schema(example = "10:00")]
    pub heure: String,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: NaiveDateTime,
}

impl From<reservations::Model> for ReservationResponse {
    fn from(model: reservations::Model) -> Self {
        Self {
            id: model.id,
            salle: model.salle,
            nom: model.nom,
            date: model.date,
            heure: model.heure,
            created_at: model.created_at,
        }
    }
}

/// Body of a create request
///
/// Fields are not checked here; missing ones are rejected by the database.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateReservationRequest {
    #[schema(example = "Salle Test")]
    pub salle: Option<String>,
    #[schema(example = "Alice")]
    pub nom: Option<String>,
    #[schema(value_type = Option<String>, format = Date, example = "2025-10-25")]
    pub date: Option<NaiveDate>,
    #[schema(example = "10:00")]
    pub heure: Option<String>,
}

impl From<CreateReservationRequest> for NewReservation {
    fn from(request: CreateReservationRequest) -> Self {
        Self {
            salle: request.salle,
            nom: request.nom,
            date: request.date,
            heure: request.heure,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Réservation supprimée")]
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
