use crate::{
    AppState,
    dtos::reservation::{
        CreateReservationRequest, DELETED_MESSAGE, ErrorResponse, MessageResponse,
        ReservationResponse,
    },
    error::ApiError,
};
use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use database::services::reservation::ReservationService;

/// List every reservation, ordered by date then time
#[utoipa::path(
    get,
    path = "/api/reservations",
    responses(
        (status = 200, description = "All reservations", body = Vec<ReservationResponse>),
        (status = 500, description = "Database failure", body = ErrorResponse)
    ),
    tag = "Reservations"
)]
pub async fn list_reservations(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReservationResponse>>, ApiError> {
    let rows = ReservationService::list(&state.db).await?;

    Ok(Json(rows.into_iter().map(ReservationResponse::from).collect()))
}

/// Create a reservation
#[utoipa::path(
    post,
    path = "/api/reservations",
    request_body = CreateReservationRequest,
    responses(
        (status = 201, description = "Reservation created", body = ReservationResponse),
        (status = 500, description = "Missing field or database failure", body = ErrorResponse)
    ),
    tag = "Reservations"
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    payload: Result<Json<CreateReservationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ReservationResponse>), ApiError> {
    let Json(request) = payload?;
    let created = ReservationService::create(&state.db, request.into()).await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Delete a reservation by ID
///
/// Answers with the same confirmation whether or not the reservation existed.
#[utoipa::path(
    delete,
    path = "/api/reservations/{id}",
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Reservation deleted", body = MessageResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    ),
    tag = "Reservations"
)]
pub async fn delete_reservation(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = id?;
    ReservationService::delete(&state.db, id).await?;

    Ok(Json(MessageResponse {
        message: DELETED_MESSAGE.to_owned(),
    }))
}
