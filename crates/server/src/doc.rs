use utoipa::OpenApi;

/// API Documentation
///
/// Paths are registered by the router in [`crate::app`].
#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "Reservations", description = "Room reservation endpoints"),
        (name = "Health", description = "Service health"),
    ),
    info(
        title = "Booking API",
        version = "1.0.0",
        description = "Room reservation registry",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
