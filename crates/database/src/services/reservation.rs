use crate::{entities::reservations, error::StoreError};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, EntityTrait, QueryOrder, Set,
    prelude::Date,
};

/// Caller-supplied fields of a new reservation
///
/// Every field is optional here: absent values are left out of the insert
/// and rejected by the table's NOT NULL constraints.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewReservation {
    pub salle: Option<String>,
    pub nom: Option<String>,
    pub date: Option<Date>,
    pub heure: Option<String>,
}

pub struct ReservationService;

impl ReservationService {
    /// All reservations, by date then by `heure` compared as text
    pub async fn list(db: &DatabaseConnection) -> Result<Vec<reservations::Model>, StoreError> {
        let rows = reservations::Entity::find()
            .order_by_asc(reservations::Column::Date)
            .order_by_asc(reservations::Column::Heure)
            .all(db)
            .await?;

        Ok(rows)
    }

    /// Inserts a reservation and returns the stored row
    pub async fn create(
        db: &DatabaseConnection,
        new: NewReservation,
    ) -> Result<reservations::Model, StoreError> {
        let reservation = reservations::ActiveModel {
            id: NotSet,
            salle: new.salle.map_or(NotSet, Set),
            nom: new.nom.map_or(NotSet, Set),
            date: new.date.map_or(NotSet, Set),
            heure: new.heure.map_or(NotSet, Set),
            created_at: NotSet,
        };

        Ok(reservation.insert(db).await?)
    }

    /// Deletes the reservation with the given id, returning the number of
    /// removed rows (0 when there was none)
    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<u64, StoreError> {
        let result = reservations::Entity::delete_by_id(id).exec(db).await?;
        Ok(result.rows_affected)
    }
}
