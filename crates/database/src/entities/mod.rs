pub mod reservation;

pub use reservation as reservations;
