pub mod config;
pub mod data_gen;
pub mod date;
pub mod error;
pub mod record;
pub mod reservation_index;
pub mod system;

pub use config::ReservationConfig;
pub use error::{ReservationError, Result};
pub use record::ReservationRecord;
pub use reservation_index::ReservationIndex;
pub use system::ReservationSystem;

pub type RoomNumber = u32;
