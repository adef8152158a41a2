pub mod app;
pub mod decoder;
pub mod tables;

pub use crate::domain::model::{DecodedSerial, ManufactureDate, SerialNumber, YearCode};
pub use crate::domain::ports::SerialSource;
pub use crate::utils::error::Result;
