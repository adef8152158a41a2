pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::hardware::{get_local_serial_number, local_source, IoregSource};
pub use crate::core::app::OutputFormat;
pub use crate::core::decoder::{decode, SerialDateDecoder};
pub use crate::domain::model::{DecodedSerial, ManufactureDate, SerialNumber};
pub use crate::domain::ports::SerialSource;
pub use crate::utils::error::{Result, SerialDateError};
