use crate::core::tables;
use crate::domain::model::{DecodedSerial, ManufactureDate, SerialNumber};
use crate::utils::error::{Result, SerialDateError};
use chrono::{Days, NaiveDate};

/// Turns a serial number into its approximate manufacture date.
///
/// Position 3 carries the year (and which half of it), position 4 the week
/// within that half. The date is January 1st of the year plus the total
/// number of weeks.
#[derive(Debug, Default, Clone, Copy)]
pub struct SerialDateDecoder;

impl SerialDateDecoder {
    pub fn new() -> Self {
        Self
    }

    pub fn decode(&self, serial: &SerialNumber) -> Result<ManufactureDate> {
        self.decode_detailed(serial)
            .map(|decoded| decoded.manufacture_date)
    }

    pub fn decode_detailed(&self, serial: &SerialNumber) -> Result<DecodedSerial> {
        let (year_char, week_char) =
            serial
                .code_chars()
                .ok_or_else(|| SerialDateError::InvalidSerial {
                    serial: serial.to_string(),
                    required: SerialNumber::MIN_LENGTH,
                    actual: serial.as_str().chars().count(),
                })?;

        let year_code =
            tables::year_code(year_char).ok_or_else(|| SerialDateError::UnknownYearCode {
                serial: serial.to_string(),
                code: year_char,
            })?;

        let base_week =
            tables::week_code(week_char).ok_or_else(|| SerialDateError::UnknownWeekCode {
                serial: serial.to_string(),
                code: week_char,
            })?;

        let total_weeks = base_week + year_code.half_year_offset_weeks;
        let date = add_weeks_to_new_year(year_code.year, total_weeks)?;

        tracing::debug!(
            "Decoded {}: year code '{}' -> {} (+{} weeks), week code '{}' -> {}",
            serial,
            year_char,
            year_code.year,
            year_code.half_year_offset_weeks,
            week_char,
            base_week
        );

        Ok(DecodedSerial {
            serial: serial.clone(),
            year_code: year_char,
            week_code: week_char,
            year: year_code.year,
            total_weeks,
            manufacture_date: ManufactureDate::new(date),
        })
    }
}

fn add_weeks_to_new_year(year: i32, weeks: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .and_then(|new_year| new_year.checked_add_days(Days::new(u64::from(weeks) * 7)))
        .ok_or(SerialDateError::InvalidDate { year, weeks })
}

/// 便利函式：以預設解碼器解碼字串
pub fn decode(serial: &str) -> Result<ManufactureDate> {
    SerialDateDecoder::new().decode(&SerialNumber::from(serial))
}
