use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 硬體序號，原樣保留；只有第 3、4 個字元具有意義
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SerialNumber(String);

impl SerialNumber {
    pub const YEAR_POSITION: usize = 3;
    pub const WEEK_POSITION: usize = 4;
    pub const MIN_LENGTH: usize = Self::WEEK_POSITION + 1;

    pub fn new(serial: impl Into<String>) -> Self {
        Self(serial.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `(year_char, week_char)`, or `None` when the serial is too short.
    pub fn code_chars(&self) -> Option<(char, char)> {
        let mut chars = self.0.chars().skip(Self::YEAR_POSITION);
        let year = chars.next()?;
        let week = chars.next()?;
        Some((year, week))
    }
}

impl fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SerialNumber {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SerialNumber {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearCode {
    pub year: i32,
    pub half_year_offset_weeks: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ManufactureDate(NaiveDate);

impl ManufactureDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for ManufactureDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedSerial {
    pub serial: SerialNumber,
    pub year_code: char,
    pub week_code: char,
    pub year: i32,
    pub total_weeks: u32,
    pub manufacture_date: ManufactureDate,
}
