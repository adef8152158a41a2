use thiserror::Error;

#[derive(Error, Debug)]
pub enum SerialDateError {
    #[error("Invalid serial number '{serial}': need at least {required} characters, got {actual}")]
    InvalidSerial {
        serial: String,
        required: usize,
        actual: usize,
    },

    #[error("Unknown year code '{code}' in serial number '{serial}'")]
    UnknownYearCode { serial: String, code: char },

    #[error("Unknown week code '{code}' in serial number '{serial}'")]
    UnknownWeekCode { serial: String, code: char },

    #[error("Hardware lookup failed: {message}")]
    HardwareLookup { message: String },

    #[error("Date out of range: {year} + {weeks} weeks")]
    InvalidDate { year: i32, weeks: u32 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SerialDateError {
    pub fn hardware(message: impl Into<String>) -> Self {
        Self::HardwareLookup {
            message: message.into(),
        }
    }

    /// 輸入錯誤回傳 1，環境錯誤回傳 2
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidSerial { .. }
            | Self::UnknownYearCode { .. }
            | Self::UnknownWeekCode { .. }
            | Self::InvalidDate { .. } => 1,
            Self::HardwareLookup { .. } | Self::Serialization(_) => 2,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidSerial { serial, .. } => {
                format!("'{}' is too short to be a serial number", serial)
            }
            Self::UnknownYearCode { code, .. } => {
                format!("The year code '{}' is not recognised", code)
            }
            Self::UnknownWeekCode { code, .. } => {
                format!("The week code '{}' is not recognised", code)
            }
            Self::HardwareLookup { .. } => {
                "Could not read this machine's serial number".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidSerial { .. } => "Pass the full serial number as printed on the device",
            Self::UnknownYearCode { .. } | Self::UnknownWeekCode { .. } => {
                "Check the serial for typos; letters must be upper case"
            }
            Self::HardwareLookup { .. } => "Pass the serial number explicitly as an argument",
            Self::InvalidDate { .. } => "Check the serial number for typos",
            Self::Serialization(_) => "Retry with --format text",
        }
    }
}

pub type Result<T> = std::result::Result<T, SerialDateError>;
