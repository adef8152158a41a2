use crate::core::decoder::SerialDateDecoder;
use crate::domain::model::{DecodedSerial, SerialNumber};
use crate::domain::ports::SerialSource;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Serial on the first line, date on the second
    #[default]
    Text,
    /// A single JSON object
    Json,
}

/// An explicit argument wins; otherwise ask the hardware source.
pub fn resolve_serial<S: SerialSource + ?Sized>(
    argument: Option<&str>,
    source: &S,
) -> Result<SerialNumber> {
    match argument {
        Some(serial) => {
            tracing::debug!("Using serial number from the command line");
            Ok(SerialNumber::from(serial))
        }
        None => {
            tracing::info!("No serial given, reading it from {}", source.name());
            let serial = source.serial_number()?;
            tracing::debug!("Hardware serial number: {}", serial);
            Ok(serial)
        }
    }
}

pub fn run<S: SerialSource + ?Sized>(argument: Option<&str>, source: &S) -> Result<DecodedSerial> {
    let serial = resolve_serial(argument, source)?;
    SerialDateDecoder::new().decode_detailed(&serial)
}

pub fn render(decoded: &DecodedSerial, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!(
            "{}\n{}",
            decoded.serial, decoded.manufacture_date
        )),
        OutputFormat::Json => Ok(serde_json::to_string(decoded)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::SerialDateError;
    use std::cell::Cell;

    struct CountingSource {
        serial: &'static str,
        calls: Cell<usize>,
    }

    impl SerialSource for CountingSource {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn serial_number(&self) -> Result<SerialNumber> {
            self.calls.set(self.calls.get() + 1);
            Ok(SerialNumber::from(self.serial))
        }
    }

    struct BrokenSource;

    impl SerialSource for BrokenSource {
        fn name(&self) -> &'static str {
            "broken"
        }

        fn serial_number(&self) -> Result<SerialNumber> {
            Err(SerialDateError::hardware("not a Mac"))
        }
    }

    #[test]
    fn test_argument_skips_hardware() {
        let source = CountingSource {
            serial: "XXXD9XXX",
            calls: Cell::new(0),
        };
        let serial = resolve_serial(Some("XXXC9XXX"), &source).unwrap();
        assert_eq!(serial.as_str(), "XXXC9XXX");
        assert_eq!(source.calls.get(), 0);
    }

    #[test]
    fn test_missing_argument_reads_hardware() {
        let source = CountingSource {
            serial: "XXXD9XXX",
            calls: Cell::new(0),
        };
        let decoded = run(None, &source).unwrap();
        assert_eq!(decoded.manufacture_date.to_string(), "2020-09-02");
        assert_eq!(source.calls.get(), 1);
    }

    #[test]
    fn test_hardware_failure_is_fatal() {
        let err = run(None, &BrokenSource).unwrap_err();
        assert!(matches!(err, SerialDateError::HardwareLookup { .. }));
    }

    #[test]
    fn test_render_text_is_two_lines() {
        let decoded = run(Some("XXXC9XXX"), &BrokenSource).unwrap();
        let output = render(&decoded, OutputFormat::Text).unwrap();
        assert_eq!(output, "XXXC9XXX\n2020-03-04");
    }

    #[test]
    fn test_render_json() {
        let decoded = run(Some("XXXC9XXX"), &BrokenSource).unwrap();
        let output = render(&decoded, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["serial"], "XXXC9XXX");
        assert_eq!(value["year_code"], "C");
        assert_eq!(value["week_code"], "9");
        assert_eq!(value["year"], 2020);
        assert_eq!(value["total_weeks"], 9);
        assert_eq!(value["manufacture_date"], "2020-03-04");
    }
}
