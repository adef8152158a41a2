use crate::domain::model::SerialNumber;
use crate::domain::ports::SerialSource;
use crate::utils::error::{Result, SerialDateError};
use regex::Regex;
use std::process::Command;
use std::sync::LazyLock;

const IOREG_PATH: &str = "/usr/sbin/ioreg";
const IOREG_ARGS: [&str; 4] = ["-c", "IOPlatformExpertDevice", "-d", "2"];

static SERIAL_PROPERTY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""IOPlatformSerialNumber"\s*=\s*"([^"]*)""#)
        .expect("IOPlatformSerialNumber pattern is valid")
});

/// Reads `IOPlatformSerialNumber` from the I/O Kit registry on macOS.
#[derive(Debug, Clone)]
pub struct IoregSource {
    program: String,
}

impl IoregSource {
    pub fn new() -> Self {
        Self {
            program: IOREG_PATH.to_string(),
        }
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for IoregSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SerialSource for IoregSource {
    fn name(&self) -> &'static str {
        "ioreg"
    }

    fn serial_number(&self) -> Result<SerialNumber> {
        tracing::debug!("Running {} {}", self.program, IOREG_ARGS.join(" "));
        let output = Command::new(&self.program)
            .args(IOREG_ARGS)
            .output()
            .map_err(|e| SerialDateError::hardware(format!("failed to run {}: {}", self.program, e)))?;

        if !output.status.success() {
            return Err(SerialDateError::hardware(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        parse_ioreg_output(&String::from_utf8_lossy(&output.stdout))
    }
}

/// 從 ioreg 輸出中取出第一個 IOPlatformSerialNumber
pub fn parse_ioreg_output(output: &str) -> Result<SerialNumber> {
    let captures = SERIAL_PROPERTY
        .captures(output)
        .ok_or_else(|| SerialDateError::hardware("IOPlatformSerialNumber not found in ioreg output"))?;

    let serial = captures[1].trim();
    if serial.is_empty() {
        return Err(SerialDateError::hardware("IOPlatformSerialNumber is empty"));
    }
    Ok(SerialNumber::from(serial))
}

/// Reads the product serial through sysinfo (SMBIOS/DMI).
#[cfg(feature = "cli")]
#[derive(Debug, Default, Clone, Copy)]
pub struct SysinfoSource;

#[cfg(feature = "cli")]
impl SerialSource for SysinfoSource {
    fn name(&self) -> &'static str {
        "sysinfo"
    }

    fn serial_number(&self) -> Result<SerialNumber> {
        match sysinfo::Product::serial_number() {
            Some(serial) if !serial.trim().is_empty() => Ok(SerialNumber::from(serial.trim())),
            Some(_) => Err(SerialDateError::hardware("product serial number is blank")),
            None => Err(SerialDateError::hardware(
                "product serial number is unavailable on this platform (try running as root)",
            )),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableSource;

impl SerialSource for UnavailableSource {
    fn name(&self) -> &'static str {
        "unavailable"
    }

    fn serial_number(&self) -> Result<SerialNumber> {
        Err(SerialDateError::hardware(
            "no hardware serial source is available in this build",
        ))
    }
}

/// Picks the hardware source for the current platform.
pub fn local_source() -> Box<dyn SerialSource> {
    if cfg!(target_os = "macos") {
        return Box::new(IoregSource::new());
    }

    #[cfg(feature = "cli")]
    {
        Box::new(SysinfoSource)
    }

    #[cfg(not(feature = "cli"))]
    {
        Box::new(UnavailableSource)
    }
}

pub fn get_local_serial_number() -> Result<SerialNumber> {
    local_source().serial_number()
}

#[cfg(test)]
mod tests {
    use super::*;

    const IOREG_SAMPLE: &str = r#"+-o Root  <class IORegistryEntry, id 0x100000100, retain 28>
  +-o MacBookPro16,1  <class IOPlatformExpertDevice, id 0x100000110, registered, matched, active, busy 0 (2 ms), retain 41>
      {
        "IOPlatformSystemSleepPolicy" = <534c505402000a00>
        "model" = <"MacBookPro16,1">
        "IOPlatformSerialNumber" = "C02DL0ABJGH5"
        "IOPlatformUUID" = "0A1B2C3D-0000-0000-0000-000000000000"
      }
"#;

    #[test]
    fn test_parse_ioreg_output() {
        let serial = parse_ioreg_output(IOREG_SAMPLE).unwrap();
        assert_eq!(serial.as_str(), "C02DL0ABJGH5");
    }

    #[test]
    fn test_parse_ioreg_output_missing_property() {
        let err = parse_ioreg_output("+-o Root  <class IORegistryEntry>\n").unwrap_err();
        assert!(matches!(err, SerialDateError::HardwareLookup { .. }));
    }

    #[test]
    fn test_parse_ioreg_output_empty_value() {
        let err = parse_ioreg_output(r#""IOPlatformSerialNumber" = """#).unwrap_err();
        assert!(matches!(err, SerialDateError::HardwareLookup { .. }));
    }

    #[test]
    fn test_missing_program_is_hardware_error() {
        let source = IoregSource::with_program("/nonexistent/ioreg-for-tests");
        let err = source.serial_number().unwrap_err();
        assert!(matches!(err, SerialDateError::HardwareLookup { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_unavailable_source_fails() {
        assert!(UnavailableSource.serial_number().is_err());
    }

    #[test]
    fn test_local_serial_number_is_serial_or_hardware_error() {
        match get_local_serial_number() {
            Ok(serial) => assert!(!serial.as_str().trim().is_empty()),
            Err(err) => assert!(matches!(err, SerialDateError::HardwareLookup { .. })),
        }
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn test_local_source_on_macos_is_ioreg() {
        assert_eq!(local_source().name(), "ioreg");
    }
}
