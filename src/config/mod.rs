use crate::core::app::OutputFormat;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "mfgdate", version)]
#[command(about = "Decode a hardware serial number into an approximate manufacture date")]
pub struct CliConfig {
    /// Serial number to decode; read from this machine when omitted
    pub serial: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positional_serial() {
        let config = CliConfig::try_parse_from(["mfgdate", "XXXC9XXX"]).unwrap();
        assert_eq!(config.serial.as_deref(), Some("XXXC9XXX"));
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.verbose);
    }

    #[test]
    fn test_parse_without_serial() {
        let config = CliConfig::try_parse_from(["mfgdate", "--format", "json", "-v"]).unwrap();
        assert!(config.serial.is_none());
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.verbose);
    }

    #[test]
    fn test_rejects_extra_arguments() {
        assert!(CliConfig::try_parse_from(["mfgdate", "A", "B"]).is_err());
    }

    #[test]
    fn test_blank_serial_is_passed_through_verbatim() {
        let config = CliConfig::try_parse_from(["mfgdate", "  "]).unwrap();
        assert_eq!(config.serial.as_deref(), Some("  "));
    }
}
