use std::fs;
use std::io::Read;

use anyhow::{Context, Result};

/// Parses the summary-length fraction. The control accepts exactly
/// 0.1 through 0.9 in steps of 0.1; anything else is rejected.
pub fn parse_percentage(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", raw))?;

    let tenths = (value * 10.0).round();
    if (1.0..=9.0).contains(&tenths) && (value * 10.0 - tenths).abs() < 1e-9 {
        Ok(tenths / 10.0)
    } else {
        Err(format!(
            "percentage must be between 0.1 and 0.9 in steps of 0.1, got '{}'",
            raw
        ))
    }
}

/// Rejects blank input before any request goes out.
pub fn validate_text(text: &str) -> Result<(), String> {
    if text.trim().is_empty() {
        Err("no input text to summarize".to_string())
    } else {
        Ok(())
    }
}

/// Reads the text to summarize from a file, or from stdin when no file
/// is given.
pub fn read_text(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path).with_context(|| format!("failed to read {path}")),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_percentage_accepts_each_step() {
        for tenths in 1..=9 {
            let raw = format!("0.{}", tenths);
            let value = parse_percentage(&raw).unwrap();
            assert!((value - tenths as f64 / 10.0).abs() < 1e-12, "step {raw}");
        }
    }

    #[test]
    fn test_parse_percentage_rejects_out_of_range() {
        assert!(parse_percentage("0.0").is_err());
        assert!(parse_percentage("1.0").is_err());
        assert!(parse_percentage("-0.3").is_err());
        assert!(parse_percentage("9").is_err());
    }

    #[test]
    fn test_parse_percentage_rejects_off_step_values() {
        assert!(parse_percentage("0.25").is_err());
        assert!(parse_percentage("0.15").is_err());
        assert!(parse_percentage("0.55").is_err());
    }

    #[test]
    fn test_parse_percentage_rejects_garbage() {
        assert!(parse_percentage("half").is_err());
        assert!(parse_percentage("").is_err());
        assert!(parse_percentage("0.4x").is_err());
    }

    #[test]
    fn test_parse_percentage_trims_whitespace() {
        assert_eq!(parse_percentage(" 0.4 ").unwrap(), 0.4);
    }

    #[test]
    fn test_validate_text_rejects_empty_input() {
        assert!(validate_text("").is_err());
    }

    #[test]
    fn test_validate_text_rejects_whitespace_only_input() {
        assert!(validate_text("   ").is_err());
        assert!(validate_text("\n\t \n").is_err());
    }

    #[test]
    fn test_validate_text_accepts_real_text() {
        assert!(validate_text("One sentence to summarize.").is_ok());
        assert!(validate_text("  padded but real  ").is_ok());
    }
}
