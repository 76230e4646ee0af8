// Command-line address handlers
use clipboard::ClipboardChain;
use colored::Colorize;
use models::ValidationResult;
use serde::Serialize;
use std::io;
use std::path::Path;
use validators::{sample_addresses, validate_address, validate_batch};

/// One line of `--json` output
#[derive(Debug, Serialize)]
struct AddressReport<'a> {
    address: &'a str,
    #[serde(flatten)]
    result: &'a ValidationResult,
}

/// Read newline-separated candidates from a file, skipping blank lines
pub fn read_candidates(path: &Path) -> io::Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        io::Error::new(
            e.kind(),
            format!("Failed to read {}: {}", path.display(), e),
        )
    })?;

    Ok(content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.to_string())
        .collect())
}

/// Render one verdict the way the CLI prints it
pub fn format_report(address: &str, result: &ValidationResult) -> String {
    let mut out = String::new();
    let shown = if address.is_empty() { "(empty)" } else { address };

    if result.is_valid {
        out.push_str(&format!("{} {}", "✅ Valid:".green().bold(), shown));
        if !result.has_warnings() {
            return out;
        }
        for warning in &result.warnings {
            out.push_str(&format!("\n   {} {}", "⚠️".yellow(), warning));
        }
    } else {
        out.push_str(&format!("{} {}", "❌ Invalid:".red().bold(), shown));
        for (i, error) in result.errors.iter().enumerate() {
            out.push_str(&format!("\n   {}. {}", i + 1, error));
        }
    }

    out
}

/// Validate candidates and print a report.
///
/// Returns `Ok(true)` when every candidate is valid.
pub fn validate_addresses(candidates: &[String], json: bool, verbose: bool) -> io::Result<bool> {
    if candidates.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "No addresses given. Pass addresses as arguments or use --file",
        ));
    }

    logging::debug(&format!("Validating {} address(es)", candidates.len()));
    let results = validate_batch(candidates);
    let all_valid = results.iter().all(|(_, result)| result.is_valid);

    if json {
        let reports: Vec<AddressReport> = results
            .iter()
            .map(|(address, result)| AddressReport { address, result })
            .collect();
        let output = serde_json::to_string_pretty(&reports)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        println!("{}", output);
        return Ok(all_valid);
    }

    let mut valid_count = 0;
    let mut invalid_count = 0;

    for (address, result) in &results {
        println!("{}", format_report(address, result));
        if result.is_valid {
            valid_count += 1;
        } else {
            invalid_count += 1;
        }
    }

    if verbose || results.len() > 1 {
        println!(
            "\nSummary: {} valid, {} invalid",
            valid_count, invalid_count
        );
    }

    Ok(all_valid)
}

/// Print the built-in sample addresses with their verdicts
pub fn print_samples() {
    println!("Sample addresses:");
    for address in sample_addresses() {
        let result = validate_address(address);
        println!("{}", format_report(address, &result));
    }
}

/// Validate `address` and copy it to the clipboard when it is valid
pub async fn copy_address(address: &str) -> io::Result<()> {
    let address = address.trim();
    let result = validate_address(address);

    if !result.is_valid {
        println!("{}", format_report(address, &result));
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "Refusing to copy an invalid address",
        ));
    }

    let chain = ClipboardChain::detect();
    logging::debug(&format!(
        "Clipboard mechanisms: {:?}",
        chain.provider_names()
    ));

    match chain.copy(address).await {
        Ok(mechanism) => {
            println!("📋 Copied {} ({})", address, mechanism);
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", crate::models::COPY_FAILED_MESSAGE);
            Err(io::Error::new(io::ErrorKind::Other, e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const VALID: &str = "9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM";

    #[test]
    fn test_format_valid_report() {
        colored::control::set_override(false);
        let report = format_report(VALID, &validate_address(VALID));
        assert_eq!(report, format!("✅ Valid: {}", VALID));
    }

    #[test]
    fn test_format_report_lists_warnings() {
        colored::control::set_override(false);
        let mut result = ValidationResult::new();
        result.add_warning(models::AddressWarning::ConfusableCharacters(vec!['l']));

        let report = format_report(VALID, &result);
        assert_eq!(
            report,
            format!(
                "✅ Valid: {}\n   ⚠️ Address contains potentially confusing characters: l",
                VALID
            )
        );
    }

    #[test]
    fn test_format_invalid_report() {
        colored::control::set_override(false);
        let report = format_report("invalid-address", &validate_address("invalid-address"));
        assert_eq!(
            report,
            "❌ Invalid: invalid-address\n   1. Address contains invalid base58 characters"
        );

        let report = format_report("", &validate_address(""));
        assert!(report.starts_with("❌ Invalid: (empty)"));
    }

    #[test]
    fn test_validate_addresses_reports_overall_verdict() {
        let all_good = vec![VALID.to_string()];
        assert!(validate_addresses(&all_good, true, false).unwrap());

        let mixed = vec![VALID.to_string(), "invalid-address".to_string()];
        assert!(!validate_addresses(&mixed, false, false).unwrap());

        assert!(validate_addresses(&[], false, false).is_err());
    }

    #[test]
    fn test_json_report_shape() {
        let result = validate_address("11111111111111111111111111111112");
        let report = AddressReport {
            address: "11111111111111111111111111111112",
            result: &result,
        };
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["address"], "11111111111111111111111111111112");
        assert_eq!(json["isValid"], false);
        assert_eq!(
            json["errors"][0],
            "Address length is 32 characters, expected 44 characters"
        );
    }

    #[test]
    fn test_read_candidates_skips_blank_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{}", VALID).unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  invalid-address  ").unwrap();

        let candidates = read_candidates(file.path()).unwrap();
        assert_eq!(candidates, vec![VALID.to_string(), "  invalid-address  ".to_string()]);
    }

    #[test]
    fn test_read_candidates_missing_file() {
        let err = read_candidates(Path::new("/nonexistent/solcheck.txt")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_copy_rejects_invalid_address() {
        let err = copy_address("invalid-address").await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
