//! End-to-end integration tests
//!
//! These tests validate the complete conversion pipeline using predefined CSV
//! fixtures. Each test:
//! 1. Points the converter at input.csv from a fixture directory
//! 2. Writes the generated file into a temporary directory
//! 3. Compares the written file with expected.csv
//!
//! Test fixtures are located in tests/fixtures/ and cover:
//! - Plain Nordea exports with a combined amount column
//! - Payee inference, cutoff dates and output date formats
//! - Alternative delimiters, CRLF line endings and byte order marks
//! - Feeding generated output back through the `ynab` source
//! - Error conditions (empty files, header-only files, wrong headers)

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;
    use ynab_csv::{convert, ConvertError, ConvertOptions, ConvertOutput};

    fn fixture_path(fixture_name: &str, file: &str) -> String {
        format!("tests/fixtures/{}/{}", fixture_name, file)
    }

    /// Run a fixture by converting input.csv and comparing with expected.csv
    ///
    /// The output option is pointed at a fresh temporary directory, so the
    /// converter writes `<tmp>/ynab.csv`.
    async fn run_test_fixture(fixture_name: &str, options: ConvertOptions) {
        let input_path = fixture_path(fixture_name, "input.csv");
        let expected_path = fixture_path(fixture_name, "expected.csv");

        assert!(
            Path::new(&input_path).exists(),
            "Input file not found: {}",
            input_path
        );

        let out_dir = tempdir().expect("Failed to create temp dir");
        let out_dir_str = out_dir.path().to_str().expect("Temp dir is not UTF-8");

        let output = convert(&input_path, options.output(out_dir_str))
            .await
            .unwrap_or_else(|e| panic!("Failed to convert {}: {}", fixture_name, e));

        let written = out_dir.path().join("ynab.csv");
        assert_eq!(output, ConvertOutput::Written { path: written.clone() });

        let actual_output = fs::read_to_string(&written)
            .unwrap_or_else(|e| panic!("Failed to read generated file: {}", e));
        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {}\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, actual_output, expected_output
        );
    }

    #[rstest]
    #[case::basic("nordea_basic", ConvertOptions::new())]
    #[case::payees("nordea_payees", ConvertOptions::new().payees(["Drive now", "Spotify", "CrazyPayee"]))]
    #[case::last_date("nordea_lastdate", ConvertOptions::new().last_date("11/10/2016"))]
    #[case::date_format("nordea_dateformat", ConvertOptions::new().date_format("YYYY-MM-DD"))]
    #[case::pipe_delimiter("nordea_pipe_delimiter", ConvertOptions::new().delimiter("|"))]
    #[case::crlf_bom("nordea_crlf_bom", ConvertOptions::new().source("nordea"))]
    #[case::ynab_roundtrip("ynab_roundtrip", ConvertOptions::new().source("ynab"))]
    #[tokio::test]
    async fn test_fixtures(#[case] fixture: &str, #[case] options: ConvertOptions) {
        run_test_fixture(fixture, options).await;
    }

    #[rstest]
    #[case::empty("empty", ConvertError::EmptyInput)]
    #[case::header_only("header_only", ConvertError::NoDataRows)]
    #[case::wrong_headers(
        "wrong_headers",
        ConvertError::HeaderMismatch { expected: "Bogført;Tekst;Rentedato;Beløb;Saldo".to_string() }
    )]
    #[tokio::test]
    async fn test_error_fixtures(#[case] fixture: &str, #[case] expected: ConvertError) {
        let out_dir = tempdir().expect("Failed to create temp dir");
        let options = ConvertOptions::new().output(out_dir.path().to_str().unwrap());

        let err = convert(&fixture_path(fixture, "input.csv"), options)
            .await
            .unwrap_err();

        assert_eq!(err, expected);
        assert!(!out_dir.path().join("ynab.csv").exists());
    }

    #[tokio::test]
    async fn test_named_output_file() {
        let out_dir = tempdir().expect("Failed to create temp dir");
        let target = out_dir.path().join("test.v1");

        let output = convert(
            &fixture_path("nordea_basic", "input.csv"),
            ConvertOptions::new().output(target.to_str().unwrap()),
        )
        .await
        .unwrap();

        let written = out_dir.path().join("test.v1.csv");
        assert_eq!(
            output.to_string(),
            format!("File {} written successfully!", written.display())
        );
        assert!(written.exists());
    }

    #[tokio::test]
    async fn test_csv_extension_stripped_from_output() {
        let out_dir = tempdir().expect("Failed to create temp dir");
        let target = out_dir.path().join("budget.CSV");

        convert(
            &fixture_path("nordea_basic", "input.csv"),
            ConvertOptions::new().output(target.to_str().unwrap()),
        )
        .await
        .unwrap();

        assert!(out_dir.path().join("budget.csv").exists());
    }

    #[tokio::test]
    async fn test_no_write_returns_text() {
        let out_dir = tempdir().expect("Failed to create temp dir");
        let options = ConvertOptions::new()
            .output(out_dir.path().to_str().unwrap())
            .write(false);

        let output = convert(&fixture_path("nordea_basic", "input.csv"), options)
            .await
            .unwrap();

        let expected = fs::read_to_string(fixture_path("nordea_basic", "expected.csv")).unwrap();
        assert_eq!(output, ConvertOutput::Generated(expected));
        assert!(!out_dir.path().join("ynab.csv").exists());
    }

    #[tokio::test]
    async fn test_csv_string_input() {
        let content = fs::read_to_string(fixture_path("nordea_basic", "input.csv")).unwrap();
        let output = convert(
            content.trim(),
            ConvertOptions::new().csv_string(true).write(false),
        )
        .await
        .unwrap();

        let expected = fs::read_to_string(fixture_path("nordea_basic", "expected.csv")).unwrap();
        assert_eq!(output.to_string(), expected);
    }

    #[rstest]
    #[case::no_file("", ConvertError::missing_input())]
    #[case::wrong_extension("file.xls", ConvertError::invalid_extension("file.xls"))]
    #[tokio::test]
    async fn test_input_errors(#[case] input: &str, #[case] expected: ConvertError) {
        let err = convert(input, ConvertOptions::new().write(false))
            .await
            .unwrap_err();
        assert_eq!(err, expected);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let err = convert("tests/fixtures/does_not_exist.csv", ConvertOptions::new().write(false))
            .await
            .unwrap_err();
        assert!(matches!(err, ConvertError::IoError { .. }));
    }

    #[tokio::test]
    async fn test_invalid_dates_become_today() {
        let content = "Bogført;Tekst;Rentedato;Beløb;Saldo\nnot a date;Netto;;-10,00;90";
        let before = chrono::Local::now().date_naive();

        let output = convert(content, ConvertOptions::new().csv_string(true).write(false))
            .await
            .unwrap()
            .to_string();

        let after = chrono::Local::now().date_naive();
        let date = output.lines().nth(1).unwrap().split(';').next().unwrap();
        assert!(
            date == before.format("%d/%m/%Y").to_string()
                || date == after.format("%d/%m/%Y").to_string(),
            "unexpected fallback date {}",
            date
        );
    }
}
