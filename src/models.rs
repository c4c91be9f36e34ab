use serde::Serialize;

use crate::config::{
    EnvSnapshot, GETADDRESS_API_KEY, GOOGLE_MAPS_API_KEY, GOOGLE_SHEET_ID,
    GOOGLE_SHEETS_CREDENTIALS_FILE,
};
use crate::errors::AppError;
use crate::utils::validation::credentials_file_exists;

const SECRET_PREVIEW_CHARS: usize = 10;

#[derive(Serialize, Debug)]
pub struct Report {
    pub google_maps_api_key: String,
    pub getaddress_api_key: String,
    pub google_sheet_id: Option<String>,
    pub credentials_file: Option<String>,
    pub credentials_file_found: bool,
}

impl Report {
    pub fn build(env: &EnvSnapshot) -> Result<Self, AppError> {
        let credentials_file = env.get(GOOGLE_SHEETS_CREDENTIALS_FILE).map(str::to_string);
        let credentials_file_found =
            credentials_file_exists(env.get_non_empty(GOOGLE_SHEETS_CREDENTIALS_FILE))?;

        Ok(Report {
            google_maps_api_key: secret_preview(env.get_non_empty(GOOGLE_MAPS_API_KEY)),
            getaddress_api_key: secret_preview(env.get_non_empty(GETADDRESS_API_KEY)),
            google_sheet_id: env.get(GOOGLE_SHEET_ID).map(str::to_string),
            credentials_file,
            credentials_file_found,
        })
    }
}

/// At most the first 10 characters of a secret followed by `...`,
/// or `NOT FOUND...` when it is unset or empty.
pub fn secret_preview(value: Option<&str>) -> String {
    match value.filter(|v| !v.is_empty()) {
        Some(v) => format!("{}...", v.chars().take(SECRET_PREVIEW_CHARS).collect::<String>()),
        None => "NOT FOUND...".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_secret_is_truncated_to_ten_chars() {
        assert_eq!(secret_preview(Some("abcdefghijklmnop")), "abcdefghij...");
        assert_eq!(secret_preview(Some("0123456789")), "0123456789...");
    }

    #[test]
    fn short_secret_is_shown_whole() {
        assert_eq!(secret_preview(Some("abc")), "abc...");
    }

    #[test]
    fn unset_and_empty_secrets_are_not_found() {
        assert_eq!(secret_preview(None), "NOT FOUND...");
        assert_eq!(secret_preview(Some("")), "NOT FOUND...");
    }

    #[test]
    fn multibyte_secret_is_cut_on_char_boundary() {
        assert_eq!(secret_preview(Some("ключ-ключ-ключ")), "ключ-ключ-...");
    }

    #[test]
    fn empty_environment_reports_everything_missing() {
        let report = Report::build(&EnvSnapshot::default()).unwrap();

        assert_eq!(report.google_maps_api_key, "NOT FOUND...");
        assert_eq!(report.getaddress_api_key, "NOT FOUND...");
        assert_eq!(report.google_sheet_id, None);
        assert_eq!(report.credentials_file, None);
        assert!(!report.credentials_file_found);
    }

    #[test]
    fn sheet_id_is_not_truncated() {
        let env = EnvSnapshot::from_pairs([(GOOGLE_SHEET_ID, "1A2b3C-long-sheet-identifier")]);
        let report = Report::build(&env).unwrap();

        assert_eq!(report.google_sheet_id.as_deref(), Some("1A2b3C-long-sheet-identifier"));
    }

    #[test]
    fn existing_credentials_file_is_found() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        let env = EnvSnapshot::from_pairs([(GOOGLE_SHEETS_CREDENTIALS_FILE, path)]);

        let report = Report::build(&env).unwrap();
        assert_eq!(report.credentials_file.as_deref(), Some(path));
        assert!(report.credentials_file_found);
    }

    #[test]
    fn missing_credentials_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let path = missing.to_str().unwrap();
        let env = EnvSnapshot::from_pairs([(GOOGLE_SHEETS_CREDENTIALS_FILE, path)]);

        let report = Report::build(&env).unwrap();
        assert_eq!(report.credentials_file.as_deref(), Some(path));
        assert!(!report.credentials_file_found);
    }
}
