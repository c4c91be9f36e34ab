use crate::cli::OutputFormat;
use crate::models::Report;

pub fn format_report(report: &Report, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_text(report),
        OutputFormat::Json => format_json(report),
    }
}

fn format_text(report: &Report) -> String {
    let mut out = String::from("Testing environment variables...\n");
    out.push_str(&format!("Google Maps API Key: {}\n", report.google_maps_api_key));
    out.push_str(&format!("GetAddress API Key: {}\n", report.getaddress_api_key));
    out.push_str(&format!("Google Sheet ID: {}\n", or_none(&report.google_sheet_id)));
    out.push_str(&format!(
        "Credentials file path: {}\n",
        or_none(&report.credentials_file)
    ));
    if report.credentials_file_found {
        out.push_str("✓ Credentials file found!");
    } else {
        out.push_str("✗ Credentials file NOT found - check your path");
    }
    out
}

fn format_json(report: &Report) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
}

fn or_none(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("None")
}
