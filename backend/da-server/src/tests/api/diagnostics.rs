use crate::DiagnosticsResponse;
use crate::api::diagnostics::diagnostics::truncate_chars;

use da_config::DatabaseConfig;

use googletest::prelude::*;

#[test]
fn given_short_text_when_truncated_then_unchanged() {
    assert_that!(truncate_chars("timeout", 80), eq("timeout"));
}

#[test]
fn given_long_text_when_truncated_then_first_chars_kept() {
    let text = "x".repeat(100);

    assert_that!(truncate_chars(&text, 80).chars().count(), eq(80));
}

#[test]
fn given_multibyte_text_when_truncated_then_char_boundary_respected() {
    assert_that!(truncate_chars("ééé", 2), eq("éé"));
}

#[test]
fn given_unconfigured_database_when_disconnected_report_then_all_negative() {
    let report = DiagnosticsResponse::disconnected(&DatabaseConfig::default());

    assert_that!(report.backend, eq("✅ Running"));
    assert_that!(report.database, eq("❌ Not Available"));
    assert_that!(report.database_url, eq("❌ Not Set"));
    assert_that!(report.database_name, eq("❌ Not Set"));
    assert_that!(report.connection_status, eq("Not Connected"));
    assert_that!(report.collections, is_empty());
}

#[test]
fn given_configured_database_when_disconnected_report_then_settings_shown_as_set() {
    let database = DatabaseConfig {
        url: Some("mongodb://localhost:27017".to_string()),
        name: Some("agency".to_string()),
    };

    let report = DiagnosticsResponse::disconnected(&database);

    assert_that!(report.database_url, eq("✅ Set"));
    assert_that!(report.database_name, eq("✅ Set"));
}
