#![cfg(unix)]

mod common;

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tempfile::TempDir;

use invoice_mailer::invoice::{current_period, render_document};
use invoice_mailer::pdf::TypstRenderer;
use invoice_mailer::InvoiceError;

/// Stands in for typst: writes its arguments, the template and the data file
/// into the output path instead of a PDF.
const ECHO_TYPST: &str = r#"#!/bin/sh
if [ "$1" = "--version" ]; then
  echo "typst 0.11.0"
  exit 0
fi
{
  echo "ARGS: $*"
  cat "$4"
  echo
  cat "$3/data.json"
} > "$5"
"#;

const BROKEN_TYPST: &str = r#"#!/bin/sh
if [ "$1" = "--version" ]; then
  echo "typst 0.11.0"
  exit 0
fi
echo "error: unknown variable: data" >&2
exit 1
"#;

fn fake_typst(dir: &Path, script: &str) -> PathBuf {
    let path = dir.join("typst");
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn march_2024() -> invoice_mailer::BillingPeriod {
    current_period(NaiveDate::from_ymd_opt(2024, 3, 14).unwrap())
}

fn render_with(script: &str) -> (TempDir, invoice_mailer::Result<String>) {
    let temp_dir = TempDir::new().unwrap();
    let renderer = TypstRenderer::with_binary(fake_typst(temp_dir.path(), script));
    let result = render_document(
        &common::sample_config(),
        &march_2024(),
        &renderer,
        temp_dir.path(),
    )
    .map(|doc| String::from_utf8(doc.bytes).unwrap());
    (temp_dir, result)
}

#[test]
fn test_typst_compile_arguments() {
    let (_dir, output) = render_with(ECHO_TYPST);
    let output = output.unwrap();

    let args: Vec<&str> = output
        .lines()
        .next()
        .unwrap()
        .strip_prefix("ARGS: ")
        .unwrap()
        .split(' ')
        .collect();
    assert_eq!(args.len(), 5, "{args:?}");
    assert_eq!(args[0], "compile");
    assert_eq!(args[1], "--root");
    assert_eq!(Path::new(args[3]), Path::new(args[2]).join("invoice.typ"));
    assert!(args[4].ends_with("JaneDoe_March_2024_invoice.pdf"));

    // The template directory is gone once rendering returns.
    assert!(!Path::new(args[2]).exists());
}

#[test]
fn test_template_page_and_table_layout() {
    let (_dir, output) = render_with(ECHO_TYPST);
    let output = output.unwrap();

    assert!(output.contains(r#"#let data = json("data.json")"#));
    assert!(output.contains(r#"#set page(paper: "a4", margin: 50pt)"#));
    assert!(output.contains("columns: (150pt, 100pt, 100pt, 60pt, 100pt)"));
    assert!(output.contains("stroke: 1pt + black"));
    assert!(output.contains("luma(211)"));
    assert!(!output.contains("DATA_JSON_PATH"));
}

#[test]
fn test_template_section_order() {
    let (_dir, output) = render_with(ECHO_TYPST);
    let output = output.unwrap();

    let sections = [
        "#data.title",
        "#labeled(data.issuer)",
        "#data.recipient_name",
        "#labeled(data.recipient)",
        "#data.period",
        "data.header.map",
        "data.charge.service",
        "data.charge.total_amount",
        "data.bank_heading",
        "#labeled(data.bank)",
    ];
    let positions: Vec<usize> = sections
        .iter()
        .map(|s| output.find(s).unwrap_or_else(|| panic!("missing {s}")))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
}

#[test]
fn test_data_file_has_fields_template_reads() {
    let (_dir, output) = render_with(ECHO_TYPST);
    let output = output.unwrap();

    let data: serde_json::Value = serde_json::from_str(output.lines().last().unwrap()).unwrap();
    assert_eq!(data["title"], "INVOICE");
    assert_eq!(data["heading"], "March 2024");
    assert_eq!(data["recipient_name"], "Acme Corp");
    assert_eq!(data["period"], "01 March 2024 – 31 March 2024");
    assert_eq!(data["header"][4], "Total Amount");
    assert_eq!(data["charge"]["service"], "Software Development");
    assert_eq!(data["charge"]["due_date"], "10 April 2024");
    assert_eq!(data["charge"]["total_amount"], "1234.50");
    assert_eq!(data["issuer"][0]["label"], "Name");
    assert_eq!(data["bank"][0]["value"], "PT50000000000000000000000");
}

#[test]
fn test_typst_failure_surfaces_stderr() {
    let (_dir, output) = render_with(BROKEN_TYPST);

    let err = output.unwrap_err();
    assert!(
        matches!(err, InvoiceError::PdfGeneration(ref msg) if msg == "error: unknown variable: data"),
        "{err}"
    );
}
