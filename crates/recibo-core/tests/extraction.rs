//! End-to-end extraction tests over realistic recognized-text blobs.

use pretty_assertions::assert_eq;

use recibo_core::{
    ExtractionRules, ReceiptExtractor, ReceiptParser, RecognizedText, RuleProfile, normalize,
};

fn parse(text: &str) -> recibo_core::ExtractionResult {
    ReceiptParser::new().parse(text)
}

#[test]
fn normalization_is_idempotent_and_case_insensitive() {
    let raw = "Número: |23\nSerie: ab12\nTotal Q45.00";
    let once = normalize(raw);
    assert_eq!(normalize(&once), once);

    let lower = parse(raw);
    let upper = parse(&raw.to_uppercase());
    assert_eq!(lower.fields.amount, upper.fields.amount);
    assert_eq!(lower.fields.series, upper.fields.series);
}

#[test]
fn labeled_total_beats_other_amounts() {
    let text = "PARQUEO LOS PROCERES\nCUOTA 99.99\nTOTAL Q45.00\nEFECTIVO 100.00";
    assert_eq!(parse(text).fields.amount, "45.00");
}

#[test]
fn labeled_series_and_number() {
    let result = parse("SERIE: AB123\nNUMERO: 4521");
    assert_eq!(result.fields.series, "AB123");
    assert_eq!(result.fields.document_number, "4521");
}

#[test]
fn bare_pair_rescued_when_unlabeled() {
    let result = parse("PARQUEO EL CENTRO\nXJ 99871\nGRACIAS");
    assert_eq!(result.fields.series, "XJ");
    assert_eq!(result.fields.document_number, "99871");
}

#[test]
fn denylisted_pair_is_not_a_series() {
    // "TOTAL 45.00" must never be read as series TOTAL, number 45.
    let result = parse("TOTAL 45.00");
    assert_eq!(result.fields.series, "");
    assert_eq!(result.fields.amount, "45.00");
}

#[test]
fn year_values_never_win_disambiguation() {
    let text = "PEAJE\n2024.00\n12.50\n8.00";
    assert_eq!(parse(text).fields.amount, "12.50");
}

#[test]
fn ceiling_rejects_implausible_amounts() {
    let mut rules = ExtractionRules::standard();
    rules.amount_ceiling = rust_decimal::Decimal::from(40_000);
    let parser = ReceiptParser::from_rules(&rules).unwrap();

    let result = parser.parse("12.50\n45000.00\n8.00");
    assert_eq!(result.fields.amount, "12.50");
}

#[test]
fn nit_is_hyphen_stripped() {
    assert_eq!(parse("NIT: 1234567-8").fields.tax_id, "12345678");
}

#[test]
fn date_is_reordered_to_iso() {
    assert_eq!(parse("05/09/2025").fields.date, "2025-09-05");
}

#[test]
fn unrecognizable_text_degrades_gracefully() {
    let text = "lorem ipsum dolor sit amet";
    let result = parse(text);

    assert_eq!(result.fields.series, "");
    assert_eq!(result.fields.document_number, "");
    assert_eq!(result.fields.tax_id, "");
    assert_eq!(result.fields.amount, "");
    assert_eq!(result.fields.date, "");
    assert_eq!(result.fields.raw_text, text);
    assert_eq!(result.warnings.len(), 5);
}

#[test]
fn full_thermal_receipt() {
    let text = "FARMACIA CRUZ VERDE\nNIT: 765432-1\n5ERIE B-12\nNUMER0: 88421\n\
                12/03/2024 14:32\n2 UNID 12.50\nSUB 25.00\nTOTAL Q25.00";

    let result = ReceiptParser::new().extract(&RecognizedText::new(text, "spa"));
    assert_eq!(result.fields.series, "B-12");
    assert_eq!(result.fields.document_number, "88421");
    assert_eq!(result.fields.tax_id, "7654321");
    assert_eq!(result.fields.date, "2024-03-12");
    assert_eq!(result.fields.amount, "25.00");
    assert!(result.warnings.is_empty());
}

#[test]
fn legacy_profile_still_extracts_basic_fields() {
    let parser = ReceiptParser::from_profile(RuleProfile::Legacy);
    let result = parser.parse("SERIE: AB12\nNUMERO: 3291\nTOTAL 45.00");

    assert_eq!(result.fields.series, "AB12");
    assert_eq!(result.fields.document_number, "3291");
    assert_eq!(result.fields.amount, "45.00");
}

#[test]
fn electronic_invoice_uuid_becomes_document_number() {
    let text = "FEL DOCUMENTO TRIBUTARIO\n1A2B3C4D-12AB-34CD-56EF-1234567890AB\nTOTAL 10.00";
    let result = parse(text);
    assert_eq!(
        result.fields.document_number,
        "1A2B3C4D-12AB-34CD-56EF-1234567890AB"
    );
    assert_eq!(result.strategies["documentNumber"], "uuid");
}

#[test]
fn result_serializes_with_camel_case_keys() {
    let result = parse("NUMERO: 3291");
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["fields"]["documentNumber"], "3291");
    assert!(json["fields"]["rawText"].is_string());
}
