use super::*;

#[test]
fn validate_draft_trims_and_canonicalizes() {
    let draft = validate_draft(
        "  Sunrise Apartments ",
        " 123 Main St ",
        " corner block ",
        " homiq_db_01 ",
        " jednotka ",
        " sv_l [ m3 , Cold Water ] , tea_kwh[kWh,Heating]",
    )
    .expect("valid draft");
    assert_eq!(draft.name, "Sunrise Apartments");
    assert_eq!(draft.address, "123 Main St");
    assert_eq!(draft.influx_unit_tag, "jednotka");
    assert_eq!(
        draft.influx_measurements,
        "sv_l[m3,Cold Water], tea_kwh[kWh,Heating]"
    );
}

#[test]
fn validate_draft_requires_name_and_address() {
    assert_eq!(
        validate_draft("", "123 Main St", "", "", "", ""),
        Err("Name is required.".to_owned())
    );
    assert_eq!(
        validate_draft("Sunrise", "   ", "", "", "", ""),
        Err("Address is required.".to_owned())
    );
}

#[test]
fn validate_draft_rejects_malformed_measurements() {
    let err = validate_draft("Sunrise", "123 Main St", "", "", "", "sv_l[m3")
        .expect_err("should fail");
    assert!(err.starts_with("Measurements:"));
}

#[test]
fn validate_draft_accepts_empty_measurements() {
    let draft = validate_draft("Sunrise", "123 Main St", "", "", "", "").expect("valid");
    assert_eq!(draft.influx_measurements, "");
}
