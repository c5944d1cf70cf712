//! Integration coverage for the enumeration codecs as a caller sees them.

use restkit_domain::{
    ClosedEnum, Cycle, EnumError, Gender, Locale, PayMethod, Platform, SqlScalar, Tier, codec,
};
use restkit_shared::{ErrorEnvelope, ErrorKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlanRequest {
    tier: Tier,
    cycle: Cycle,
    pay_method: PayMethod,
}

#[derive(Debug, Deserialize)]
struct LenientHeader {
    #[serde(default, deserialize_with = "codec::lenient")]
    platform: Platform,
}

#[test]
fn billing_cycle_month_round_trips() -> Result<(), EnumError> {
    assert_eq!(Cycle::parse("month")?, Cycle::Month);
    assert_eq!(Cycle::Month.to_label(), "month");
    assert_eq!(Cycle::Month.encode_json(), "\"month\"");
    Ok(())
}

#[test]
fn billing_cycle_null_is_invalid() -> Result<(), EnumError> {
    assert_eq!(Cycle::decode_json(b"null")?, Cycle::Invalid);
    assert_eq!(Cycle::Invalid.encode_json(), "null");
    Ok(())
}

#[test]
fn billing_cycle_is_case_sensitive() {
    assert!(matches!(
        Cycle::parse("Month"),
        Err(EnumError::UnrecognizedLabel { type_name: "Cycle", .. })
    ));
}

#[test]
fn gender_rejects_long_form() -> Result<(), EnumError> {
    assert_eq!(Gender::parse("F")?, Gender::Female);
    let Err(error) = Gender::parse("female") else {
        return Err(EnumError::UnrecognizedLabel {
            type_name: "Gender",
            input: "female parsed".to_owned(),
        });
    };
    assert_eq!(
        error,
        EnumError::UnrecognizedLabel {
            type_name: "Gender",
            input: "female".to_owned(),
        }
    );
    Ok(())
}

#[test]
fn pay_method_alias_shares_ordinal_with_canonical() -> Result<(), EnumError> {
    let legacy = PayMethod::parse("tenpay")?;
    let canonical = PayMethod::parse("wechat")?;
    assert_eq!(legacy.ordinal(), canonical.ordinal());
    assert_eq!(legacy.to_label(), "wechat");
    assert_eq!(legacy.encode_json(), "\"wechat\"");
    Ok(())
}

#[test]
fn platform_scans_nullable_text() -> Result<(), EnumError> {
    assert_eq!(Platform::decode_sql(SqlScalar::Null)?, Platform::Invalid);
    assert_eq!(
        Platform::decode_sql(SqlScalar::Bytes(b"android"))?,
        Platform::Android
    );
    assert!(matches!(
        Platform::decode_sql(SqlScalar::Bytes(b"42")),
        Err(EnumError::UnrecognizedLabel { .. })
    ));
    assert!(matches!(
        Platform::decode_sql(SqlScalar::Int(42)),
        Err(EnumError::IncompatibleSqlType { .. })
    ));
    Ok(())
}

#[test]
fn display_of_invalid_is_empty() {
    assert_eq!(Tier::Invalid.to_display(Locale::Chinese), "");
    assert_eq!(Tier::Invalid.to_display_code("cn"), "");
    assert_eq!(Tier::Premium.to_display_code("cn"), "高级会员");
}

#[test]
fn request_body_round_trips_through_serde() -> Result<(), serde_json::Error> {
    let body = r#"{"tier":"premium","cycle":"year","payMethod":"tenpay"}"#;
    let request: PlanRequest = serde_json::from_str(body)?;
    assert_eq!(
        request,
        PlanRequest {
            tier: Tier::Premium,
            cycle: Cycle::Year,
            pay_method: PayMethod::Wechat,
        }
    );

    let encoded = serde_json::to_string(&request)?;
    assert_eq!(
        encoded,
        r#"{"tier":"premium","cycle":"year","payMethod":"wechat"}"#
    );
    Ok(())
}

#[test]
fn request_body_with_null_and_missing_fields() -> Result<(), serde_json::Error> {
    let request: PlanRequest = serde_json::from_str(r#"{"tier":null,"cycle":"month"}"#)?;
    assert_eq!(request.tier, Tier::Invalid);
    assert_eq!(request.pay_method, PayMethod::Invalid);

    let encoded = serde_json::to_value(&request)?;
    assert_eq!(
        encoded,
        serde_json::json!({ "tier": null, "cycle": "month", "payMethod": null })
    );
    Ok(())
}

#[test]
fn request_body_with_unknown_label_is_rejected() {
    let result: Result<PlanRequest, _> =
        serde_json::from_str(r#"{"tier":"gold","cycle":"month","payMethod":"alipay"}"#);
    let message = result.err().map(|error| error.to_string()).unwrap_or_default();
    assert!(message.contains("\"gold\" is not a valid Tier"), "{message}");
}

#[test]
fn lenient_field_accepts_unknown_label() -> Result<(), serde_json::Error> {
    let header: LenientHeader = serde_json::from_str(r#"{"platform":"symbian"}"#)?;
    assert_eq!(header.platform, Platform::Invalid);
    let header: LenientHeader = serde_json::from_str(r#"{"platform":"ios"}"#)?;
    assert_eq!(header.platform, Platform::Ios);
    let header: LenientHeader = serde_json::from_str("{}")?;
    assert_eq!(header.platform, Platform::Invalid);
    Ok(())
}

#[test]
fn storage_failures_are_invariant_violations() {
    let Err(error) = Tier::decode_sql(SqlScalar::Text("gold")) else {
        return;
    };
    let envelope = error.into_storage_error();
    assert_eq!(envelope.kind, ErrorKind::Invariant);
    assert_eq!(envelope.code.to_string(), "enum:stored_data");

    let request: ErrorEnvelope = EnumError::MalformedJson {
        type_name: "Tier",
        reason: "found a number".to_owned(),
    }
    .into();
    assert_eq!(request.kind, ErrorKind::Expected);
    assert_eq!(request.code.code(), "malformed_json");
}
