//! Enum inspection command handlers.

use crate::CliOutput;
use crate::error::CliError;
use crate::format::{OutputMode, render_json};
use clap::ValueEnum;
use restkit_domain::{
    AccountKind, ClosedEnum, Cycle, EnumError, Environment, Gender, Locale, LoginMethod,
    OrderKind, PayMethod, Platform, SnapshotReason, SubsSource, SubsStatus, Tier,
};
use serde::Serialize;
use std::fmt::Write as _;

/// Enumeration selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EnumKind {
    /// Billing cycle.
    Cycle,
    /// Membership tier.
    Tier,
    /// Profile gender.
    Gender,
    /// Client platform.
    Platform,
    /// Payment channel.
    PayMethod,
    /// Order kind.
    OrderKind,
    /// Login method.
    LoginMethod,
    /// Account kind.
    AccountKind,
    /// Subscription status.
    SubsStatus,
    /// Subscription source.
    SubsSource,
    /// Membership snapshot reason.
    SnapshotReason,
    /// App store environment.
    Environment,
}

/// Run `$func::<T>(args..)` for the enumeration type selected by `kind`.
macro_rules! dispatch_kind {
    ($kind:expr, $func:ident $(, $arg:expr)* $(,)?) => {
        match $kind {
            EnumKind::Cycle => $func::<Cycle>($($arg),*),
            EnumKind::Tier => $func::<Tier>($($arg),*),
            EnumKind::Gender => $func::<Gender>($($arg),*),
            EnumKind::Platform => $func::<Platform>($($arg),*),
            EnumKind::PayMethod => $func::<PayMethod>($($arg),*),
            EnumKind::OrderKind => $func::<OrderKind>($($arg),*),
            EnumKind::LoginMethod => $func::<LoginMethod>($($arg),*),
            EnumKind::AccountKind => $func::<AccountKind>($($arg),*),
            EnumKind::SubsStatus => $func::<SubsStatus>($($arg),*),
            EnumKind::SubsSource => $func::<SubsSource>($($arg),*),
            EnumKind::SnapshotReason => $func::<SnapshotReason>($($arg),*),
            EnumKind::Environment => $func::<Environment>($($arg),*),
        }
    };
}

impl EnumKind {
    /// Rust type name of the enumeration.
    pub fn type_name(self) -> &'static str {
        dispatch_kind!(self, type_name_of)
    }
}

fn type_name_of<T: ClosedEnum>() -> &'static str {
    T::type_name()
}

/// Locale flag values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LocaleArg {
    /// Simplified Chinese.
    Cn,
    /// English.
    En,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::Cn => Self::Chinese,
            LocaleArg::En => Self::English,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ValueReport {
    kind: &'static str,
    ordinal: i16,
    label: Option<&'static str>,
    valid: bool,
    json: String,
    cn: Option<&'static str>,
    en: Option<&'static str>,
}

impl ValueReport {
    fn of<T: ClosedEnum>(value: T) -> Self {
        Self {
            kind: T::type_name(),
            ordinal: value.ordinal(),
            label: value.canonical_label(),
            valid: value.is_valid(),
            json: value.encode_json(),
            cn: T::TABLE.translation(value, Locale::Chinese),
            en: T::TABLE.translation(value, Locale::English),
        }
    }

    fn to_text(&self) -> String {
        format!(
            "kind: {}\nlabel: {}\nordinal: {}\nvalid: {}\njson: {}\n",
            self.kind,
            self.label.unwrap_or("(invalid)"),
            self.ordinal,
            self.valid,
            self.json,
        )
    }
}

#[derive(Debug, Serialize)]
struct AliasReport {
    alias: &'static str,
    label: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct KindReport {
    kind: &'static str,
    values: Vec<ValueReport>,
    aliases: Vec<AliasReport>,
}

fn kind_report<T: ClosedEnum>() -> KindReport {
    KindReport {
        kind: T::type_name(),
        values: T::values().map(ValueReport::of).collect(),
        aliases: T::TABLE
            .aliases
            .iter()
            .map(|&(alias, target)| AliasReport {
                alias,
                label: target.to_label(),
            })
            .collect(),
    }
}

fn kind_summary_text(report: &KindReport) -> String {
    let labels: Vec<&str> = report
        .values
        .iter()
        .filter_map(|value| value.label)
        .collect();
    let mut line = format!("{}: {}", report.kind, labels.join(", "));
    if !report.aliases.is_empty() {
        let aliases: Vec<String> = report
            .aliases
            .iter()
            .map(|alias| format!("{} -> {}", alias.alias, alias.label))
            .collect();
        let _ = write!(line, " (aliases: {})", aliases.join(", "));
    }
    line.push('\n');
    line
}

fn kind_detail_text(report: &KindReport) -> String {
    let mut output = format!("{}\n", report.kind);
    for value in &report.values {
        let _ = write!(
            output,
            "{:>3}  {}",
            value.ordinal,
            value.label.unwrap_or_default()
        );
        if let Some(cn) = value.cn {
            let _ = write!(output, "  cn={cn}");
        }
        if let Some(en) = value.en {
            let _ = write!(output, "  en={en}");
        }
        output.push('\n');
    }
    for alias in &report.aliases {
        let _ = writeln!(output, "  alias {} -> {}", alias.alias, alias.label);
    }
    output
}

/// List one enumeration in detail, or every enumeration in summary.
pub fn run_enums_list(mode: OutputMode, kind: Option<EnumKind>) -> Result<CliOutput, CliError> {
    let reports: Vec<KindReport> = match kind {
        Some(kind) => vec![dispatch_kind!(kind, kind_report)],
        None => EnumKind::value_variants()
            .iter()
            .map(|kind| dispatch_kind!(*kind, kind_report))
            .collect(),
    };

    let stdout = if mode.is_json() {
        render_json(&serde_json::json!({ "status": "ok", "enums": reports }))?
    } else if kind.is_some() {
        reports.iter().map(kind_detail_text).collect()
    } else {
        reports.iter().map(kind_summary_text).collect()
    };
    Ok(CliOutput { stdout })
}

fn parse_report<T: ClosedEnum>(label: &str, lenient: bool) -> Result<ValueReport, EnumError> {
    let value = if lenient {
        T::parse_or_invalid(label)
    } else {
        T::parse(label)?
    };
    Ok(ValueReport::of(value))
}

/// Parse a label.
pub fn run_enums_parse(
    mode: OutputMode,
    kind: EnumKind,
    label: &str,
    lenient: bool,
) -> Result<CliOutput, CliError> {
    tracing::debug!(kind = kind.type_name(), label, lenient, "parsing label");
    let report = dispatch_kind!(kind, parse_report, label, lenient)?;

    let stdout = if mode.is_json() {
        render_json(&serde_json::json!({ "status": "ok", "value": report }))?
    } else {
        report.to_text()
    };
    Ok(CliOutput { stdout })
}

fn decode_report<T: ClosedEnum>(json: &str, lenient: bool) -> Result<ValueReport, EnumError> {
    let value = if lenient {
        T::decode_json_lenient(json.as_bytes())?
    } else {
        T::decode_json(json.as_bytes())?
    };
    Ok(ValueReport::of(value))
}

/// Decode a JSON document (a string or `null`).
pub fn run_enums_decode_json(
    mode: OutputMode,
    kind: EnumKind,
    json: &str,
    lenient: bool,
) -> Result<CliOutput, CliError> {
    let report = dispatch_kind!(kind, decode_report, json, lenient)?;

    let stdout = if mode.is_json() {
        render_json(&serde_json::json!({ "status": "ok", "value": report }))?
    } else {
        report.to_text()
    };
    Ok(CliOutput { stdout })
}

#[derive(Debug, Serialize)]
struct DisplayReport {
    kind: &'static str,
    label: Option<&'static str>,
    locale: &'static str,
    display: &'static str,
}

fn display_report<T: ClosedEnum>(
    label: &str,
    lenient: bool,
    locale: Locale,
) -> Result<DisplayReport, EnumError> {
    let value = if lenient {
        T::parse_or_invalid(label)
    } else {
        T::parse(label)?
    };
    Ok(DisplayReport {
        kind: T::type_name(),
        label: value.canonical_label(),
        locale: locale.code(),
        display: value.to_display(locale),
    })
}

/// Show the localized display string for a label.
pub fn run_enums_display(
    mode: OutputMode,
    kind: EnumKind,
    label: &str,
    lenient: bool,
    locale: Locale,
) -> Result<CliOutput, CliError> {
    let report = dispatch_kind!(kind, display_report, label, lenient, locale)?;

    let stdout = if mode.is_json() {
        render_json(&serde_json::json!({ "status": "ok", "display": report }))?
    } else {
        format!("{}\n", report.display)
    };
    Ok(CliOutput { stdout })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::OutputFormat;

    const TEXT: OutputMode = OutputMode {
        format: OutputFormat::Text,
    };

    #[test]
    fn kind_names_match_types() {
        assert_eq!(EnumKind::PayMethod.type_name(), "PayMethod");
        assert_eq!(EnumKind::SnapshotReason.type_name(), "SnapshotReason");
    }

    #[test]
    fn summary_lists_aliases() {
        let text = kind_summary_text(&kind_report::<PayMethod>());
        assert_eq!(
            text,
            "PayMethod: alipay, wechat, stripe (aliases: tenpay -> wechat)\n"
        );
    }

    #[test]
    fn parse_reports_canonical_label() -> Result<(), CliError> {
        let output = run_enums_parse(TEXT, EnumKind::PayMethod, "tenpay", false)?;
        assert!(output.stdout.contains("label: wechat"));
        assert!(output.stdout.contains("ordinal: 1"));
        Ok(())
    }

    #[test]
    fn strict_parse_fails_and_lenient_does_not() -> Result<(), CliError> {
        let error = run_enums_parse(TEXT, EnumKind::Cycle, "Month", false).err();
        assert!(matches!(error, Some(CliError::Codec(_))));

        let output = run_enums_parse(TEXT, EnumKind::Cycle, "Month", true)?;
        assert!(output.stdout.contains("label: (invalid)"));
        Ok(())
    }

    #[test]
    fn display_uses_locale() -> Result<(), CliError> {
        let output = run_enums_display(TEXT, EnumKind::Tier, "premium", false, Locale::Chinese)?;
        assert_eq!(output.stdout, "高级会员\n");
        Ok(())
    }
}
