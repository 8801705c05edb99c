//! Measurement-declaration grammar for building telemetry configuration.
//!
//! DESIGN
//! ======
//! A building stores the series it publishes as one compact string, e.g.
//! `sv_l[m3,Cold Water], tea_kwh[kWh,Heating]`. Each declaration is
//! `name[uom,kind]`; list items are separated by commas, but the bracket
//! payload contains a comma of its own, so the list split only honors
//! commas at bracket depth zero.

#[cfg(test)]
#[path = "decl_test.rs"]
mod decl_test;

use serde::{Deserialize, Serialize};

/// One declared measurement series on a building.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementDecl {
    /// Series name as stored in the telemetry database (e.g. `sv_l`).
    pub name: String,
    /// Unit of measure reported by the series (e.g. `m3`, `kWh`).
    pub uom: String,
    /// Human-facing meter-type label (e.g. `Cold Water`).
    pub kind: String,
}

/// Error returned by [`parse_measurements`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DeclError {
    /// A `]` appeared without a matching `[`, or a `[` was never closed.
    #[error("unbalanced brackets in measurement list at byte {0}")]
    UnbalancedBrackets(usize),
    /// Brackets nested inside a declaration payload.
    #[error("nested brackets in measurement declaration {0:?}")]
    NestedBrackets(String),
    /// A declaration without any `[uom,kind]` payload.
    #[error("measurement declaration {0:?} is missing a [uom,kind] payload")]
    MissingPayload(String),
    /// Text after the closing bracket of a declaration.
    #[error("unexpected trailing input {0:?} in measurement declaration")]
    TrailingInput(String),
    /// A declaration whose series name is empty.
    #[error("measurement declaration has an empty series name")]
    EmptyName,
    /// A declaration whose unit of measure is empty.
    #[error("measurement {0:?} has an empty unit of measure")]
    EmptyUom(String),
    /// A payload without the comma separating uom from kind, or an empty kind.
    #[error("measurement {0:?} is missing a kind label")]
    MissingKind(String),
}

/// Parse a comma-separated measurement list into declarations.
///
/// Whitespace around names, payload fields, and separators is ignored.
/// Empty segments (including a fully empty input) are skipped, so a
/// trailing comma is not an error.
///
/// # Errors
///
/// Returns a [`DeclError`] describing the first malformed declaration.
pub fn parse_measurements(input: &str) -> Result<Vec<MeasurementDecl>, DeclError> {
    let mut decls = Vec::new();
    for segment in split_top_level(input)? {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        decls.push(parse_decl(segment)?);
    }
    Ok(decls)
}

/// Serialize declarations back into the canonical list form.
///
/// The output round-trips through [`parse_measurements`] unchanged.
#[must_use]
pub fn serialize_measurements(decls: &[MeasurementDecl]) -> String {
    decls
        .iter()
        .map(|d| format!("{}[{},{}]", d.name, d.uom, d.kind))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Split the list at commas outside any bracket payload.
fn split_top_level(input: &str) -> Result<Vec<&str>, DeclError> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (i, ch) in input.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or(DeclError::UnbalancedBrackets(i))?;
            }
            ',' if depth == 0 => {
                parts.push(&input[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(DeclError::UnbalancedBrackets(input.len()));
    }
    parts.push(&input[start..]);
    Ok(parts)
}

/// Parse a single trimmed `name[uom,kind]` declaration.
fn parse_decl(segment: &str) -> Result<MeasurementDecl, DeclError> {
    let Some(open) = segment.find('[') else {
        return Err(DeclError::MissingPayload(segment.to_owned()));
    };
    if !segment.ends_with(']') {
        return Err(DeclError::TrailingInput(segment.to_owned()));
    }

    let name = segment[..open].trim();
    let payload = &segment[open + 1..segment.len() - 1];
    if payload.contains('[') || payload.contains(']') {
        return Err(DeclError::NestedBrackets(segment.to_owned()));
    }
    if name.is_empty() {
        return Err(DeclError::EmptyName);
    }

    // The first comma splits uom from kind; later commas belong to the kind
    // label ("Cold Water, basement" stays one label).
    let Some((uom, kind)) = payload.split_once(',') else {
        return Err(DeclError::MissingKind(name.to_owned()));
    };
    let uom = uom.trim();
    let kind = kind.trim();
    if uom.is_empty() {
        return Err(DeclError::EmptyUom(name.to_owned()));
    }
    if kind.is_empty() {
        return Err(DeclError::MissingKind(name.to_owned()));
    }

    Ok(MeasurementDecl {
        name: name.to_owned(),
        uom: uom.to_owned(),
        kind: kind.to_owned(),
    })
}
