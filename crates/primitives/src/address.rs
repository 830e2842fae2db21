//! Column label and sheet-name helpers for spreadsheet-style A1 references.

use std::borrow::Cow;

pub const MAX_ROW_COUNT: u32 = 1_048_576;
pub const MAX_COLUMN_COUNT: u32 = 16_384;

/// Returned by [`column_label_to_number`] when the input holds no usable letters.
pub const INVALID_COLUMN: i32 = -1;

/// Convert a 1-based column number to its letter label (1 -> A, 26 -> Z, 27 -> AA).
///
/// Column labels are a bijective base-26 numeral, so there is no zero digit:
/// after `Z` comes `AA`, not `A` followed by a zero.
///
/// # Panics
///
/// Panics if `column` is less than 1. Callers are expected to validate
/// column numbers before converting them.
pub fn column_number_to_label(column: i32) -> String {
    assert!(
        column >= 1,
        "column_number_to_label: column must be 1 or greater, got {column}"
    );

    let mut n = column;
    let mut digits = Vec::new();
    loop {
        n -= 1;
        digits.push(b'A' + (n % 26) as u8);
        n /= 26;
        if n == 0 {
            break;
        }
    }
    digits.iter().rev().map(|&b| b as char).collect()
}

/// Convert a column label to its 1-based column number (A -> 1, Z -> 26, AA -> 27).
///
/// Letters are matched case-insensitively and any other characters (such as
/// `$` markers) are skipped. Returns [`INVALID_COLUMN`] if no letters remain
/// or the value does not fit in an `i32`.
pub fn column_label_to_number(label: &str) -> i32 {
    let mut result: i32 = 0;
    let mut seen = false;
    for b in label.bytes().filter(u8::is_ascii_alphabetic) {
        let digit = i32::from(b.to_ascii_uppercase() - b'A') + 1;
        result = match result.checked_mul(26).and_then(|v| v.checked_add(digit)) {
            Some(v) => v,
            None => return INVALID_COLUMN,
        };
        seen = true;
    }
    if seen {
        result
    } else {
        INVALID_COLUMN
    }
}

/// Split `Sheet!A1:B2` into the sheet name and the range expression.
///
/// The split happens at the last `!`, so a sheet name may itself contain `!`
/// (`'a!b'!A1` names sheet `a!b`) but the range expression may not.
///
/// A sheet segment wrapped in single quotes has the quotes removed and every
/// doubled quote (`''`) collapsed to one. Unquoted segments are returned as
/// written. An empty sheet segment yields `None`.
pub fn split_sheet_qualifier(raw: &str) -> (Option<String>, &str) {
    let Some((sheet_part, range_part)) = raw.rsplit_once('!') else {
        return (None, raw);
    };

    let sheet_name = match sheet_part
        .strip_prefix('\'')
        .and_then(|rest| rest.strip_suffix('\''))
    {
        Some(inner) => inner.replace("''", "'"),
        None => sheet_part.to_string(),
    };

    if sheet_name.is_empty() {
        (None, range_part)
    } else {
        (Some(sheet_name), range_part)
    }
}

/// Quote a sheet name so it survives [`split_sheet_qualifier`].
///
/// Names made of ASCII alphanumerics and `_` are returned untouched; anything
/// else is wrapped in single quotes with embedded quotes doubled.
pub fn quote_sheet_name(name: &str) -> Cow<'_, str> {
    if !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Cow::Borrowed(name);
    }
    Cow::Owned(format!("'{}'", name.replace('\'', "''")))
}
