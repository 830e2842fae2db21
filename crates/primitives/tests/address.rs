use xlrange_primitives::{
    column_label_to_number, column_number_to_label, quote_sheet_name, split_sheet_qualifier,
    INVALID_COLUMN, MAX_COLUMN_COUNT,
};

#[test]
fn test_known_column_labels() {
    let cases = [
        (1, "A"),
        (26, "Z"),
        (27, "AA"),
        (52, "AZ"),
        (53, "BA"),
        (702, "ZZ"),
        (703, "AAA"),
    ];
    for (number, label) in cases {
        assert_eq!(column_number_to_label(number), label);
        assert_eq!(column_label_to_number(label), number);
    }
}

#[test]
fn test_last_sheet_column() {
    let last = MAX_COLUMN_COUNT as i32;
    assert_eq!(column_number_to_label(last), "XFD");
    assert_eq!(column_label_to_number("XFD"), last);
}

#[test]
fn test_column_labels_are_case_insensitive() {
    assert_eq!(column_label_to_number("ab"), column_label_to_number("AB"));
    assert_eq!(column_label_to_number("aB"), 28);
}

#[test]
fn test_column_label_strips_non_letters() {
    assert_eq!(column_label_to_number("$AB"), 28);
    assert_eq!(column_label_to_number("A B"), 28);
    assert_eq!(column_label_to_number("12"), INVALID_COLUMN);
}

#[test]
fn test_canonical_labels_roundtrip() {
    for label in ["A", "M", "Z", "AA", "QZ", "ZZ", "AAA", "XFD"] {
        assert_eq!(column_number_to_label(column_label_to_number(label)), label);
    }
}

#[test]
fn test_split_sheet_qualifier_with_quotes() {
    let (sheet, range) = split_sheet_qualifier("'filename'''!A1:B5");
    assert_eq!(sheet.as_deref(), Some("filename'"));
    assert_eq!(range, "A1:B5");

    let (sheet, range) = split_sheet_qualifier("Sheet 1!D3:E8");
    assert_eq!(sheet.as_deref(), Some("Sheet 1"));
    assert_eq!(range, "D3:E8");
}

#[test]
fn test_quoted_names_split_back() {
    for name in ["Sheet 1", "it's", "''", "Sales-2024", "Plain"] {
        let qualified = format!("{}!A1", quote_sheet_name(name));
        let (sheet, range) = split_sheet_qualifier(&qualified);
        assert_eq!(sheet.as_deref(), Some(name));
        assert_eq!(range, "A1");
    }
}
