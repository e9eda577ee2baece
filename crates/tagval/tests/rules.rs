//! Integration tests: each built-in rule applied through `tagval::validate`.

use tagval::{ErrorKind, ValidationErrors};

fn kinds(errors: &ValidationErrors) -> Vec<ErrorKind> {
    errors.iter().map(|e| e.kind()).collect()
}

// ---------------------------------------------------------------------------
// len
// ---------------------------------------------------------------------------

tagval::record! {
    struct Code {
        pub value: String => "len:5",
    }
}

fn code(value: &str) -> Code {
    Code {
        value: value.to_string(),
    }
}

#[test]
fn test_len_exact_match_passes() {
    assert!(tagval::validate(&code("hello")).is_ok());
}

#[test]
fn test_len_counts_codepoints_not_bytes() {
    assert!(tagval::validate(&code("héllo")).is_ok());
    assert!(tagval::validate(&code("日本語です")).is_ok());
    assert!(tagval::validate(&code("🦀🦀🦀🦀🦀")).is_ok());
}

#[test]
fn test_len_shorter_and_longer_fail() {
    for text in ["hell", "helloo", ""] {
        let errors = tagval::validate(&code(text)).unwrap_err();
        assert_eq!(kinds(&errors), [ErrorKind::InvalidLength], "text {text:?}");
    }
}

tagval::record! {
    struct Pair {
        pub items: Vec<u8> => "len:2",
        pub count: i32 => "len:2",
    }
}

#[test]
fn test_len_on_sequence_and_integer() {
    let pair = Pair {
        items: vec![1, 2],
        count: 2,
    };
    let errors = tagval::validate(&pair).unwrap_err();
    assert_eq!(kinds(&errors), [ErrorKind::InvalidFieldType]);
    assert_eq!(errors.errors()[0].path(), "count");
}

// ---------------------------------------------------------------------------
// min / max
// ---------------------------------------------------------------------------

tagval::record! {
    struct Basket {
        pub items: Vec<String> => "min:2",
        pub same_items: Vec<String> => "max:4",
    }
}

fn basket(n: usize) -> Basket {
    let items = vec!["x".to_string(); n];
    Basket {
        items: items.clone(),
        same_items: items,
    }
}

#[test]
fn test_min_max_on_sequence_length() {
    assert!(tagval::validate(&basket(3)).is_ok());
    assert!(tagval::validate(&basket(2)).is_ok());
    assert!(tagval::validate(&basket(4)).is_ok());

    let errors = tagval::validate(&basket(1)).unwrap_err();
    assert_eq!(kinds(&errors), [ErrorKind::BelowMin]);

    let errors = tagval::validate(&basket(5)).unwrap_err();
    assert_eq!(kinds(&errors), [ErrorKind::AboveMax]);
}

tagval::record! {
    struct Limits {
        pub level: u64 => "max:0x10",
        pub offset: i16 => "min:-0b11",
        pub title: String => "max:3",
    }
}

#[test]
fn test_min_max_with_prefixed_literals() {
    let ok = Limits {
        level: 16,
        offset: -3,
        title: "ééé".into(),
    };
    assert!(tagval::validate(&ok).is_ok());

    let bad = Limits {
        level: 17,
        offset: -4,
        title: "abcd".into(),
    };
    let errors = tagval::validate(&bad).unwrap_err();
    assert_eq!(
        kinds(&errors),
        [ErrorKind::AboveMax, ErrorKind::BelowMin, ErrorKind::AboveMax]
    );
    assert_eq!(
        errors.errors()[2].to_string(),
        "title: string length 4 is greater than max 3"
    );
}

#[test]
fn test_huge_unsigned_saturates_against_max() {
    let limits = Limits {
        level: u64::MAX,
        offset: 0,
        title: String::new(),
    };
    let errors = tagval::validate(&limits).unwrap_err();
    assert_eq!(
        errors.to_string(),
        format!("level: int value {} is greater than max 16", i64::MAX)
    );
}

// ---------------------------------------------------------------------------
// in
// ---------------------------------------------------------------------------

tagval::record! {
    struct Choice {
        pub number: i64 => "in:1,2,3",
        pub colour: String => "in: red , green,blue",
    }
}

#[test]
fn test_in_accepts_listed_values() {
    let choice = Choice {
        number: 2,
        colour: "green".into(),
    };
    assert!(tagval::validate(&choice).is_ok());
}

#[test]
fn test_in_rejects_unlisted_values() {
    let choice = Choice {
        number: 4,
        colour: "Green".into(),
    };
    let errors = tagval::validate(&choice).unwrap_err();
    assert_eq!(kinds(&errors), [ErrorKind::NotInList, ErrorKind::NotInList]);
    assert_eq!(
        errors.to_string(),
        "number: field value 4 is not in the allowed list; \
         colour: field value \"Green\" is not in the allowed list"
    );
}

tagval::record! {
    struct BadList {
        pub number: i64 => "in:1,2,x",
    }
}

#[test]
fn test_in_with_non_integer_entry_is_syntax_error_for_any_integer() {
    for number in [1, 2, 3, 42] {
        let errors = tagval::validate(&BadList { number }).unwrap_err();
        assert_eq!(kinds(&errors), [ErrorKind::InvalidSyntax], "number {number}");
    }
}

tagval::record! {
    struct Tags {
        pub tags: Vec<String> => "in:a,b",
    }
}

#[test]
fn test_in_on_sequence_is_type_error() {
    let errors = tagval::validate(&Tags {
        tags: vec!["a".into()],
    })
    .unwrap_err();
    assert_eq!(kinds(&errors), [ErrorKind::InvalidFieldType]);
}

// ---------------------------------------------------------------------------
// Annotation syntax
// ---------------------------------------------------------------------------

tagval::record! {
    struct Malformed {
        pub a: String => "len5",
        pub b: String => "len:",
        pub c: String => "regex:^a$",
        pub d: i64 => "min:ten",
        pub e: String => "len:-1",
        pub f: String => "  len : 1 ",
    }
}

#[test]
fn test_malformed_annotations_are_syntax_errors() {
    let record = Malformed {
        a: String::new(),
        b: String::new(),
        c: String::new(),
        d: 0,
        e: String::new(),
        f: "x".into(),
    };
    let errors = tagval::validate(&record).unwrap_err();
    assert_eq!(kinds(&errors), [ErrorKind::InvalidSyntax; 5]);
    let paths: Vec<&str> = errors.iter().map(|e| e.path()).collect();
    assert_eq!(paths, ["a", "b", "c", "d", "e"]);
}

#[test]
fn test_rule_parse_is_public() {
    assert_eq!(tagval::Rule::parse("max:0o17"), Ok(tagval::Rule::Max(15)));
    assert!(tagval::Rule::parse("len").is_err());
}
