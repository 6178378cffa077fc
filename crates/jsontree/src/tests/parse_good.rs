use alloc::{format, vec};

use rstest::rstest;

use crate::{ParserOptions, Value, ValueKind, parse, parse_with_options};

#[test]
fn parses_literals() {
    assert_eq!(parse("null"), Ok(Value::Null));
    assert_eq!(parse("false"), Ok(Value::Boolean(false)));
    assert_eq!(parse("true"), Ok(Value::Boolean(true)));
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(parse(" \t\r\n null \t\r\n "), Ok(Value::Null));
}

#[rstest]
#[case(0.0, "0")]
#[case(0.0, "-0")]
#[case(0.0, "-0.0")]
#[case(1.0, "1")]
#[case(-1.0, "-1")]
#[case(1.5, "1.5")]
#[case(-1.5, "-1.5")]
#[case(3.1416, "3.1416")]
#[case(1E10, "1E10")]
#[case(1e10, "1e10")]
#[case(1E+10, "1E+10")]
#[case(1E-10, "1E-10")]
#[case(-1E10, "-1E10")]
#[case(-1e10, "-1e10")]
#[case(-1E+10, "-1E+10")]
#[case(-1E-10, "-1E-10")]
#[case(1.234E+10, "1.234E+10")]
#[case(1.234E-10, "1.234E-10")]
#[case(0.0, "1e-10000")] // underflows to zero
#[case(1.000_000_000_000_000_2, "1.0000000000000002")] // smallest number > 1
#[case(4.940_656_458_412_465_4E-324, "4.9406564584124654e-324")] // minimum denormal
#[case(-4.940_656_458_412_465_4E-324, "-4.9406564584124654e-324")]
#[case(2.225_073_858_507_201E-308, "2.2250738585072009e-308")] // max subnormal
#[case(-2.225_073_858_507_201E-308, "-2.2250738585072009e-308")]
#[case(2.225_073_858_507_201_4E-308, "2.2250738585072014e-308")] // min normal positive
#[case(-2.225_073_858_507_201_4E-308, "-2.2250738585072014e-308")]
#[case(1.797_693_134_862_315_7E308, "1.7976931348623157e+308")] // max double
#[case(-1.797_693_134_862_315_7E308, "-1.7976931348623157e+308")]
fn parses_numbers(#[case] expected: f64, #[case] json: &str) {
    let v = parse(json).unwrap();
    assert_eq!(v.kind(), ValueKind::Number);
    assert_eq!(v.as_number(), Some(expected));
}

#[rstest]
#[case("", r#""""#)]
#[case("Hello", r#""Hello""#)]
#[case("Hello\nWorld", r#""Hello\nWorld""#)]
#[case("\" \\ / \u{8} \u{c} \n \r \t", r#""\" \\ \/ \b \f \n \r \t""#)]
#[case("$", r#""\u0024""#)] // one UTF-8 byte
#[case("\u{a2}", r#""\u00A2""#)] // two UTF-8 bytes
#[case("\u{20ac}", r#""\u20AC""#)] // three UTF-8 bytes
#[case("\u{1d11e}", r#""\uD834\uDD1E""#)] // surrogate pair, four UTF-8 bytes
#[case("\u{1d11e}", r#""\ud834\udd1e""#)] // lower-case hex digits
#[case("\u{10000}", r#""\uD800\uDC00""#)] // lowest supplementary-plane code point
#[case("caf\u{e9} \u{1f980}", "\"caf\u{e9} \u{1f980}\"")] // raw multibyte passthrough
fn parses_strings(#[case] expected: &str, #[case] json: &str) {
    let v = parse(json).unwrap();
    assert_eq!(v.kind(), ValueKind::String);
    assert_eq!(v.as_string().unwrap(), expected);
}

#[test]
fn escaped_nul_is_kept_with_explicit_length() {
    let v = parse("\"Hello\\u0000World\"").unwrap();
    let s = v.as_string().unwrap();
    assert_eq!(s.len(), 11);
    assert_eq!(s, &b"Hello\0World"[..]);
}

#[test]
fn parses_empty_arrays() {
    assert_eq!(parse("[]"), Ok(Value::Array(vec![])));
    assert_eq!(parse("[ \n ]"), Ok(Value::Array(vec![])));
}

#[test]
fn parses_mixed_arrays() {
    let v = parse(r#"[ null , false , true , 123 , "abc" ]"#).unwrap();
    let items = v.as_array().unwrap();
    assert_eq!(items.len(), 5);
    assert!(items[0].is_null());
    assert_eq!(items[1].as_bool(), Some(false));
    assert_eq!(items[2].as_bool(), Some(true));
    assert_eq!(items[3].as_number(), Some(123.0));
    assert_eq!(items[4].as_string().unwrap(), "abc");
}

#[test]
fn parses_nested_arrays() {
    let v = parse("[ [ ] , [ 0 ] , [ 0 , 1 ] , [ 0 , 1 , 2 ] ]").unwrap();
    let outer = v.as_array().unwrap();
    assert_eq!(outer.len(), 4);
    for (i, inner) in outer.iter().enumerate() {
        let inner = inner.as_array().unwrap();
        assert_eq!(inner.len(), i);
        for (j, element) in inner.iter().enumerate() {
            assert_eq!(element.as_number(), Some(j as f64));
        }
    }
}

#[test]
fn parses_empty_objects() {
    assert_eq!(parse("{}"), Ok(Value::Object(vec![])));
    assert_eq!(parse("{ \t }"), Ok(Value::Object(vec![])));
}

#[test]
fn parses_mixed_objects() {
    let v = parse(
        r#" {
            "n" : null ,
            "f" : false ,
            "t" : true ,
            "i" : 123 ,
            "s" : "abc" ,
            "a" : [ 1, 2, 3 ],
            "o" : { "1" : 1, "2" : 2, "3" : 3 }
        } "#,
    )
    .unwrap();
    let members = v.as_object().unwrap();
    assert_eq!(members.len(), 7);
    assert_eq!(members[0].key(), "n");
    assert!(members[0].value().is_null());
    assert_eq!(members[1].value().as_bool(), Some(false));
    assert_eq!(members[2].value().as_bool(), Some(true));
    assert_eq!(members[3].value().as_number(), Some(123.0));
    assert_eq!(members[4].value().as_string().unwrap(), "abc");
    assert_eq!(members[5].value().as_array().unwrap().len(), 3);

    let inner = members[6].value().as_object().unwrap();
    assert_eq!(inner.len(), 3);
    assert_eq!(inner[2].key(), "3");
    assert_eq!(inner[2].value().as_number(), Some(3.0));
}

#[test]
fn object_members_keep_insertion_order_and_duplicates() {
    let v = parse(r#"{"a": 1, "b": 2, "a": 3}"#).unwrap();
    let members = v.as_object().unwrap();
    assert_eq!(members.len(), 3);
    assert_eq!(members[0].key(), "a");
    assert_eq!(members[1].key(), "b");
    assert_eq!(members[2].key(), "a");
    assert_eq!(members[2].value().as_number(), Some(3.0));
}

#[test]
fn object_keys_decode_escapes_like_strings() {
    let v = parse(r#"{"key": "value"}"#).unwrap();
    let members = v.as_object().unwrap();
    assert_eq!(members[0].key(), "key");
}

#[test]
fn nesting_up_to_the_depth_limit_parses() {
    let depth = ParserOptions::default().max_depth;
    let json = format!("{}1{}", "[".repeat(depth), "]".repeat(depth));
    assert!(parse(&json).is_ok());
}

#[test]
fn custom_depth_limit_is_honored() {
    let options = ParserOptions { max_depth: 1 };
    assert!(parse_with_options("[1]", options).is_ok());
    assert!(parse_with_options(r#"{"a": [1]}"#, options).is_err());
}
