use std::string::String;

use quickcheck::{Arbitrary, Gen};
use serde_json::Value;

const WHITESPACE: &[char] = &[' ', '\t', '\n', '\r'];
const SHORT_ESCAPES: &[&str] = &[r#"\""#, r"\\", r"\/", r"\b", r"\f", r"\n", r"\r", r"\t"];
const HEX: &[u8] = b"0123456789abcdefABCDEF";
const LITERALS: &[&str] = &["true", "false", "null"];
const EXPONENTS: &[char] = &['e', 'E'];
const SIGNS: &[char] = &['+', '-'];

/// A well-formed, ASCII-only document whose root is an object or an array.
///
/// The text starts with optional whitespace and ends with the root's closing
/// delimiter, so every strict prefix of it is malformed.
#[derive(Debug, Clone)]
pub(crate) struct JsonDocument(pub(crate) String);

impl Arbitrary for JsonDocument {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut out = String::new();
        whitespace(g, &mut out);
        let depth = usize::arbitrary(g) % 4;
        if bool::arbitrary(g) {
            object(g, &mut out, depth);
        } else {
            array(g, &mut out, depth);
        }
        Self(out)
    }
}

/// Any `serde_json::Value` with finite numbers, arbitrary Unicode text and up
/// to three levels of nesting.
#[derive(Debug, Clone)]
pub(crate) struct SerdeValue(pub(crate) Value);

impl Arbitrary for SerdeValue {
    fn arbitrary(g: &mut Gen) -> Self {
        fn gen_val(g: &mut Gen, depth: usize) -> Value {
            let kinds = if depth == 0 { 5 } else { 7 };
            match usize::arbitrary(g) % kinds {
                0 => Value::Null,
                1 => Value::Bool(bool::arbitrary(g)),
                2 => Value::from(i64::arbitrary(g)),
                3 => {
                    let mut n = f64::arbitrary(g);
                    while !n.is_finite() {
                        n = f64::arbitrary(g);
                    }
                    Value::from(n)
                }
                4 => Value::String(String::arbitrary(g)),
                5 => Value::Array(
                    (0..usize::arbitrary(g) % 4)
                        .map(|_| gen_val(g, depth - 1))
                        .collect(),
                ),
                _ => Value::Object(
                    (0..usize::arbitrary(g) % 4)
                        .map(|_| (String::arbitrary(g), gen_val(g, depth - 1)))
                        .collect(),
                ),
            }
        }

        let depth = usize::arbitrary(g) % 4;
        Self(gen_val(g, depth))
    }
}

fn pick<'a, T>(g: &mut Gen, items: &'a [T]) -> &'a T {
    g.choose(items).expect("non-empty choice table")
}

fn whitespace(g: &mut Gen, out: &mut String) {
    for _ in 0..usize::arbitrary(g) % 3 {
        out.push(*pick(g, WHITESPACE));
    }
}

fn value(g: &mut Gen, out: &mut String, depth: usize) {
    let kinds = if depth == 0 { 4 } else { 6 };
    match usize::arbitrary(g) % kinds {
        0 => out.push_str(*pick(g, LITERALS)),
        1 => number(g, out),
        2 | 3 => string(g, out),
        4 => array(g, out, depth - 1),
        _ => object(g, out, depth - 1),
    }
}

fn object(g: &mut Gen, out: &mut String, depth: usize) {
    out.push('{');
    whitespace(g, out);
    for i in 0..usize::arbitrary(g) % 4 {
        if i > 0 {
            out.push(',');
            whitespace(g, out);
        }
        string(g, out);
        whitespace(g, out);
        out.push(':');
        whitespace(g, out);
        value(g, out, depth);
        whitespace(g, out);
    }
    out.push('}');
}

fn array(g: &mut Gen, out: &mut String, depth: usize) {
    out.push('[');
    whitespace(g, out);
    for i in 0..usize::arbitrary(g) % 4 {
        if i > 0 {
            out.push(',');
            whitespace(g, out);
        }
        value(g, out, depth);
        whitespace(g, out);
    }
    out.push(']');
}

fn string(g: &mut Gen, out: &mut String) {
    out.push('"');
    for _ in 0..usize::arbitrary(g) % 6 {
        match u8::arbitrary(g) % 4 {
            0 => out.push_str(*pick(g, SHORT_ESCAPES)),
            1 => {
                out.push_str(r"\u");
                for _ in 0..4 {
                    out.push(char::from(*pick(g, HEX)));
                }
            }
            _ => {
                // Printable ASCII except the quote and the backslash.
                let mut c = char::from(b' ' + u8::arbitrary(g) % 95);
                if c == '"' || c == '\\' {
                    c = 'x';
                }
                out.push(c);
            }
        }
    }
    out.push('"');
}

fn number(g: &mut Gen, out: &mut String) {
    if bool::arbitrary(g) {
        out.push('-');
    }
    if u8::arbitrary(g) % 4 == 0 {
        out.push('0');
    } else {
        out.push(char::from(b'1' + u8::arbitrary(g) % 9));
        digits(g, out, 0);
    }
    if bool::arbitrary(g) {
        out.push('.');
        digits(g, out, 1);
    }
    if bool::arbitrary(g) {
        out.push(*pick(g, EXPONENTS));
        if bool::arbitrary(g) {
            out.push(*pick(g, SIGNS));
        }
        digits(g, out, 1);
    }
}

fn digits(g: &mut Gen, out: &mut String, min: usize) {
    for _ in 0..min + usize::arbitrary(g) % 4 {
        out.push(char::from(b'0' + u8::arbitrary(g) % 10));
    }
}
