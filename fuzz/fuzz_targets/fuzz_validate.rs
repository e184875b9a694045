#![no_main]

use arbitrary::Arbitrary;
use jsonscan::{ScanOptions, Whitespace, validate_with};
use libfuzzer_sys::fuzz_target;
use serde::de::IgnoredAny;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    flags: u8,
    max_depth: u8,
    data: &'a [u8],
}

fn is_json_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

fn validate(input: Input<'_>) {
    let options = ScanOptions {
        max_depth: usize::from(input.max_depth),
        whitespace: if input.flags & 1 != 0 {
            Whitespace::SpaceOnly
        } else {
            Whitespace::Json
        },
        allow_trailing_content: input.flags & 2 != 0,
        allow_scalar_root: input.flags & 4 != 0,
    };

    let ours = validate_with(input.data, &options);
    // Determinism.
    assert_eq!(ours, validate_with(input.data, &options));

    // Only the default grammar is directly comparable to serde_json. Depth
    // errors are skipped below; keeping the limit under serde_json's own
    // recursion limit means an accepted document never hits it.
    let comparable = options
        == ScanOptions {
            max_depth: options.max_depth,
            ..Default::default()
        }
        && options.max_depth < 128
        && input.data.is_ascii();
    if !comparable {
        return;
    }

    let root = input.data.iter().copied().find(|&b| !is_json_whitespace(b));
    let theirs = matches!(root, Some(b'{' | b'['))
        && serde_json::from_slice::<IgnoredAny>(input.data).is_ok();

    match ours {
        Err(err) if err.is_depth_exceeded() => {}
        ours => assert_eq!(
            ours.is_ok(),
            theirs,
            "disagreement on {:?}: {ours:?}",
            input.data.escape_ascii().to_string()
        ),
    }
}

fuzz_target!(|input: Input<'_>| validate(input));
