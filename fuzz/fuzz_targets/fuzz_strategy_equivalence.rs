#![no_main]
use libfuzzer_sys::fuzz_target;
use nanodiff::diff::{diff_with, CollectingSink, DiffLineType, Strategy};

/// Fuzz the engine with arbitrary bytes on both sides.
///
/// The first NUL byte splits the input into expected and actual. Both
/// strategies must agree, and the verdict must match the emitted events.
fuzz_target!(|data: &[u8]| {
    let split = data.iter().position(|&b| b == 0).unwrap_or(data.len());
    let expected = &data[..split];
    let actual = data.get(split + 1..).unwrap_or_default();

    let mut eager = CollectingSink::new();
    let mut lazy = CollectingSink::new();
    let eager_diff = diff_with(Strategy::Eager, expected, actual, &mut eager).unwrap();
    let lazy_diff = diff_with(Strategy::Lazy, expected, actual, &mut lazy).unwrap();

    assert_eq!(eager_diff, lazy_diff);
    assert_eq!(eager.lines(), lazy.lines());
    assert_eq!(
        lazy_diff,
        lazy.lines()
            .iter()
            .any(|l| l.line_type != DiffLineType::Context)
    );
});
