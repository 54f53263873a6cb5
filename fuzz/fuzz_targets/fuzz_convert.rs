#![no_main]

use arbitrary::Arbitrary;
use envsample::Converter;
use libfuzzer_sys::fuzz_target;

/// Structured input: a sample body plus a dictionary name to try
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    sample: String,
    dict_var: String,
}

fuzz_target!(|input: FuzzInput| {
    let Ok(converter) = Converter::new().dict_var(input.dict_var.clone()) else {
        return;
    };

    let first = converter.convert_str("fuzz.env", &input.sample);
    let second = converter.convert_str("fuzz.env", &input.sample);

    match (first, second) {
        (Ok(a), Ok(b)) => {
            assert_eq!(a, b, "conversion should be deterministic");
            assert!(a.is_empty() || a.ends_with('\n'));

            let specs = converter
                .scan_str("fuzz.env", &input.sample)
                .expect("scan succeeds when conversion does");
            assert_eq!(a.lines().count(), specs.len());
        }
        (Err(_), Err(_)) => {}
        _ => panic!("conversion result should not depend on the run"),
    }
});
