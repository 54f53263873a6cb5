#![no_main]

use envsample::{DefaultValue, scan_line};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|line: &str| {
    let Ok(result) = scan_line(line) else {
        return;
    };

    let Some(spec) = result else {
        return;
    };

    // Names are non-empty word runs and appear verbatim in the line
    assert!(!spec.name.is_empty());
    assert!(spec.name.chars().all(|c| c.is_alphanumeric() || c == '_'));
    assert!(line.contains(&spec.name));

    // Scanning is deterministic
    assert_eq!(scan_line(line), Ok(Some(spec.clone())));

    match &spec.default {
        DefaultValue::Absent => assert!(spec.default.template_literal().is_none()),
        DefaultValue::Empty(_) => {
            assert_eq!(spec.default.template_literal().map(|l| l.len()), Some(2));
        }
        DefaultValue::Literal { text, .. } => {
            assert!(!text.is_empty());
            let literal = spec.default.template_literal().expect("literal default");
            assert!(literal.starts_with(['\'', '"']));
        }
    }
});
