#![no_main]

use libfuzzer_sys::fuzz_target;
use pdfcombine::{ArgumentParser, Invocation, PageRange};

fuzz_target!(|data: &[u8]| {
    let s = std::str::from_utf8(data).unwrap_or("");

    // Any range spec either parses into valid one-indexed pages or errors.
    if let Ok(range) = PageRange::parse(s) {
        assert!(!range.one_indexed().contains(&0));
    }

    // A combine plan always carries at least one operation.
    let tokens: Vec<&str> = s.split_whitespace().collect();
    let parser = ArgumentParser::new().with_default_output("/nonexistent/fuzz/out.pdf");
    if let Ok(Invocation::Combine(plan)) = parser.parse(&tokens) {
        assert!(!plan.operations.is_empty());
    }
});
