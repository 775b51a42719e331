#![no_main]
use catlog::fmt::{Arg, arity, substitute};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Must not panic on any template, whatever the arguments
    let args = [
        Arg::Str("text".to_string()),
        Arg::Int(-42),
        Arg::UInt(u64::MAX),
        Arg::Float(1.5),
        Arg::Bool(true),
    ];
    let _ = substitute(data, &args);
    let _ = substitute(data, &[]);
    let _ = arity(data);
});
