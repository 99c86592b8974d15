#![no_main]
use libfuzzer_sys::fuzz_target;
use membits::fuzz::{harness, FuzzCase};

fuzz_target!(|data: FuzzCase| { harness(data) });
