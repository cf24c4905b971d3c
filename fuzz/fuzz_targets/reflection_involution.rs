#![no_main]

use libfuzzer_sys::fuzz_target;
use pga3d::fuzzing::{ArbitraryReflection, fuzz_test_reflection_involution};

fuzz_target!(|input: ArbitraryReflection| {
    fuzz_test_reflection_involution(input);
});
