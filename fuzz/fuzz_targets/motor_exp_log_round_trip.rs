#![no_main]

use libfuzzer_sys::fuzz_target;
use pga3d::fuzzing::{ArbitraryMotor, fuzz_test_motor_exp_log_round_trip};

fuzz_target!(|input: ArbitraryMotor| {
    fuzz_test_motor_exp_log_round_trip(input);
});
