#![no_main]

use libfuzzer_sys::fuzz_target;

// Arbitrary bytes must either fail cleanly or cut an in-bounds args view.
fuzz_target!(|data: &[u8]| {
    let Ok(args) = beryl_lockscript::script_args(data) else {
        return;
    };
    assert!(args.end() <= data.len());
    let _ = args.bytes(data);
});
