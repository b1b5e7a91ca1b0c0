#![no_main]

use libfuzzer_sys::fuzz_target;

// The lock view must stay in bounds: the digest engine zero-fills exactly
// this region of a witness copy.
fuzz_target!(|data: &[u8]| {
    let Ok(lock) = beryl_lockscript::witness_lock(data) else {
        return;
    };
    assert!(lock.end() <= data.len());
    let mut copy = data.to_vec();
    copy[lock.offset..lock.end()].fill(0);
});
