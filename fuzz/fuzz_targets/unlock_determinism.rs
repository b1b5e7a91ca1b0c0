#![no_main]

use beryl_lockscript::{run_unlock, MemorySource};
use libfuzzer_sys::fuzz_target;

// Whole-driver surface: any fixture must reject or accept identically on
// every run, and never panic.
fuzz_target!(|data: &[u8]| {
    if data.len() < 34 {
        return;
    }
    let mut tx_hash = [0u8; 32];
    tx_hash.copy_from_slice(&data[..32]);

    let rest = &data[34..];
    let cut = (u16::from_le_bytes([data[32], data[33]]) as usize) % (rest.len() + 1);
    let (script, witness) = rest.split_at(cut);

    let source = MemorySource::single_group(
        tx_hash,
        script.to_vec(),
        1,
        vec![witness.to_vec()],
    );
    let first = run_unlock(&source);
    let second = run_unlock(&source);
    if first != second {
        panic!("run_unlock non-deterministic: {first} vs {second}");
    }
});
