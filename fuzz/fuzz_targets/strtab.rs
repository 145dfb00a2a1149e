#![no_main]

use elfscope::elf::StringTable;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(strtab) = StringTable::parse(data) {
        for offset in 0..data.len() {
            let _ = strtab.get(offset);
        }
    }
});
