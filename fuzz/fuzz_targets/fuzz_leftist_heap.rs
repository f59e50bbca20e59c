#![no_main]

use std::collections::BinaryHeap;

use libfuzzer_sys::fuzz_target;

use meldheap::LeftistHeap;

// Byte-driven op interpreter checked against std's BinaryHeap.
fuzz_target!(|data: &[u8]| {
    let mut heap = LeftistHeap::new();
    let mut model = BinaryHeap::new();
    let mut other = LeftistHeap::new();
    let mut other_model = BinaryHeap::new();

    for chunk in data.chunks(2) {
        let value = i32::from(*chunk.get(1).unwrap_or(&0));
        match chunk[0] % 4 {
            0 => {
                heap.push(value).unwrap();
                model.push(value);
            }
            1 => {
                assert_eq!(heap.pop().ok(), model.pop());
            }
            2 => {
                other.push(value).unwrap();
                other_model.push(value);
            }
            _ => {
                heap.merge(&mut other).unwrap();
                assert!(other.is_empty());
                model.extend(other_model.drain());
            }
        }
        assert_eq!(heap.len(), model.len());
        assert_eq!(heap.peek().ok(), model.peek());
    }

    while let Some(expected) = model.pop() {
        assert_eq!(heap.pop(), Ok(expected));
    }
    assert!(heap.is_empty());
});
