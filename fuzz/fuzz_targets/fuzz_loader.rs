#![no_main]
use bookbind::core::crossings::crossing_number;
use bookbind::core::io::{read_embedding, write_embedding};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // The loader must never panic; malformed input is an error value.
    let Ok(graph) = read_embedding(data) else {
        return;
    };

    // Anything that loads must be well-formed enough to count and to
    // round-trip through the writer.
    let cr = crossing_number(&graph);
    assert!(cr >= 0);

    let mut buf = Vec::new();
    write_embedding(&graph, &mut buf).unwrap();
    let again = read_embedding(&buf[..]).expect("own output must be re-readable");
    assert_eq!(graph.edges(), again.edges());
    assert_eq!(crossing_number(&again), cr);
});
