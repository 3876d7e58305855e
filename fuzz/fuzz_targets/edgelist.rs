#![no_main]

use libfuzzer_sys::fuzz_target;
use modgraphfind::{dot::write_dot, edgelist, NodeSet};

fuzz_target!(|data: &[u8]| {
    let Ok(graph) = edgelist::parse(data) else {
        return;
    };

    // Use the first field of the first line as the root, if any
    let roots: NodeSet = std::str::from_utf8(data)
        .ok()
        .and_then(|s| s.split_whitespace().next())
        .into_iter()
        .collect();

    let sub = graph.reachable_from(&roots);
    let mut out = Vec::new();
    write_dot(&sub, &mut out).expect("writing to a Vec cannot fail");
    write_dot(&graph.transpose(), &mut out).expect("writing to a Vec cannot fail");
});
