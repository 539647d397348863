// Host-side tests for mount ownership and teardown.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod lifecycle {
    include!("../src/lifecycle.rs");
}

use lifecycle::*;
use std::cell::Cell;
use std::rc::Rc;

struct CountingMount {
    teardowns: Rc<Cell<u32>>,
}

impl Teardown for CountingMount {
    fn teardown(self) {
        self.teardowns.set(self.teardowns.get() + 1);
    }
}

fn guard() -> (MountGuard<CountingMount>, Rc<Cell<u32>>) {
    let teardowns = Rc::new(Cell::new(0));
    let g = MountGuard::new(CountingMount {
        teardowns: teardowns.clone(),
    });
    (g, teardowns)
}

#[test]
fn dropping_without_release_tears_down_once() {
    let (g, teardowns) = guard();
    assert!(g.get().is_some());
    drop(g);
    assert_eq!(teardowns.get(), 1);
}

#[test]
fn release_then_drop_does_not_tear_down_twice() {
    let (mut g, teardowns) = guard();
    assert!(g.release());
    assert!(g.is_released());
    assert!(g.get().is_none());
    assert!(!g.release());
    drop(g);
    assert_eq!(teardowns.get(), 1);
}
