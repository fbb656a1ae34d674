use scalarust_core::Node;

// Shared by several integration test crates; not every crate uses every helper.

/// Initialises `env_logger` once per test binary. Run with `RUST_LOG=trace` to
/// see the engine's traversal and backward-pass logs.
#[allow(dead_code)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Helper to create a leaf node.
#[allow(dead_code)]
pub(crate) fn leaf(value: f64) -> Node {
    Node::new(value)
}
