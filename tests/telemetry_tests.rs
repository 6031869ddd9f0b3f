#[cfg(not(feature = "telemetry"))]
#[test]
fn default_tracing_init_is_a_no_op_without_the_feature() {
    assert!(!careboard_rs::telemetry::init_default_tracing());
}
