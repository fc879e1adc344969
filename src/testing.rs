pub fn trace_init() {
    let directives = std::env::var("TEST_LOG").unwrap_or_else(|_| "warn".into());

    let _ = tracing_subscriber::fmt()
        .with_env_filter(directives)
        .with_test_writer()
        .try_init();
}
