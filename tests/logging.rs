use pacbox::formatter::{frame_count, increment_frame};
use pacbox::logging::setup_logging;
use speculoos::prelude::*;

#[test]
fn test_frame_counter_increments() {
    let before = frame_count();
    increment_frame();
    increment_frame();
    assert_that(&(frame_count() - before)).is_greater_than_or_equal_to(2);
}

#[test]
fn test_setup_logging_is_repeatable() {
    setup_logging();
    setup_logging();
    tracing::info!("logging initialized twice");
}
