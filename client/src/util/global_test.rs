use super::*;

#[test]
fn load_time_requires_both_marks() {
    assert_eq!(load_time_ms(1000.0, 1850.0), Some(850.0));
    assert_eq!(load_time_ms(0.0, 1850.0), None);
    assert_eq!(load_time_ms(1000.0, 0.0), None);
}

#[test]
fn load_event_before_navigation_start_is_ignored() {
    assert_eq!(load_time_ms(2000.0, 1500.0), None);
    assert_eq!(load_time_ms(2000.0, 2000.0), Some(0.0));
}

#[test]
fn error_loggers_are_inert_natively() {
    install_error_loggers();
    log_load_time();
}
