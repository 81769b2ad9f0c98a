use super::*;

#[test]
fn esc_delay_is_set_once_and_never_overridden() {
    std::env::remove_var(ESC_DELAY_VAR);
    reduce_esc_delay(25);
    assert_eq!(std::env::var(ESC_DELAY_VAR).unwrap(), "25");

    reduce_esc_delay(100);
    assert_eq!(std::env::var(ESC_DELAY_VAR).unwrap(), "25");
}
