use super::*;

#[test]
fn theme_announcement_names_mode() {
    assert_eq!(theme_announcement(Theme::Dark), "Switched to dark mode");
    assert_eq!(theme_announcement(Theme::Light), "Switched to light mode");
}

#[test]
fn tab_enables_keyboard_navigation() {
    assert!(keyboard_navigation_after_key(false, "Tab"));
    assert!(!keyboard_navigation_after_key(false, "a"));
    assert!(keyboard_navigation_after_key(true, "Escape"));
}

#[test]
fn enter_and_space_activate() {
    assert!(is_activation_key("Enter"));
    assert!(is_activation_key(" "));
    assert!(!is_activation_key("Tab"));
}
