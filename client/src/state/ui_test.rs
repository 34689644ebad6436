use super::*;

#[test]
fn ui_state_default_is_light_and_quiet() {
    let state = UiState::default();
    assert_eq!(state.theme, Theme::Light);
    assert!(state.announcement.is_empty());
    assert!(!state.keyboard_navigation);
    assert!(!state.loaded);
}

#[test]
fn newer_announcement_survives_stale_clear() {
    let mut state = UiState::default();
    let first = state.announce("Switched to dark mode");
    let second = state.announce("Successfully joined the waitlist");

    state.clear_announcement(first);
    assert_eq!(state.announcement, "Successfully joined the waitlist");

    state.clear_announcement(second);
    assert!(state.announcement.is_empty());
}

#[test]
fn hidden_page_pauses_animations() {
    let mut state = UiState::default();
    assert_eq!(state.animation_play_state(), "running");
    state.page_hidden = true;
    assert_eq!(state.animation_play_state(), "paused");
}

#[test]
fn theme_event_updates_theme_and_announces() {
    let mut state = UiState::default();
    state.apply_event(&LandingEvent::ThemeChanged { theme: Theme::Dark });
    assert_eq!(state.theme, Theme::Dark);
    assert_eq!(state.announcement, "Switched to dark mode");
}

#[test]
fn countdown_event_marks_completion() {
    let mut state = UiState::default();
    let seq = state.apply_event(&LandingEvent::CountdownComplete { at_ms: 42 });
    assert!(state.countdown_complete);
    assert_eq!(state.announcement, "Launch countdown completed!");

    state.clear_announcement(seq);
    assert!(state.announcement.is_empty());
    assert!(state.countdown_complete);
}

#[test]
fn signup_event_only_announces() {
    let mut state = UiState::default();
    state.apply_event(&LandingEvent::SignupSucceeded { email: "a@b.co".to_owned() });
    assert_eq!(state.announcement, "Successfully joined the waitlist");
    assert_eq!(state.theme, Theme::Light);
}
