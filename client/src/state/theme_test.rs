use super::*;

#[test]
fn default_theme_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn toggled_twice_is_identity() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_ne!(theme.toggled(), theme);
        assert_eq!(theme.toggled().toggled(), theme);
    }
}

#[test]
fn parses_stored_values() {
    assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
    assert_eq!(" light ".parse::<Theme>(), Ok(Theme::Light));
    assert_eq!("sepia".parse::<Theme>(), Err(UnknownTheme("sepia".to_owned())));
}

#[test]
fn display_matches_storage_value() {
    assert_eq!(Theme::Dark.to_string(), "dark");
    assert_eq!(Theme::from_prefers_dark(true), Theme::Dark);
    assert_eq!(Theme::from_prefers_dark(false), Theme::Light);
}
