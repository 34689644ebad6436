use super::*;

#[test]
fn accepts_plain_address() {
    assert_eq!(validate_email("user@example.com"), Ok("user@example.com".to_owned()));
}

#[test]
fn trims_surrounding_whitespace() {
    assert_eq!(validate_email("  user@example.com \n"), Ok("user@example.com".to_owned()));
}

#[test]
fn rejects_missing_domain() {
    assert_eq!(validate_email("user@"), Err(EmailError::Malformed));
}

#[test]
fn rejects_missing_local_part() {
    assert_eq!(validate_email("@example.com"), Err(EmailError::Malformed));
}

#[test]
fn rejects_domain_without_dot_and_inner_whitespace() {
    assert!(!is_valid_email("user@localhost"));
    assert!(!is_valid_email("us er@example.com"));
    assert!(!is_valid_email("user@@example.com"));
}

#[test]
fn rejects_empty_and_blank_input() {
    assert_eq!(validate_email(""), Err(EmailError::Empty));
    assert_eq!(validate_email("   "), Err(EmailError::Empty));
}

#[test]
fn enforces_length_bound() {
    let domain = "@example.com";
    let at_limit = format!("{}{domain}", "a".repeat(MAX_EMAIL_LEN - domain.len()));
    assert_eq!(at_limit.len(), MAX_EMAIL_LEN);
    assert!(is_valid_email(&at_limit));

    let over = format!("a{at_limit}");
    assert_eq!(validate_email(&over), Err(EmailError::TooLong));
}

#[test]
fn error_messages_match_form_copy() {
    assert_eq!(EmailError::Empty.to_string(), "Please enter your email address");
    assert_eq!(EmailError::Malformed.to_string(), "Please enter a valid email address");
}
