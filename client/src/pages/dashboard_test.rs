use super::*;

#[test]
fn greeting_uses_name() {
    assert_eq!(greeting(Some("Alice")), "Welcome, Alice");
}

#[test]
fn greeting_without_name() {
    assert_eq!(greeting(None), "Welcome");
    assert_eq!(greeting(Some("  ")), "Welcome");
}

#[test]
fn endpoint_card_lists_auth_contract() {
    let paths: Vec<_> = API_ENDPOINTS.iter().map(|e| (e.method, e.path)).collect();
    assert_eq!(paths, vec![("POST", "/register"), ("POST", "/login"), ("GET", "/profile")]);
}

#[test]
fn token_card_shows_stored_token() {
    assert_eq!(token_display(Some("tok_abc".to_owned())), "tok_abc");
}

#[test]
fn token_card_placeholder_when_missing() {
    assert_eq!(token_display(None), "No token found");
    assert_eq!(token_display(Some(String::new())), "No token found");
    assert_eq!(TOKEN_USAGE_HINT, "Authorization: Bearer [your-token]");
}
