use super::*;

#[test]
fn welcome_message_includes_username() {
    assert_eq!(welcome_message("testuser"), "Bem-vindo, testuser!");
}
