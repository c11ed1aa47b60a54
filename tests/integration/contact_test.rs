//! Tests for mailto link composition.

use folio::contact::ContactMessage;
use folio::content::Content;

#[test]
fn link_matches_the_mailto_shape_exactly() {
    let message = ContactMessage {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        subject: String::new(),
        message: "Hello".to_string(),
    };
    assert_eq!(
        message.mailto_link("me@example.dev"),
        "mailto:me@example.dev?subject=Portfolio%20Contact\
         &body=Name%3A%20Ada%0AEmail%3A%20ada%40example.com%0A%0AMessage%3A%0AHello"
    );
}

#[test]
fn explicit_subject_is_used_verbatim_encoded() {
    let message = ContactMessage {
        subject: "Job opening: Rust".to_string(),
        ..ContactMessage::default()
    };
    let link = message.mailto_link("me@example.dev");
    assert!(link.contains("subject=Job%20opening%3A%20Rust"));
}

#[test]
fn builtin_profile_address_composes_a_valid_link() {
    let content = Content::default();
    let link = ContactMessage::default().mailto_link(&content.profile.email);
    assert!(link.starts_with(&format!("mailto:{}?subject=", content.profile.email)));
}
