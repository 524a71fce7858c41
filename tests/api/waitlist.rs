//! tests/api/waitlist.rs
use crate::helpers::spawn_app;
use serde_json::json;

#[tokio::test]
async fn subscribe_returns_a_200_for_a_valid_email() {
    // Arrange
    let test_app = spawn_app().await;

    // Act
    let response = test_app.post_waitlist(&json!({ "email": "a@b.com" })).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["totalSubscribers"], json!(1));
}

#[tokio::test]
async fn subscribe_persists_the_new_signup_at_the_tail() {
    // Arrange
    let test_app = spawn_app().await;

    // Act
    test_app
        .post_waitlist(&json!({ "email": "first@example.com" }))
        .await;
    test_app
        .post_waitlist(&json!({ "email": "second@example.com" }))
        .await;

    // Assert
    assert_eq!(
        test_app.stored_emails(),
        vec!["first@example.com".to_string(), "second@example.com".to_string()]
    );
}

#[tokio::test]
async fn subscribe_returns_a_400_for_a_syntactically_invalid_email() {
    // Arrange
    let test_app = spawn_app().await;

    let test_cases = vec![
        ("not-an-email", "no at symbol"),
        ("missing-domain@", "empty domain"),
        ("@missing-subject.com", "empty local part"),
        ("no-dot@domain", "no dot in the domain"),
        ("two@at@signs.com", "two at symbols"),
        ("with spaces@example.com", "whitespace"),
        ("", "empty string"),
    ];

    for (invalid_email, desc) in test_cases {
        // Act
        let response = test_app
            .post_waitlist(&json!({ "email": invalid_email }))
            .await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the email was {}.",
            desc
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["message"], json!("Please enter a valid email address"));
    }

    // No rejected submission must have touched the store.
    assert_eq!(test_app.stored_emails(), Vec::<String>::new());
}

#[tokio::test]
async fn subscribe_returns_a_400_when_the_email_field_is_missing() {
    // Arrange
    let test_app = spawn_app().await;

    // Act
    let response = test_app.post_waitlist(&json!({})).await;

    // Assert
    assert_eq!(400, response.status().as_u16());
    assert_eq!(test_app.stored_emails(), Vec::<String>::new());
}

#[tokio::test]
async fn subscribe_rejects_a_duplicate_email_and_leaves_the_store_unchanged() {
    // Arrange
    let test_app = spawn_app().await;
    test_app.post_waitlist(&json!({ "email": "a@b.com" })).await;

    // Act
    let response = test_app.post_waitlist(&json!({ "email": "a@b.com" })).await;

    // Assert
    assert_eq!(400, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("This email is already on the waitlist!"));
    assert_eq!(test_app.stored_emails(), vec!["a@b.com".to_string()]);
}

#[tokio::test]
async fn deduplication_is_by_exact_string_match() {
    // Arrange
    let test_app = spawn_app().await;
    test_app.post_waitlist(&json!({ "email": "a@b.com" })).await;

    // Act: a case variant is a different entry, not a duplicate.
    let response = test_app.post_waitlist(&json!({ "email": "A@b.com" })).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    assert_eq!(
        test_app.stored_emails(),
        vec!["a@b.com".to_string(), "A@b.com".to_string()]
    );
}

#[tokio::test]
async fn subscribe_reports_the_growing_subscriber_count() {
    // Arrange
    let test_app = spawn_app().await;

    for (i, email) in ["a@b.com", "c@d.com", "e@f.com"].iter().enumerate() {
        // Act
        let response = test_app.post_waitlist(&json!({ "email": email })).await;

        // Assert
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["totalSubscribers"], json!(i + 1));
    }
}
