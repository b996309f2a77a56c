use core_lib::{
    client::{FormStatus, SubmitOutcome},
    create_app,
    models::{ContactFormData, ContactSubmission},
    AppState, ContactApi, ContactForm, HttpContactApi,
};
use std::net::SocketAddr;

async fn spawn_server() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, create_app(AppState::default()))
            .await
            .unwrap();
    });

    addr
}

#[tokio::test]
async fn test_form_submits_over_http() {
    let addr = spawn_server().await;
    let api = HttpContactApi::new(&format!("http://{}", addr));

    let mut form = ContactForm::from_values(ContactFormData::new(
        "Jo",
        "+447000000000",
        "Golf R",
        "2025-01-10",
    ));

    assert_eq!(form.submit(&api).await, SubmitOutcome::Accepted);
    assert_eq!(
        form.status(),
        Some(&FormStatus::Success(
            "Thanks, we have got your details, we will get back to you soon".to_string()
        ))
    );
    assert_eq!(form.values().name, "");
}

#[tokio::test]
async fn test_server_rejection_is_parsed_from_error_status() {
    let addr = spawn_server().await;
    let api = HttpContactApi::new(&format!("http://{}", addr));

    let submission = ContactSubmission::from(ContactFormData::new("", "+447000000000", "Golf R", "2025-01-10"));
    let response = api.send(&submission).await.unwrap();

    assert!(!response.success);
    assert_eq!(response.message.as_deref(), Some("Please fill all the required fields."));
}

#[tokio::test]
async fn test_unreachable_server_shows_generic_failure() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = HttpContactApi::new(&format!("http://{}", addr));
    let mut form = ContactForm::from_values(ContactFormData::new(
        "Jo",
        "+447000000000",
        "Golf R",
        "2025-01-10",
    ));

    assert_eq!(form.submit(&api).await, SubmitOutcome::Failed);
    assert_eq!(
        form.status(),
        Some(&FormStatus::Error("Something went wrong. Try again later.".to_string()))
    );
    assert_eq!(form.values().name, "Jo");
}
