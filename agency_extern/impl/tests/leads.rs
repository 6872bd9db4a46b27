use agency_extern_contracts::leads::{Lead, LeadCreateError, LeadsApiService};
use agency_extern_impl::{
    http::HttpClient,
    leads::{LeadsApiServiceConfig, LeadsApiServiceImpl},
};
use agency_utils::assert_matches;
use httpmock::{Method::POST, MockServer};
use secrecy::SecretString;
use serde_json::json;

#[tokio::test]
async fn create_lead() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/leads")
                .header("authorization", "Bearer leads-token")
                .header("content-type", "application/json")
                .json_body(json!({
                    "name": "Jane Doe",
                    "email": "jane@example.com",
                    "company": null,
                    "website": "https://example.com",
                    "message": "Hello World, how are you?",
                    "sourceDetail": "https://placetostandagency.com/",
                }));
            then.status(201);
        })
        .await;

    let result = setup(&server).create_lead(&lead()).await;

    result.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn error_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/leads");
            then.status(500).body("database unavailable");
        })
        .await;

    let result = setup(&server).create_lead(&lead()).await;

    assert_matches!(
        result,
        Err(LeadCreateError::Status { status: 500, body }) if body == "database unavailable"
    );
}

#[tokio::test]
async fn unreachable() {
    let sut = LeadsApiServiceImpl::new(
        LeadsApiServiceConfig {
            endpoint: "http://127.0.0.1:1/api/leads".parse().unwrap(),
            token: SecretString::from("leads-token"),
        },
        HttpClient::new().unwrap(),
    );

    let result = sut.create_lead(&lead()).await;

    assert_matches!(result, Err(LeadCreateError::Other(_)));
}

fn setup(server: &MockServer) -> LeadsApiServiceImpl {
    LeadsApiServiceImpl::new(
        LeadsApiServiceConfig {
            endpoint: server.url("/api/leads").parse().unwrap(),
            token: SecretString::from("leads-token"),
        },
        HttpClient::new().unwrap(),
    )
}

fn lead() -> Lead {
    Lead {
        name: "Jane Doe".into(),
        email: "jane@example.com".parse().unwrap(),
        company: None,
        website: Some("https://example.com".into()),
        message: Some("Hello World, how are you?".into()),
        source_detail: "https://placetostandagency.com/".into(),
    }
}
