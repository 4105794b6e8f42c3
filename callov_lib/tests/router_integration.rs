use callov_lib::options::{client_options, service_options, team_member_options};
use callov_lib::{Action, BatchPolicy, CallovError, Client, PickerOption, Router};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn router_for(server: &MockServer) -> Router<Client> {
    Router::new(Client::with_base_url(&server.uri(), "sk_test_key".to_string()).unwrap())
}

async fn mount_appointment(server: &MockServer, id: &str, status: u16, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/api-appointments/{}", id)))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

fn appointment_items() -> Vec<Value> {
    vec![
        json!({"appointmentId": "apt-1"}),
        json!({"appointmentId": "apt-2"}),
        json!({"appointmentId": "apt-3"}),
    ]
}

// ============================================================================
// Single items
// ============================================================================

#[tokio::test]
async fn client_create_posts_phone_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api-clients"))
        .and(header("Authorization", "Bearer sk_test_key"))
        .and(body_json(json!({"full_name": "Ana Silva", "phone": "(11) 98888-7777"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "c1", "full_name": "Ana Silva"})))
        .expect(1)
        .mount(&server)
        .await;

    let router = router_for(&server);
    let action = Action::parse("client", "create").unwrap();
    let records = router
        .dispatch(
            action,
            &json!({"fullName": "Ana Silva", "additionalFields": {"phone": "(11) 98888-7777"}}),
        )
        .await
        .unwrap();

    assert_eq!(records, vec![json!({"id": "c1", "full_name": "Ana Silva"})]);
}

#[tokio::test]
async fn client_by_phone_keeps_exact_match() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api-clients"))
        .and(query_param("search", "11988887777"))
        .and(query_param("limit", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"id": "c1", "phone": "11988887777"},
                {"id": "c2", "phone": "119888877778"}
            ]
        })))
        .mount(&server)
        .await;

    let router = router_for(&server);
    let action = Action::parse("client", "getByPhone").unwrap();
    let records = router
        .dispatch(action, &json!({"phoneNumber": "(11) 98888-7777"}))
        .await
        .unwrap();

    assert_eq!(records, vec![json!({"id": "c1", "phone": "11988887777"})]);
}

#[tokio::test]
async fn client_by_phone_falls_back_to_search_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api-clients"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"id": "c1", "phone": "+55 11 98888-7777"},
                {"id": "c2", "phone": "5511988887777"}
            ]
        })))
        .mount(&server)
        .await;

    let router = router_for(&server);
    let action = Action::parse("client", "getByPhone").unwrap();
    let records = router
        .dispatch(action, &json!({"phoneNumber": "11988887777"}))
        .await
        .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["id"], "c1");
    assert_eq!(records[1]["id"], "c2");
}

#[tokio::test]
async fn get_all_flattens_data_in_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api-services"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "100"))
        .and(query_param("category", "hair"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "s1"}, {"id": "s2"}, {"id": "s3"}],
            "pagination": {"page": 1, "total": 3}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let router = router_for(&server);
    let action = Action::parse("service", "getAll").unwrap();
    let records = router
        .dispatch(
            action,
            &json!({"returnAll": true, "limit": 5, "filters": {"category": "hair"}}),
        )
        .await
        .unwrap();

    let ids: Vec<&str> = records.iter().filter_map(|r| r["id"].as_str()).collect();
    assert_eq!(ids, vec!["s1", "s2", "s3"]);
}

#[tokio::test]
async fn list_without_data_contributes_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api-team-members"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})))
        .mount(&server)
        .await;

    let router = router_for(&server);
    let action = Action::parse("teamMember", "getAll").unwrap();
    let records = router.dispatch(action, &json!({})).await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn availability_sends_date_only() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api-availability"))
        .and(query_param("team_member_id", "tm-1"))
        .and(query_param("date", "2024-06-15"))
        .and(query_param("duration_minutes", "45"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "date": "2024-06-15",
            "slots": ["09:00", "09:45"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let router = router_for(&server);
    let action = Action::parse("appointment", "getAvailability").unwrap();
    let records = router
        .dispatch(
            action,
            &json!({
                "teamMemberIdAvailability": "tm-1",
                "availabilityDate": "2024-06-15T13:00:00.000Z",
                "durationMinutes": 45
            }),
        )
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["slots"][1], "09:45");
}

#[tokio::test]
async fn appointments_by_client_phone() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api-appointments"))
        .and(query_param("client_phone", "11988887777"))
        .and(query_param("status", "confirmed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "apt-1"}, {"id": "apt-2"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let router = router_for(&server);
    let action = Action::parse("appointment", "getByClientPhone").unwrap();
    let records = router
        .dispatch(
            action,
            &json!({
                "clientPhoneNumber": "(11) 98888-7777",
                "additionalFilters": {"status": "confirmed"}
            }),
        )
        .await
        .unwrap();
    assert_eq!(records.len(), 2);
}

// ============================================================================
// Batch policy
// ============================================================================

#[tokio::test]
async fn continue_on_failure_marks_failed_item() {
    let server = MockServer::start().await;
    mount_appointment(&server, "apt-1", 200, json!({"id": "apt-1"})).await;
    mount_appointment(&server, "apt-2", 404, json!({"error": "Not found"})).await;
    mount_appointment(&server, "apt-3", 200, json!({"id": "apt-3"})).await;

    let router = router_for(&server);
    let action = Action::parse("appointment", "get").unwrap();
    let output = router
        .run_batch(action, &appointment_items(), BatchPolicy::ContinueOnFailure)
        .await
        .unwrap();

    assert_eq!(output.len(), 3);
    assert_eq!(output[0], json!({"id": "apt-1"}));
    let message = output[1]["error"].as_str().unwrap();
    assert!(message.contains("404"));
    assert_eq!(output[2], json!({"id": "apt-3"}));
}

#[tokio::test]
async fn fail_fast_stops_before_next_item() {
    let server = MockServer::start().await;
    mount_appointment(&server, "apt-1", 200, json!({"id": "apt-1"})).await;
    mount_appointment(&server, "apt-2", 500, json!({"error": "boom"})).await;

    Mock::given(method("GET"))
        .and(path("/api-appointments/apt-3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "apt-3"})))
        .expect(0)
        .mount(&server)
        .await;

    let router = router_for(&server);
    let action = Action::parse("appointment", "get").unwrap();
    let err = router
        .run_batch(action, &appointment_items(), BatchPolicy::FailFast)
        .await
        .unwrap_err();

    match err {
        CallovError::BatchItem { index, source } => {
            assert_eq!(index, 1);
            assert!(matches!(
                *source,
                CallovError::Api(callov_lib::callov_api::Error::HttpStatus { status: 500, .. })
            ));
        }
        other => panic!("expected BatchItem, got {:?}", other),
    }
}

#[tokio::test]
async fn validation_failure_is_an_item_error() {
    let server = MockServer::start().await;
    mount_appointment(&server, "apt-1", 200, json!({"id": "apt-1"})).await;

    let router = router_for(&server);
    let action = Action::parse("appointment", "get").unwrap();
    let items = vec![json!({"appointmentId": "apt-1"}), json!({})];
    let output = router
        .run_batch(action, &items, BatchPolicy::ContinueOnFailure)
        .await
        .unwrap();

    assert_eq!(output.len(), 2);
    assert_eq!(
        output[1],
        json!({"error": "Invalid input: missing parameter 'appointmentId'"})
    );
}

#[tokio::test]
async fn list_items_expand_output() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api-clients"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "c1"}, {"id": "c2"}]
        })))
        .mount(&server)
        .await;

    let router = router_for(&server);
    let action = Action::parse("client", "getAll").unwrap();
    let items = vec![json!({"limit": 2}), json!({"limit": 0}), json!({"limit": 2})];
    let output = router
        .run_batch(action, &items, BatchPolicy::ContinueOnFailure)
        .await
        .unwrap();

    assert_eq!(output.len(), 5);
    assert_eq!(output[1], json!({"id": "c2"}));
    assert!(output[2]["error"].as_str().unwrap().contains("limit"));
    assert_eq!(output[3], json!({"id": "c1"}));
}

// ============================================================================
// Option lists
// ============================================================================

#[tokio::test]
async fn client_options_map_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api-clients"))
        .and(query_param("limit", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"id": "c1", "full_name": "Ana Silva", "email": "ana@example.com", "phone": "1199"},
                {"id": "c2", "full_name": "Bruno Lima", "email": "", "phone": "2199"}
            ]
        })))
        .mount(&server)
        .await;

    let router = router_for(&server);
    let options = client_options(router.transport()).await;
    assert_eq!(
        options,
        vec![
            PickerOption {
                name: "Ana Silva".into(),
                value: "c1".into(),
                description: Some("ana@example.com".into()),
            },
            PickerOption {
                name: "Bruno Lima".into(),
                value: "c2".into(),
                description: Some("2199".into()),
            },
        ]
    );
}

#[tokio::test]
async fn team_member_options_request_active_only() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api-team-members"))
        .and(query_param("limit", "100"))
        .and(query_param("is_active", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "tm-1", "full_name": "Carla", "specialty": "Colorist", "email": "c@x.io"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let router = router_for(&server);
    let options = team_member_options(router.transport()).await;
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].description.as_deref(), Some("Colorist"));
}

#[tokio::test]
async fn service_options_describe_duration_and_price() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api-services"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"id": "s1", "name": "Cut", "duration_minutes": 30, "price": "50.00"},
                {"id": "s2", "name": "Consult"}
            ]
        })))
        .mount(&server)
        .await;

    let router = router_for(&server);
    let options = service_options(router.transport()).await;
    assert_eq!(options[0].description.as_deref(), Some("30 min - 50.00"));
    assert_eq!(options[1].description.as_deref(), Some(" min - "));
}

#[tokio::test]
async fn options_degrade_to_empty_on_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api-clients"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    let router = router_for(&server);
    assert!(client_options(router.transport()).await.is_empty());
    assert!(service_options(router.transport()).await.is_empty());
}
