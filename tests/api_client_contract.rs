mod common;

use berkas_lib::domain::entities::{
    CaseCategory, CaseDocumentUpdate, CaseListQuery, DocumentStatus, DocumentUpload,
    KlapperQuery, LoginRequest, ProtocolQuery, ProtocolStatus, ScheduleEventInput, TaskStatus,
    TaskUpdate,
};
use berkas_lib::shared::error::NETWORK_ERROR_MESSAGE;
use berkas_lib::{ApiClient, AppError};
use common::mock_server::{MockHttpResponse, drain, join_with_timeout, spawn_route_server};
use reqwest::Client;
use serde_json::json;
use std::time::Duration as StdDuration;

fn client(base_url: &str) -> ApiClient {
    ApiClient::with_client(Client::new(), base_url).expect("api client")
}

fn case_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": "AJB Rumah Jl. Melati",
        "category": "ppat",
        "status": "in_progress",
        "target_date": "2025-02-01",
        "created_at": "2025-01-02T03:04:05Z",
        "updated_at": "2025-01-02T03:04:05Z"
    })
}

#[tokio::test]
async fn login_posts_credentials_without_bearer() {
    let (base_url, rx, handle) = spawn_route_server(
        vec![(
            "POST /api/v1/auth/login",
            MockHttpResponse::json(
                200,
                json!({
                    "token": "jwt-1",
                    "user": { "id": "u-1", "name": "Budi", "email": "budi@kantor.id" }
                }),
            ),
        )],
        1,
    );

    let response = client(&base_url)
        .login(&LoginRequest {
            email: "budi@kantor.id".into(),
            password: "rahasia".into(),
        })
        .await
        .expect("login");

    join_with_timeout(handle, StdDuration::from_secs(5));
    let requests = drain(&rx);
    assert_eq!(response.token, "jwt-1");
    assert!(response.user.active);
    assert!(response.expires_at.is_none());
    assert!(requests[0].authorization.is_none());
    assert_eq!(
        requests[0].json_body(),
        json!({ "email": "budi@kantor.id", "password": "rahasia" })
    );
}

#[tokio::test]
async fn error_field_becomes_error_message() {
    let (base_url, _rx, handle) = spawn_route_server(
        vec![(
            "POST /api/v1/auth/login",
            MockHttpResponse::json(400, json!({ "error": "invalid" })),
        )],
        1,
    );

    let err = client(&base_url)
        .login(&LoginRequest {
            email: "budi@kantor.id".into(),
            password: "x".into(),
        })
        .await
        .unwrap_err();

    join_with_timeout(handle, StdDuration::from_secs(5));
    assert_eq!(err.to_string(), "invalid");
    assert_eq!(err.status(), Some(400));
}

#[tokio::test]
async fn missing_error_field_uses_endpoint_fallback() {
    let (base_url, _rx, handle) = spawn_route_server(
        vec![
            (
                "GET /api/v1/cases/c-1",
                MockHttpResponse::raw(502, "<html>Bad Gateway</html>"),
            ),
            ("DELETE /api/v1/cases/c-2", MockHttpResponse::empty(500)),
        ],
        2,
    );
    let api = client(&base_url);

    let get_err = api.get_case(Some("jwt"), "c-1").await.unwrap_err();
    let delete_err = api.delete_case(Some("jwt"), "c-2").await.unwrap_err();

    join_with_timeout(handle, StdDuration::from_secs(5));
    assert_eq!(get_err.to_string(), "Gagal memuat berkas");
    assert_eq!(delete_err.to_string(), "Gagal menghapus berkas");
}

#[tokio::test]
async fn expired_token_response_is_unauthorized() {
    let (base_url, _rx, handle) = spawn_route_server(
        vec![(
            "GET /api/v1/cases",
            MockHttpResponse::json(401, json!({ "error": "Token tidak valid" })),
        )],
        1,
    );

    let err = client(&base_url)
        .list_cases(Some("stale"), &CaseListQuery::default())
        .await
        .unwrap_err();

    join_with_timeout(handle, StdDuration::from_secs(5));
    assert!(err.is_unauthorized());
    assert_eq!(err.code(), "unauthorized");
    assert_eq!(err.user_message(), "Token tidak valid");
}

#[tokio::test]
async fn list_cases_sends_bearer_and_filters() {
    let (base_url, rx, handle) = spawn_route_server(
        vec![(
            "GET /api/v1/cases",
            MockHttpResponse::json(200, json!([case_json("c-1"), case_json("c-2")])),
        )],
        1,
    );

    let cases = client(&base_url)
        .list_cases(
            Some("jwt-1"),
            &CaseListQuery {
                category: Some(CaseCategory::Ppat),
                search: Some("melati".into()),
                ..Default::default()
            },
        )
        .await
        .expect("cases");

    join_with_timeout(handle, StdDuration::from_secs(5));
    let requests = drain(&rx);
    assert_eq!(cases.len(), 2);
    assert_eq!(requests[0].authorization.as_deref(), Some("Bearer jwt-1"));
    assert_eq!(requests[0].params.get("category").map(String::as_str), Some("ppat"));
    assert_eq!(requests[0].params.get("search").map(String::as_str), Some("melati"));
    assert!(!requests[0].params.contains_key("status"));
}

#[tokio::test]
async fn delete_accepts_empty_success_body() {
    let (base_url, rx, handle) = spawn_route_server(
        vec![("DELETE /api/v1/tasks/t-1", MockHttpResponse::empty(204))],
        1,
    );

    client(&base_url)
        .delete_task(Some("jwt-1"), "t-1")
        .await
        .expect("delete");

    join_with_timeout(handle, StdDuration::from_secs(5));
    assert_eq!(drain(&rx)[0].method, "DELETE");
}

#[tokio::test]
async fn task_update_sends_only_changed_fields() {
    let (base_url, rx, handle) = spawn_route_server(
        vec![(
            "PUT /api/v1/tasks/t-1",
            MockHttpResponse::json(
                200,
                json!({
                    "id": "t-1",
                    "case_id": "c-1",
                    "title": "Cek sertifikat",
                    "status": "done",
                    "order_index": 1,
                    "created_at": "2025-01-02T03:04:05Z",
                    "updated_at": "2025-01-03T03:04:05Z"
                }),
            ),
        )],
        1,
    );

    let task = client(&base_url)
        .update_task(
            Some("jwt-1"),
            "t-1",
            &TaskUpdate {
                status: Some(TaskStatus::Done),
                ..Default::default()
            },
        )
        .await
        .expect("task");

    join_with_timeout(handle, StdDuration::from_secs(5));
    assert_eq!(task.status, TaskStatus::Done);
    assert_eq!(drain(&rx)[0].json_body(), json!({ "status": "done" }));
}

#[tokio::test]
async fn document_verification_and_upload_hit_case_document_routes() {
    let entry = json!({
        "id": "d-1",
        "case_id": "c-1",
        "name": "KTP Penjual",
        "required": true,
        "status": "verified",
        "updated_at": "2025-01-03T03:04:05Z"
    });
    let (base_url, rx, handle) = spawn_route_server(
        vec![
            ("PUT /api/v1/case-documents/d-1", MockHttpResponse::json(200, entry.clone())),
            (
                "POST /api/v1/case-documents/d-1/upload",
                MockHttpResponse::json(200, entry),
            ),
        ],
        2,
    );
    let api = client(&base_url);

    let verified = api
        .update_case_document(
            Some("jwt-1"),
            "d-1",
            &CaseDocumentUpdate {
                status: DocumentStatus::Verified,
                note: None,
            },
        )
        .await
        .expect("verify");
    api.upload_case_document(
        Some("jwt-1"),
        "d-1",
        DocumentUpload {
            file_name: "ktp.pdf".into(),
            mime_type: "application/pdf".into(),
            bytes: b"%PDF-1.4".to_vec(),
        },
    )
    .await
    .expect("upload");

    join_with_timeout(handle, StdDuration::from_secs(5));
    let requests = drain(&rx);
    assert_eq!(verified.status, DocumentStatus::Verified);
    assert_eq!(requests[0].json_body(), json!({ "status": "verified" }));
    let upload = &requests[1];
    assert!(upload
        .content_type
        .as_deref()
        .unwrap_or_default()
        .starts_with("multipart/form-data"));
    assert!(upload.body.contains("name=\"file\""));
    assert!(upload.body.contains("filename=\"ktp.pdf\""));
}

#[tokio::test]
async fn klapper_query_sends_letter() {
    let (base_url, rx, handle) = spawn_route_server(
        vec![("GET /api/v1/klapper", MockHttpResponse::json(200, json!([])))],
        1,
    );

    let entries = client(&base_url)
        .list_klapper_entries(
            Some("jwt-1"),
            &KlapperQuery {
                letter: Some('B'),
                search: None,
            },
        )
        .await
        .expect("klapper");

    join_with_timeout(handle, StdDuration::from_secs(5));
    assert!(entries.is_empty());
    assert_eq!(drain(&rx)[0].params.get("letter").map(String::as_str), Some("B"));
}

#[tokio::test]
async fn unreachable_server_maps_to_network_message() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let err = client(&format!("http://{addr}"))
        .get_case(Some("jwt-1"), "c-1")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Network(_)));
    assert_eq!(err.to_string(), NETWORK_ERROR_MESSAGE);
}

fn task_json(id: &str, order_index: i32) -> serde_json::Value {
    json!({
        "id": id,
        "case_id": "c-1",
        "title": format!("Tahap {order_index}"),
        "status": "todo",
        "order_index": order_index,
        "created_at": "2025-01-02T03:04:05Z",
        "updated_at": "2025-01-02T03:04:05Z"
    })
}

#[tokio::test]
async fn apply_workflow_template_posts_template_id() {
    let (base_url, rx, handle) = spawn_route_server(
        vec![(
            "POST /api/v1/cases/c-1/apply-template",
            MockHttpResponse::json(200, json!([task_json("t-1", 1), task_json("t-2", 2)])),
        )],
        1,
    );

    let tasks = client(&base_url)
        .apply_workflow_template(Some("jwt-1"), "c-1", "wt-1")
        .await
        .expect("tasks");

    join_with_timeout(handle, StdDuration::from_secs(5));
    let requests = drain(&rx);
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[1].order_index, 2);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].json_body(), json!({ "template_id": "wt-1" }));
}

#[tokio::test]
async fn ids_are_percent_encoded_into_one_segment() {
    let (base_url, rx, handle) = spawn_route_server(
        vec![(
            "GET /api/v1/cases/a%2Fb%3Fx=1",
            MockHttpResponse::json(200, case_json("a/b?x=1")),
        )],
        1,
    );

    let case = client(&base_url)
        .get_case(Some("jwt-1"), "a/b?x=1")
        .await
        .expect("case");

    join_with_timeout(handle, StdDuration::from_secs(5));
    let requests = drain(&rx);
    assert_eq!(case.id, "a/b?x=1");
    assert_eq!(requests[0].path, "/api/v1/cases/a%2Fb%3Fx=1");
    assert!(requests[0].params.is_empty());
}

#[tokio::test]
async fn client_search_is_trimmed_and_blank_search_is_omitted() {
    let (base_url, rx, handle) = spawn_route_server(
        vec![("GET /api/v1/clients", MockHttpResponse::json(200, json!([])))],
        2,
    );
    let api = client(&base_url);

    api.list_clients(Some("jwt-1"), Some("  Budi Santoso "))
        .await
        .expect("search");
    api.list_clients(Some("jwt-1"), Some("   "))
        .await
        .expect("blank search");

    join_with_timeout(handle, StdDuration::from_secs(5));
    let requests = drain(&rx);
    assert_eq!(
        requests[0].params.get("search").map(String::as_str),
        Some("Budi Santoso")
    );
    assert!(requests[1].params.is_empty());
}

#[tokio::test]
async fn protocol_query_sends_year_and_status() {
    let (base_url, rx, handle) = spawn_route_server(
        vec![(
            "GET /api/v1/protocol",
            MockHttpResponse::json(
                200,
                json!([{
                    "id": "p-1",
                    "deed_number": "12",
                    "deed_date": "2025-01-10",
                    "title": "Akta Jual Beli",
                    "status": "active"
                }]),
            ),
        )],
        1,
    );

    let entries = client(&base_url)
        .list_protocol_entries(
            Some("jwt-1"),
            &ProtocolQuery {
                year: Some(2025),
                status: Some(ProtocolStatus::Active),
                search: None,
            },
        )
        .await
        .expect("protocol");

    join_with_timeout(handle, StdDuration::from_secs(5));
    let params = &drain(&rx)[0].params;
    assert_eq!(entries[0].status, ProtocolStatus::Active);
    assert_eq!(entries[0].deed_date.to_string(), "2025-01-10");
    assert_eq!(params.get("year").map(String::as_str), Some("2025"));
    assert_eq!(params.get("status").map(String::as_str), Some("active"));
    assert!(!params.contains_key("search"));
}

#[tokio::test]
async fn schedule_update_and_delete_target_event_route() {
    let (base_url, rx, handle) = spawn_route_server(
        vec![
            (
                "PUT /api/v1/schedule-events/e-1",
                MockHttpResponse::json(
                    200,
                    json!({
                        "id": "e-1",
                        "title": "Pengecekan sertifikat",
                        "start_at": "2025-01-10T02:00:00Z",
                        "end_at": "2025-01-10T03:00:00Z",
                        "created_at": "2025-01-09T10:00:00Z"
                    }),
                ),
            ),
            ("DELETE /api/v1/schedule-events/e-1", MockHttpResponse::empty(204)),
        ],
        2,
    );
    let api = client(&base_url);

    let event = api
        .update_schedule_event(
            Some("jwt-1"),
            "e-1",
            &ScheduleEventInput {
                title: "Pengecekan sertifikat".into(),
                description: None,
                case_id: None,
                location: Some("BPN".into()),
                start_at: "2025-01-10T09:00:00+07:00".into(),
                end_at: "2025-01-10T10:00:00+07:00".into(),
                all_day: false,
            },
        )
        .await
        .expect("update");
    api.delete_schedule_event(Some("jwt-1"), "e-1")
        .await
        .expect("delete");

    join_with_timeout(handle, StdDuration::from_secs(5));
    let requests = drain(&rx);
    assert_eq!(event.id, "e-1");
    assert_eq!(
        requests[0].json_body(),
        json!({
            "title": "Pengecekan sertifikat",
            "location": "BPN",
            "start_at": "2025-01-10T09:00:00+07:00",
            "end_at": "2025-01-10T10:00:00+07:00",
            "all_day": false
        })
    );
    assert_eq!(requests[1].method, "DELETE");
    assert_eq!(requests[1].authorization.as_deref(), Some("Bearer jwt-1"));
}

#[tokio::test]
async fn master_data_routes_match_backend_paths() {
    let (base_url, rx, handle) = spawn_route_server(
        vec![
            (
                "GET /api/v1/workflow-templates",
                MockHttpResponse::json(
                    200,
                    json!([{
                        "id": "wt-1",
                        "name": "AJB standar",
                        "category": "ppat",
                        "steps": [{ "title": "Cek sertifikat", "due_in_days": 3 }]
                    }]),
                ),
            ),
            ("DELETE /api/v1/workflow-templates/wt-1", MockHttpResponse::empty(204)),
            (
                "GET /api/v1/jenis-pekerjaan",
                MockHttpResponse::json(
                    200,
                    json!([{ "id": "jp-1", "name": "AJB", "category": "ppat" }]),
                ),
            ),
            ("DELETE /api/v1/jenis-pekerjaan/jp-1", MockHttpResponse::empty(204)),
            (
                "GET /api/v1/users",
                MockHttpResponse::json(
                    200,
                    json!([{ "id": "u-1", "name": "Budi", "email": "budi@kantor.id", "active": false }]),
                ),
            ),
            ("DELETE /api/v1/users/u-1", MockHttpResponse::empty(204)),
            (
                "GET /api/v1/offices",
                MockHttpResponse::json(200, json!([{ "id": "o-1", "name": "Kantor Pusat" }])),
            ),
            (
                "GET /api/v1/roles",
                MockHttpResponse::json(200, json!([{ "id": "r-1", "name": "notaris" }])),
            ),
        ],
        8,
    );
    let api = client(&base_url);

    let templates = api.list_workflow_templates(Some("jwt-1")).await.expect("templates");
    api.delete_workflow_template(Some("jwt-1"), "wt-1")
        .await
        .expect("delete template");
    let jenis = api.list_jenis_pekerjaan(Some("jwt-1")).await.expect("jenis");
    api.delete_jenis_pekerjaan(Some("jwt-1"), "jp-1")
        .await
        .expect("delete jenis");
    let users = api.list_users(Some("jwt-1")).await.expect("users");
    api.delete_user(Some("jwt-1"), "u-1").await.expect("delete user");
    let offices = api.list_offices(Some("jwt-1")).await.expect("offices");
    let roles = api.list_roles(Some("jwt-1")).await.expect("roles");

    join_with_timeout(handle, StdDuration::from_secs(5));
    let requests = drain(&rx);
    assert_eq!(requests.len(), 8);
    assert_eq!(templates[0].steps[0].due_in_days, Some(3));
    assert_eq!(jenis[0].category, CaseCategory::Ppat);
    assert!(!users[0].active);
    assert_eq!(offices[0].name, "Kantor Pusat");
    assert_eq!(roles[0].name, "notaris");
}
