use axum::body::Body;
use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use todo_server::{app, ErrorBody, Todo};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn create_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/todos")
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn list_request() -> Request<Body> {
    Request::builder().uri("/api/todos").body(Body::empty()).unwrap()
}

// --- list ---

#[tokio::test]
async fn list_todos_empty() {
    let resp = app().oneshot(list_request()).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(&body_bytes(resp).await[..], b"[]");
}

// --- create ---

#[tokio::test]
async fn create_todo_returns_201() {
    let resp = app()
        .oneshot(create_request(r#"{"title":"buy milk"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body, serde_json::json!({"id": 1, "title": "buy milk"}));
}

#[tokio::test]
async fn create_todo_ignores_description() {
    let resp = app()
        .oneshot(create_request(
            r#"{"title":"buy milk","description":"semi-skimmed"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = body_json(resp).await;
    assert!(body.get("description").is_none());
}

#[tokio::test]
async fn create_todo_empty_title_returns_500() {
    let resp = app()
        .oneshot(create_request(r#"{"title":""}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorBody = body_json(resp).await;
    assert_eq!(body.error, "title is empty");
}

#[tokio::test]
async fn create_todo_missing_title_returns_500() {
    let resp = app().oneshot(create_request("{}")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorBody = body_json(resp).await;
    assert_eq!(body.error, "title is empty");
}

#[tokio::test]
async fn create_todo_null_title_returns_500() {
    let resp = app()
        .oneshot(create_request(r#"{"title":null}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorBody = body_json(resp).await;
    assert_eq!(body.error, "title is empty");
}

#[tokio::test]
async fn create_todo_ignores_content_type() {
    let without_header = Request::builder()
        .method("POST")
        .uri("/api/todos")
        .body(Body::from(r#"{"title":"buy milk"}"#))
        .unwrap();
    let plain_text = Request::builder()
        .method("POST")
        .uri("/api/todos")
        .header(http::header::CONTENT_TYPE, "text/plain")
        .body(Body::from(r#"{"title":"walk dog"}"#))
        .unwrap();

    for (req, title) in [(without_header, "buy milk"), (plain_text, "walk dog")] {
        let resp = app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Todo = body_json(resp).await;
        assert_eq!(created.id, 1);
        assert_eq!(created.title, title);
    }
}

#[tokio::test]
async fn create_todo_wrong_shape_returns_400() {
    let resp = app()
        .oneshot(create_request(r#"{"title":42}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = body_json(resp).await;
    assert!(!body.error.is_empty());
}

// --- full lifecycle ---

#[tokio::test]
async fn malformed_json_leaves_repository_untouched() {
    use tower::Service;

    let mut app = app().into_service();

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(create_request(r#"{"title": "#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = body_json(resp).await;
    assert!(!body.error.is_empty());

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(list_request())
        .await
        .unwrap();
    let todos: Vec<Todo> = body_json(resp).await;
    assert!(todos.is_empty());

    // the rejected request did not consume an id
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(create_request(r#"{"title":"first"}"#))
        .await
        .unwrap();
    let created: Todo = body_json(resp).await;
    assert_eq!(created.id, 1);
}

#[tokio::test]
async fn create_then_list_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();
    let titles = ["buy milk", "walk dog", "write report"];

    for (i, title) in titles.iter().enumerate() {
        let resp = ServiceExt::ready(&mut app)
            .await
            .unwrap()
            .call(create_request(&format!(r#"{{"title":"{title}"}}"#)))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Todo = body_json(resp).await;
        assert_eq!(created.id, i as i64 + 1);
        assert_eq!(created.title, *title);

        if i == 0 {
            // empty title in the middle must not skip an id
            let resp = ServiceExt::ready(&mut app)
                .await
                .unwrap()
                .call(create_request(r#"{"title":""}"#))
                .await
                .unwrap();
            assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(list_request())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let todos: Vec<Todo> = body_json(resp).await;
    let expected: Vec<Todo> = titles
        .iter()
        .enumerate()
        .map(|(i, title)| Todo {
            id: i as i64 + 1,
            title: title.to_string(),
        })
        .collect();
    assert_eq!(todos, expected);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_creates_get_distinct_sequential_ids() {
    let app = app();

    let (a, b) = tokio::join!(
        app.clone().oneshot(create_request(r#"{"title":"alpha"}"#)),
        app.clone().oneshot(create_request(r#"{"title":"beta"}"#)),
    );
    let a: Todo = body_json(a.unwrap()).await;
    let b: Todo = body_json(b.unwrap()).await;

    let mut ids = vec![a.id, b.id];
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2]);

    let todos: Vec<Todo> = body_json(app.oneshot(list_request()).await.unwrap()).await;
    assert_eq!(todos.len(), 2);
}

#[tokio::test]
async fn unknown_route_is_404() {
    let resp = app()
        .oneshot(Request::builder().uri("/todos").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
