use noteful::http::request::ApiRequest;
use noteful::http::response::ApiResponse;
use noteful::http::App;
use notefulapp::api::NotefulApi;
use notefulapp::store::memory::fixtures::StoreFixture;
use notefulapp::store::memory::InMemoryStore;
use notefulapp::store::NoteStore;
use serde_json::{json, Value};

fn seeded_app() -> App<InMemoryStore> {
    App::new(NotefulApi::new(StoreFixture::seeded().store))
}

fn body(resp: &ApiResponse) -> Value {
    resp.json_body().expect("response body should be JSON")
}

#[test]
fn list_returns_all_seed_notes() {
    let mut app = seeded_app();
    let resp = app.handle(&ApiRequest::get("/api/notes"));
    assert_eq!(resp.status, 200);
    assert!(resp
        .header("content-type")
        .unwrap()
        .starts_with("application/json"));
    assert_eq!(body(&resp).as_array().unwrap().len(), 10);
}

#[test]
fn search_filters_by_substring() {
    let mut app = seeded_app();
    let resp = app.handle(&ApiRequest::get("/api/notes?searchTerm=ways"));
    assert_eq!(resp.status, 200);
    let notes = body(&resp);
    let notes = notes.as_array().unwrap();
    assert_eq!(notes.len(), 3);
    for note in notes {
        assert!(note["title"].as_str().unwrap().contains("ways"));
    }
}

#[test]
fn search_without_matches_is_empty_array() {
    let mut app = seeded_app();
    let resp = app.handle(&ApiRequest::get("/api/notes?searchTerm=doesntexistasfaf"));
    assert_eq!(resp.status, 200);
    assert_eq!(body(&resp), json!([]));
}

#[test]
fn get_by_id_returns_note() {
    let mut app = seeded_app();
    let resp = app.handle(&ApiRequest::get("/api/notes/1005"));
    assert_eq!(resp.status, 200);
    let note = body(&resp);
    assert_eq!(note["id"], 1005);
    assert_eq!(note["title"], "10 ways cats can help you live to 100");
    assert!(note["content"].is_string());
}

#[test]
fn get_unknown_id_is_404() {
    let mut app = seeded_app();
    let resp = app.handle(&ApiRequest::get("/api/notes/9999"));
    assert_eq!(resp.status, 404);
    assert_eq!(body(&resp)["message"], "Not Found");
}

#[test]
fn post_creates_note_with_location() {
    let mut app = seeded_app();
    let resp = app.handle(&ApiRequest::post_json(
        "/api/notes",
        &json!({"title": "my title", "content": "my content"}),
    ));
    assert_eq!(resp.status, 201);

    let note = body(&resp);
    assert_eq!(note["title"], "my title");
    assert_eq!(note["content"], "my content");
    let id = note["id"].as_u64().unwrap();
    assert!(!(1000..=1009).contains(&id));
    assert_eq!(resp.header("location"), Some(format!("/api/notes/{id}").as_str()));

    let fetched = app.handle(&ApiRequest::get(&format!("/api/notes/{id}")));
    assert_eq!(fetched.status, 200);
    assert_eq!(body(&fetched), note);
}

#[test]
fn post_without_title_is_400() {
    let mut app = seeded_app();
    let resp = app.handle(&ApiRequest::post_json(
        "/api/notes",
        &json!({"going": "to fail"}),
    ));
    assert_eq!(resp.status, 400);
    assert_eq!(
        body(&resp),
        json!({"message": "Missing `title` in request body"})
    );

    let list = app.handle(&ApiRequest::get("/api/notes"));
    assert_eq!(body(&list).as_array().unwrap().len(), 10);
}

#[test]
fn put_replaces_fields_and_keeps_id() {
    let mut app = seeded_app();
    let resp = app.handle(&ApiRequest::put_json(
        "/api/notes/1003",
        &json!({"title": "What about dogs?!", "content": "woof woof"}),
    ));
    assert_eq!(resp.status, 200);
    assert_eq!(
        body(&resp),
        json!({"id": 1003, "title": "What about dogs?!", "content": "woof woof"})
    );

    let fetched = app.handle(&ApiRequest::get("/api/notes/1003"));
    assert_eq!(body(&fetched)["title"], "What about dogs?!");
}

#[test]
fn put_unparseable_id_is_404() {
    let mut app = seeded_app();
    let resp = app.handle(&ApiRequest::put_json(
        "/api/notes/aintHereYo",
        &json!({"title": "What about dogs?!", "content": "woof woof"}),
    ));
    assert_eq!(resp.status, 404);
}

#[test]
fn put_without_title_is_400() {
    let mut app = seeded_app();
    let before = body(&app.handle(&ApiRequest::get("/api/notes/1007")));

    let resp = app.handle(&ApiRequest::put_json(
        "/api/notes/1007",
        &json!({"content": "woof woof"}),
    ));
    assert_eq!(resp.status, 400);
    assert_eq!(body(&resp)["message"], "Missing `title` in request body");

    let after = body(&app.handle(&ApiRequest::get("/api/notes/1007")));
    assert_eq!(before, after);
}

#[test]
fn delete_is_204_and_idempotent() {
    let mut app = seeded_app();
    let first = app.handle(&ApiRequest::delete("/api/notes/1005"));
    assert_eq!(first.status, 204);
    assert!(first.body.is_empty());

    let second = app.handle(&ApiRequest::delete("/api/notes/1005"));
    assert_eq!(second.status, 204);

    assert_eq!(app.handle(&ApiRequest::get("/api/notes/1005")).status, 404);
    let list = app.handle(&ApiRequest::get("/api/notes"));
    assert_eq!(body(&list).as_array().unwrap().len(), 9);
    assert_eq!(app.api().store().len(), 9);
}

#[test]
fn unknown_path_is_404() {
    let mut app = seeded_app();
    let resp = app.handle(&ApiRequest::get("/DOES/NOT/EXIST"));
    assert_eq!(resp.status, 404);
}

#[test]
fn malformed_json_is_400_with_detail() {
    let mut app = seeded_app();
    let req = ApiRequest::new(
        noteful::http::request::Method::Post,
        "/api/notes",
        b"{not json".to_vec(),
    );
    let resp = app.handle(&req);
    assert_eq!(resp.status, 400);
    let payload = body(&resp);
    assert_eq!(payload["message"], "Malformed JSON in request body");
    assert!(payload["error"].is_string());
}

#[test]
fn created_ids_are_not_reused_after_delete() {
    let mut app = seeded_app();
    let first = body(&app.handle(&ApiRequest::post_json(
        "/api/notes",
        &json!({"title": "one"}),
    )));
    let id = first["id"].as_u64().unwrap();
    app.handle(&ApiRequest::delete(&format!("/api/notes/{id}")));

    let second = body(&app.handle(&ApiRequest::post_json(
        "/api/notes",
        &json!({"title": "two"}),
    )));
    assert!(second["id"].as_u64().unwrap() > id);
    assert_eq!(second["content"], "");
}
