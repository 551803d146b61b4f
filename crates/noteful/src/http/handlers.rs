//! Request handlers for the `/api/notes` resource.
//!
//! Each handler is a plain function from request to response. Validation of the
//! body happens here, at the boundary, by deserializing into [`NoteDraft`]; the
//! API facade and store never see raw JSON.

use super::request::ApiRequest;
use super::response::ApiResponse;
use super::router::{Params, Router};
use notefulapp::api::NotefulApi;
use notefulapp::error::Result;
use notefulapp::model::NoteDraft;
use notefulapp::store::NoteStore;

pub const NOTES_PATH: &str = "/api/notes";

/// The full route table for the notes API.
pub fn routes<S: NoteStore>() -> Router<S> {
    Router::new()
        .get("/api/notes", list_notes)
        .get("/api/notes/:id", get_note)
        .post("/api/notes", create_note)
        .put("/api/notes/:id", update_note)
        .delete("/api/notes/:id", delete_note)
}

fn note_id(params: &Params) -> &str {
    params.get("id").unwrap_or_default()
}

pub fn list_notes<S: NoteStore>(
    api: &mut NotefulApi<S>,
    req: &ApiRequest,
    _params: &Params,
) -> Result<ApiResponse> {
    let notes = api.list_notes(req.query_param("searchTerm"))?;
    ApiResponse::ok(&notes)
}

pub fn get_note<S: NoteStore>(
    api: &mut NotefulApi<S>,
    _req: &ApiRequest,
    params: &Params,
) -> Result<ApiResponse> {
    let note = api.get_note(note_id(params))?;
    ApiResponse::ok(&note)
}

pub fn create_note<S: NoteStore>(
    api: &mut NotefulApi<S>,
    req: &ApiRequest,
    _params: &Params,
) -> Result<ApiResponse> {
    let draft: NoteDraft = req.json_body()?;
    let note = api.create_note(draft)?;
    let location = format!("{}/{}", req.path.trim_end_matches('/'), note.id);
    ApiResponse::created(&note, location)
}

pub fn update_note<S: NoteStore>(
    api: &mut NotefulApi<S>,
    req: &ApiRequest,
    params: &Params,
) -> Result<ApiResponse> {
    let draft: NoteDraft = req.json_body()?;
    let note = api.update_note(note_id(params), draft)?;
    ApiResponse::ok(&note)
}

/// Always 204: deleting a note that is already gone is not an error.
pub fn delete_note<S: NoteStore>(
    api: &mut NotefulApi<S>,
    _req: &ApiRequest,
    params: &Params,
) -> Result<ApiResponse> {
    api.delete_note(note_id(params))?;
    Ok(ApiResponse::no_content())
}

#[cfg(test)]
mod tests {
    use super::*;
    use notefulapp::error::NotefulError;
    use notefulapp::model::{Note, NoteId};
    use notefulapp::store::memory::fixtures::StoreFixture;
    use notefulapp::store::memory::InMemoryStore;
    use serde_json::json;

    /// Store whose every operation fails, for exercising the 500 path.
    struct BrokenStore;

    impl NoteStore for BrokenStore {
        fn list(&self, _search_term: Option<&str>) -> Result<Vec<Note>> {
            Err(NotefulError::Store("list unavailable".into()))
        }
        fn get(&self, _id: NoteId) -> Result<Option<Note>> {
            Err(NotefulError::Store("get unavailable".into()))
        }
        fn create(&mut self, _draft: NoteDraft) -> Result<Note> {
            Err(NotefulError::Store("create unavailable".into()))
        }
        fn update(&mut self, _id: NoteId, _draft: NoteDraft) -> Result<Option<Note>> {
            Err(NotefulError::Store("update unavailable".into()))
        }
        fn delete(&mut self, _id: NoteId) -> Result<bool> {
            Err(NotefulError::Store("delete unavailable".into()))
        }
        fn len(&self) -> usize {
            0
        }
    }

    fn dispatch<S: NoteStore>(api: &mut NotefulApi<S>, req: ApiRequest) -> ApiResponse {
        routes::<S>()
            .dispatch(api, &req)
            .expect("request should match a route")
    }

    fn seeded_api() -> NotefulApi<InMemoryStore> {
        NotefulApi::new(StoreFixture::seeded().store)
    }

    #[test]
    fn route_table_has_five_entries() {
        assert_eq!(routes::<InMemoryStore>().len(), 5);
    }

    #[test]
    fn list_without_term_returns_everything() {
        let mut api = seeded_api();
        let resp = dispatch(&mut api, ApiRequest::get(NOTES_PATH));
        assert_eq!(resp.status, 200);
        assert_eq!(resp.json_body().unwrap().as_array().unwrap().len(), 10);
    }

    #[test]
    fn empty_search_term_returns_everything() {
        let mut api = seeded_api();
        let resp = dispatch(&mut api, ApiRequest::get("/api/notes?searchTerm="));
        assert_eq!(resp.json_body().unwrap().as_array().unwrap().len(), 10);
    }

    #[test]
    fn create_location_follows_request_path() {
        let mut api = seeded_api();
        let resp = dispatch(
            &mut api,
            ApiRequest::post_json("/api/notes/", &json!({"title": "t"})),
        );
        assert_eq!(resp.status, 201);
        assert_eq!(resp.header("Location"), Some("/api/notes/1010"));
        assert_eq!(resp.json_body().unwrap()["content"], "");
    }

    #[test]
    fn create_with_empty_title_is_400() {
        let mut api = seeded_api();
        let resp = dispatch(
            &mut api,
            ApiRequest::post_json(NOTES_PATH, &json!({"title": "", "content": "c"})),
        );
        assert_eq!(resp.status, 400);
        assert_eq!(api.store().len(), 10);
    }

    #[test]
    fn create_with_malformed_json_is_400_with_error() {
        let mut api = seeded_api();
        let req = ApiRequest::new(
            crate::http::request::Method::Post,
            NOTES_PATH,
            b"{\"title\": ".to_vec(),
        );
        let resp = dispatch(&mut api, req);
        assert_eq!(resp.status, 400);
        let body = resp.json_body().unwrap();
        assert_eq!(body["message"], "Malformed JSON in request body");
        assert!(body["error"].is_string());
    }

    #[test]
    fn update_missing_title_wins_over_unknown_id() {
        let mut api = seeded_api();
        let resp = dispatch(
            &mut api,
            ApiRequest::put_json("/api/notes/aintHereYo", &json!({"content": "x"})),
        );
        assert_eq!(resp.status, 400);
    }

    #[test]
    fn delete_of_unknown_id_is_still_204() {
        let mut api = seeded_api();
        let resp = dispatch(&mut api, ApiRequest::delete("/api/notes/424242"));
        assert_eq!(resp.status, 204);
        assert_eq!(api.store().len(), 10);
    }

    #[test]
    fn store_failures_become_500() {
        let mut api = NotefulApi::new(BrokenStore);
        for req in [
            ApiRequest::get(NOTES_PATH),
            ApiRequest::get("/api/notes/1"),
            ApiRequest::post_json(NOTES_PATH, &json!({"title": "t"})),
            ApiRequest::put_json("/api/notes/1", &json!({"title": "t"})),
            ApiRequest::delete("/api/notes/1"),
        ] {
            let resp = dispatch(&mut api, req);
            assert_eq!(resp.status, 500);
            let body = resp.json_body().unwrap();
            assert!(body["message"].is_string());
            assert!(body["error"].as_str().unwrap().contains("unavailable"));
        }
    }
}
