//! `UsersApi` over `fetch`, using gloo-net.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use wasm_bindgen::JsValue;
use web_sys::FormData;

use common::api::routes::Routes;
use common::api::{ApiError, UsersApi};
use common::model::document::{Document, DocumentKind};
use common::model::user::{UserId, UserRecord};
use common::requests::{CreateUserRequest, CreatedUser, UpdateContactRequest};

#[derive(Debug, Clone, Default)]
pub struct HttpUsersApi {
    routes: Routes,
}

/// Turns transport errors and non-2xx answers into `ApiError`.
async fn check(sent: Result<Response, gloo_net::Error>) -> Result<Response, ApiError> {
    let response = sent.map_err(|e| ApiError::Network(e.to_string()))?;
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status { status, body })
}

fn encode_error(err: gloo_net::Error) -> ApiError {
    ApiError::Encode(err.to_string())
}

fn js_error(value: JsValue) -> ApiError {
    ApiError::Encode(format!("{value:?}"))
}

/// Single-file multipart body. The browser sets the boundary header itself.
fn multipart(kind: DocumentKind, document: &Document) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(js_error)?;
    let mime = Some(document.content_type.as_str()).filter(|m| !m.is_empty());
    let blob: web_sys::Blob =
        gloo_file::Blob::new_with_options(document.bytes.as_slice(), mime).into();
    form.append_with_blob_and_filename(kind.field_name(), &blob, &document.file_name)
        .map_err(js_error)?;
    Ok(form)
}

#[async_trait(?Send)]
impl UsersApi for HttpUsersApi {
    async fn create_user(&self, request: &CreateUserRequest) -> Result<CreatedUser, ApiError> {
        let request = Request::post(&self.routes.create())
            .json(request)
            .map_err(encode_error)?;
        let response = check(request.send().await).await?;
        response
            .json::<CreatedUser>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn upload_document(
        &self,
        id: UserId,
        kind: DocumentKind,
        document: &Document,
    ) -> Result<(), ApiError> {
        let body = multipart(kind, document)?;
        let request = Request::post(&self.routes.upload(id, kind))
            .body(body)
            .map_err(encode_error)?;
        check(request.send().await).await?;
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>, ApiError> {
        let response = check(Request::get(&self.routes.list()).send().await).await?;
        response
            .json::<Vec<UserRecord>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn update_contact(
        &self,
        id: UserId,
        request: &UpdateContactRequest,
    ) -> Result<(), ApiError> {
        let request = Request::put(&self.routes.user(id))
            .json(request)
            .map_err(encode_error)?;
        check(request.send().await).await?;
        Ok(())
    }

    async fn delete_user(&self, id: UserId) -> Result<(), ApiError> {
        check(Request::delete(&self.routes.user(id)).send().await).await?;
        Ok(())
    }
}
