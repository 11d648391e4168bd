//! The backend contract consumed by the client.
//!
//! [`UsersApi`] is implemented over HTTP by the frontend and by an in-memory
//! double in the workflow tests. Routes are built here so both sides agree.

use async_trait::async_trait;
use thiserror::Error;

use crate::model::document::{Document, DocumentKind};
use crate::model::user::{UserId, UserRecord};
use crate::requests::{CreateUserRequest, CreatedUser, UpdateContactRequest};

pub mod routes;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request could not be sent: {0}")]
    Network(String),
    #[error("backend answered {status}: {body}")]
    Status { status: u16, body: String },
    #[error("response could not be decoded: {0}")]
    Decode(String),
    #[error("request could not be encoded: {0}")]
    Encode(String),
}

/// Remote CRUD operations on user records.
///
/// Futures are not `Send`: the browser implementation runs on the single UI
/// thread.
#[async_trait(?Send)]
pub trait UsersApi {
    /// `POST /api/users`
    async fn create_user(&self, request: &CreateUserRequest) -> Result<CreatedUser, ApiError>;

    /// `POST /api/users/{id}/upload-passport` or `.../upload-photo`, multipart.
    async fn upload_document(
        &self,
        id: UserId,
        kind: DocumentKind,
        document: &Document,
    ) -> Result<(), ApiError>;

    /// `GET /api/users/`
    async fn list_users(&self) -> Result<Vec<UserRecord>, ApiError>;

    /// `PUT /api/users/{id}`
    async fn update_contact(
        &self,
        id: UserId,
        request: &UpdateContactRequest,
    ) -> Result<(), ApiError>;

    /// `DELETE /api/users/{id}`
    async fn delete_user(&self, id: UserId) -> Result<(), ApiError>;
}
