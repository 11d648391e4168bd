use chrono::NaiveDate;
use log::{info, warn};
use thiserror::Error;

use crate::api::{ApiError, UsersApi};
use crate::model::document::DocumentKind;
use crate::model::user::UserId;
use crate::validation::{UserForm, ValidatedUser, ValidationErrors};

/// What to do with a record whose document uploads did not all succeed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RollbackPolicy {
    /// Issue one `DELETE` for the half-created record.
    #[default]
    DeleteRecord,
    /// Leave the record on the backend without its documents.
    Keep,
}

/// Outcome of the compensating delete after a failed upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rollback {
    NotAttempted,
    Deleted,
    Failed(ApiError),
}

#[derive(Debug, Error)]
pub enum CreateUserError {
    #[error("form is invalid: {0}")]
    Invalid(#[from] ValidationErrors),
    #[error("creating the user record failed: {0}")]
    Record(#[source] ApiError),
    #[error("the backend did not return an id for the new user")]
    MissingIdentifier,
    #[error("uploading the {kind} of user {id} failed: {source} (rollback: {rollback:?})")]
    Upload {
        id: UserId,
        kind: DocumentKind,
        source: ApiError,
        rollback: Rollback,
    },
}

/// Validates the create form and, only if it passes, runs [`create_user`].
pub async fn submit_new_user<A>(
    api: &A,
    form: &UserForm,
    today: NaiveDate,
    policy: RollbackPolicy,
) -> Result<UserId, CreateUserError>
where
    A: UsersApi + ?Sized,
{
    let user = form.validate(today)?;
    create_user(api, &user, policy).await
}

/// Creates the record, then uploads the passport, then the photo.
///
/// Each step starts only after the previous one succeeded. The three requests
/// are not atomic: when an upload fails the record already exists, and
/// `policy` decides whether it is deleted again.
pub async fn create_user<A>(
    api: &A,
    user: &ValidatedUser,
    policy: RollbackPolicy,
) -> Result<UserId, CreateUserError>
where
    A: UsersApi + ?Sized,
{
    let created = api
        .create_user(&user.request)
        .await
        .map_err(CreateUserError::Record)?;
    let id = created.id.ok_or(CreateUserError::MissingIdentifier)?;
    info!("created user {id} ({})", user.request.name);

    let uploads = [
        (DocumentKind::Passport, &user.passport),
        (DocumentKind::Photo, &user.photo),
    ];
    for (kind, document) in uploads {
        if let Err(source) = api.upload_document(id, kind, document).await {
            warn!("{kind} upload for user {id} failed: {source}");
            let rollback = roll_back(api, id, policy).await;
            return Err(CreateUserError::Upload {
                id,
                kind,
                source,
                rollback,
            });
        }
        info!("uploaded {kind} for user {id} ({} bytes)", document.bytes.len());
    }

    Ok(id)
}

async fn roll_back<A>(api: &A, id: UserId, policy: RollbackPolicy) -> Rollback
where
    A: UsersApi + ?Sized,
{
    match policy {
        RollbackPolicy::Keep => {
            warn!("user {id} left without its documents");
            Rollback::NotAttempted
        }
        RollbackPolicy::DeleteRecord => match api.delete_user(id).await {
            Ok(()) => {
                info!("deleted incomplete user {id}");
                Rollback::Deleted
            }
            Err(err) => {
                warn!("could not delete incomplete user {id}: {err}");
                Rollback::Failed(err)
            }
        },
    }
}
