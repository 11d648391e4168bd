use log::info;
use thiserror::Error;

use crate::api::{ApiError, UsersApi};
use crate::model::user::UserId;
use crate::requests::UpdateContactRequest;
use crate::validation::{ContactForm, ValidationErrors};

#[derive(Debug, Error)]
pub enum EditUserError {
    #[error("form is invalid: {0}")]
    Invalid(#[from] ValidationErrors),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Sends the partial update for `id`: email and mobile number, nothing else.
pub async fn submit_contact<A>(
    api: &A,
    id: UserId,
    form: &ContactForm,
) -> Result<UpdateContactRequest, EditUserError>
where
    A: UsersApi + ?Sized,
{
    let request = form.validate()?;
    api.update_contact(id, &request).await?;
    info!("updated contact details of user {id}");
    Ok(request)
}

/// Deletes `id` on the backend. Irreversible from the client's side.
pub async fn delete_user<A>(api: &A, id: UserId) -> Result<(), ApiError>
where
    A: UsersApi + ?Sized,
{
    api.delete_user(id).await?;
    info!("deleted user {id}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::user::UserRecord;
    use crate::workflow::fetch_users;
    use crate::workflow::testing::{Call, InMemoryUsers, Op};

    fn contact() -> ContactForm {
        ContactForm {
            email: "updated@example.com".into(),
            mobile_no: "+971 55 765 4321".into(),
        }
    }

    #[tokio::test]
    async fn update_changes_only_contact_fields() {
        let api =
            InMemoryUsers::with_records(vec![InMemoryUsers::sample(1), InMemoryUsers::sample(2)]);
        let before = fetch_users(&api).await.unwrap();

        submit_contact(&api, UserId(1), &contact()).await.unwrap();
        let after = fetch_users(&api).await.unwrap();

        assert_eq!(after[0].email_id, "updated@example.com");
        assert_eq!(after[0].mobile_no, "+971 55 765 4321");
        assert_eq!(
            UserRecord {
                email_id: before[0].email_id.clone(),
                mobile_no: before[0].mobile_no.clone(),
                ..after[0].clone()
            },
            before[0]
        );
        assert_eq!(after[1], before[1]);
    }

    #[tokio::test]
    async fn invalid_contact_is_not_sent() {
        let api = InMemoryUsers::with_records(vec![InMemoryUsers::sample(1)]);
        let form = ContactForm {
            email: "broken".into(),
            ..contact()
        };

        let err = submit_contact(&api, UserId(1), &form).await.unwrap_err();

        assert!(matches!(err, EditUserError::Invalid(_)));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn backend_failure_surfaces_as_api_error() {
        let api = InMemoryUsers::with_records(vec![InMemoryUsers::sample(1)]);
        api.fail(Op::Update);

        let err = submit_contact(&api, UserId(1), &contact()).await.unwrap_err();

        assert!(matches!(err, EditUserError::Api(_)));
        assert_eq!(api.calls(), vec![Call::Update(UserId(1))]);
    }

    #[tokio::test]
    async fn deleting_unknown_user_fails() {
        let api = InMemoryUsers::with_records(vec![InMemoryUsers::sample(1)]);

        let err = delete_user(&api, UserId(42)).await.unwrap_err();

        assert!(matches!(err, ApiError::Status { status: 404, .. }));
        assert_eq!(api.records().len(), 1);
    }
}
