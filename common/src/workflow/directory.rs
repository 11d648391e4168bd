use log::info;

use super::report_failure;
use crate::api::{ApiError, UsersApi};
use crate::model::user::{UserId, UserRecord};
use crate::notice::Notice;
use crate::requests::UpdateContactRequest;

/// Local copy of the user list, as last fetched.
///
/// Only ever replaced wholesale by a fetch or trimmed by a delete; there is no
/// merging and nothing survives a reload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDirectory {
    records: Vec<UserRecord>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: UserId) -> Option<&UserRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn replace_all(&mut self, records: Vec<UserRecord>) {
        self.records = records;
    }

    /// Takes a fetch outcome: records replace the list, a failure keeps it and
    /// yields the notice to show.
    pub fn apply_fetch(&mut self, result: Result<Vec<UserRecord>, ApiError>) -> Option<Notice> {
        match result {
            Ok(records) => {
                self.replace_all(records);
                None
            }
            Err(err) => Some(report_failure("fetching users", &err)),
        }
    }

    /// Keeps `selected` only while its record is still listed.
    pub fn retain_selection(&self, selected: Option<UserId>) -> Option<UserId> {
        selected.filter(|id| self.get(*id).is_some())
    }

    /// Drops the record with `id` and keeps every other one in order.
    pub fn remove(&mut self, id: UserId) -> Option<UserRecord> {
        let index = self.records.iter().position(|record| record.id == id)?;
        Some(self.records.remove(index))
    }

    /// Mirrors a successful partial update locally. Returns whether `id` was present.
    pub fn apply_contact(&mut self, id: UserId, contact: &UpdateContactRequest) -> bool {
        match self.records.iter_mut().find(|record| record.id == id) {
            Some(record) => {
                contact.apply_to(record);
                true
            }
            None => false,
        }
    }
}

/// Fetches the full record set. No pagination.
pub async fn fetch_users<A>(api: &A) -> Result<Vec<UserRecord>, ApiError>
where
    A: UsersApi + ?Sized,
{
    let records = api.list_users().await?;
    info!("fetched {} users", records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::user::UserId;
    use crate::workflow::testing::{InMemoryUsers, Op};
    use crate::workflow::delete_user;

    #[test]
    fn remove_keeps_other_records_in_order() {
        let mut directory = UserDirectory::new();
        directory.replace_all(vec![
            InMemoryUsers::sample(1),
            InMemoryUsers::sample(2),
            InMemoryUsers::sample(3),
        ]);

        let removed = directory.remove(UserId(2)).unwrap();

        assert_eq!(removed.id, UserId(2));
        let ids: Vec<_> = directory.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![UserId(1), UserId(3)]);
        assert!(directory.remove(UserId(2)).is_none());
    }

    #[test]
    fn apply_contact_touches_only_contact_fields() {
        let mut directory = UserDirectory::new();
        directory.replace_all(vec![InMemoryUsers::sample(1)]);
        let before = directory.get(UserId(1)).cloned().unwrap();

        let changed = directory.apply_contact(
            UserId(1),
            &UpdateContactRequest {
                email_id: "changed@example.com".into(),
                mobile_no: "+33 1 23 45 67 89".into(),
            },
        );

        assert!(changed);
        let after = directory.get(UserId(1)).unwrap();
        assert_eq!(after.email_id, "changed@example.com");
        assert_eq!(after.mobile_no, "+33 1 23 45 67 89");
        assert_eq!(
            UserRecord {
                email_id: before.email_id.clone(),
                mobile_no: before.mobile_no.clone(),
                ..after.clone()
            },
            before
        );
        let missing = UpdateContactRequest {
            email_id: String::new(),
            mobile_no: String::new(),
        };
        assert!(!directory.apply_contact(UserId(9), &missing));
    }

    #[tokio::test]
    async fn failed_fetch_leaves_previous_list() {
        let api = InMemoryUsers::with_records(vec![InMemoryUsers::sample(1)]);
        let mut directory = UserDirectory::new();
        assert_eq!(directory.apply_fetch(fetch_users(&api).await), None);

        api.fail(Op::List);
        let notice = directory.apply_fetch(fetch_users(&api).await);

        assert_eq!(notice, Some(Notice::failure()));
        assert_eq!(directory.len(), 1);
        assert!(directory.get(UserId(1)).is_some());
    }

    #[tokio::test]
    async fn fetch_replaces_the_whole_list() {
        let api = InMemoryUsers::with_records(vec![InMemoryUsers::sample(3)]);
        let mut directory = UserDirectory::new();
        directory.replace_all(vec![InMemoryUsers::sample(1), InMemoryUsers::sample(2)]);

        assert_eq!(directory.apply_fetch(fetch_users(&api).await), None);

        let ids: Vec<_> = directory.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![UserId(3)]);
    }

    #[test]
    fn selection_of_vanished_record_is_dropped() {
        let mut directory = UserDirectory::new();
        directory.replace_all(vec![InMemoryUsers::sample(1), InMemoryUsers::sample(2)]);
        assert_eq!(directory.retain_selection(Some(UserId(2))), Some(UserId(2)));

        directory.replace_all(vec![InMemoryUsers::sample(1)]);

        assert_eq!(directory.retain_selection(Some(UserId(2))), None);
        assert_eq!(directory.retain_selection(None), None);
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_record() {
        let api = InMemoryUsers::with_records(vec![
            InMemoryUsers::sample(1),
            InMemoryUsers::sample(2),
            InMemoryUsers::sample(3),
        ]);
        let mut directory = UserDirectory::new();
        directory.replace_all(fetch_users(&api).await.unwrap());

        delete_user(&api, UserId(2)).await.unwrap();
        directory.remove(UserId(2));

        let remote: Vec<_> = fetch_users(&api).await.unwrap();
        assert_eq!(directory.records(), remote.as_slice());
        assert_eq!(directory.len(), 2);
        assert!(directory.get(UserId(2)).is_none());
    }
}
