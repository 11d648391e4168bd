//! In-memory backend used by the workflow tests. Records every call.

use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::HashSet;

use crate::api::{ApiError, UsersApi};
use crate::model::document::{Document, DocumentKind};
use crate::model::user::{UserId, UserRecord};
use crate::requests::{CreateUserRequest, CreatedUser, UpdateContactRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Create,
    Upload(UserId, DocumentKind),
    List,
    Update(UserId),
    Delete(UserId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Create,
    Upload(DocumentKind),
    List,
    Update,
    Delete,
}

#[derive(Default)]
struct State {
    next_id: i64,
    records: Vec<UserRecord>,
    calls: Vec<Call>,
    failing: HashSet<Op>,
    omit_created_id: bool,
}

#[derive(Default)]
pub struct InMemoryUsers {
    state: RefCell<State>,
}

impl InMemoryUsers {
    pub fn with_records(records: Vec<UserRecord>) -> Self {
        let next_id = records.iter().map(|r| r.id.0).max().unwrap_or(0);
        Self {
            state: RefCell::new(State {
                next_id,
                records,
                ..State::default()
            }),
        }
    }

    pub fn sample(id: i64) -> UserRecord {
        UserRecord {
            id: UserId(id),
            name: format!("User {id}"),
            mobile_no: format!("+971 50 000 00{id:02}"),
            email_id: format!("user{id}@example.com"),
            nationality: "AE".into(),
            date_of_birth: "1990/01/01".into(),
            passport_no: format!("P{id:07}"),
            passport_expiry_date: "2030/12/31".into(),
            passport: Some(format!("/uploads/{id}/passport.pdf")),
            photo: Some(format!("/uploads/{id}/photo.jpg")),
        }
    }

    /// Makes every later call of `op` answer with a 500.
    pub fn fail(&self, op: Op) {
        self.state.borrow_mut().failing.insert(op);
    }

    pub fn omit_created_id(&self) {
        self.state.borrow_mut().omit_created_id = true;
    }

    /// Calls except the listing ones, which tests use to inspect state.
    pub fn calls(&self) -> Vec<Call> {
        self.state
            .borrow()
            .calls
            .iter()
            .filter(|call| **call != Call::List)
            .cloned()
            .collect()
    }

    pub fn records(&self) -> Vec<UserRecord> {
        self.state.borrow().records.clone()
    }

    fn record(&self, call: Call, op: Op) -> Result<(), ApiError> {
        let mut state = self.state.borrow_mut();
        state.calls.push(call);
        if state.failing.contains(&op) {
            return Err(ApiError::Status {
                status: 500,
                body: "Internal Server Error".into(),
            });
        }
        Ok(())
    }
}

fn not_found(id: UserId) -> ApiError {
    ApiError::Status {
        status: 404,
        body: format!("user {id} not found"),
    }
}

#[async_trait(?Send)]
impl UsersApi for InMemoryUsers {
    async fn create_user(&self, request: &CreateUserRequest) -> Result<CreatedUser, ApiError> {
        self.record(Call::Create, Op::Create)?;
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        let id = UserId(state.next_id);
        state.records.push(UserRecord {
            id,
            name: request.name.clone(),
            mobile_no: request.mobile_no.clone(),
            email_id: request.email_id.clone(),
            nationality: request.nationality.clone(),
            date_of_birth: request.date_of_birth.clone(),
            passport_no: request.passport_no.clone(),
            passport_expiry_date: request.passport_expiry_date.clone(),
            passport: None,
            photo: None,
        });
        let id = if state.omit_created_id { None } else { Some(id) };
        Ok(CreatedUser { id })
    }

    async fn upload_document(
        &self,
        id: UserId,
        kind: DocumentKind,
        document: &Document,
    ) -> Result<(), ApiError> {
        self.record(Call::Upload(id, kind), Op::Upload(kind))?;
        let mut state = self.state.borrow_mut();
        let record = state
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| not_found(id))?;
        let path = Some(format!("/uploads/{id}/{}", document.file_name));
        match kind {
            DocumentKind::Passport => record.passport = path,
            DocumentKind::Photo => record.photo = path,
        }
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>, ApiError> {
        self.record(Call::List, Op::List)?;
        Ok(self.state.borrow().records.clone())
    }

    async fn update_contact(
        &self,
        id: UserId,
        request: &UpdateContactRequest,
    ) -> Result<(), ApiError> {
        self.record(Call::Update(id), Op::Update)?;
        let mut state = self.state.borrow_mut();
        let record = state
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| not_found(id))?;
        request.apply_to(record);
        Ok(())
    }

    async fn delete_user(&self, id: UserId) -> Result<(), ApiError> {
        self.record(Call::Delete(id), Op::Delete)?;
        let mut state = self.state.borrow_mut();
        let before = state.records.len();
        state.records.retain(|r| r.id != id);
        if state.records.len() == before {
            return Err(not_found(id));
        }
        Ok(())
    }
}
