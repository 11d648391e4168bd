use common::model::country::DEFAULT_NATIONALITY;
use common::validation::{UserForm, ValidationErrors};
use common::workflow::FileReads;

/// Dial code the mobile input starts with.
const DEFAULT_DIAL_CODE: &str = "+971 ";

pub struct UserFormComponent {
    pub form: UserForm,
    /// Messages from the last submit attempt; cleared once the form passes.
    pub errors: ValidationErrors,
    /// Picked files still being read into memory.
    pub reads: FileReads,
}

impl UserFormComponent {
    pub fn new() -> Self {
        Self {
            form: UserForm {
                nationality: DEFAULT_NATIONALITY.to_string(),
                mobile_no: DEFAULT_DIAL_CODE.to_string(),
                ..UserForm::default()
            },
            errors: ValidationErrors::default(),
            reads: FileReads::new(),
        }
    }
}
