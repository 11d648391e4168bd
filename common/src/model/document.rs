use std::fmt;

/// A file picked by the operator, read fully into memory before upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl Document {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Lower-cased extension including the leading dot, e.g. `.pdf`.
    pub fn extension(&self) -> Option<String> {
        let (_, ext) = self.file_name.rsplit_once('.')?;
        if ext.is_empty() {
            return None;
        }
        Some(format!(".{}", ext.to_ascii_lowercase()))
    }
}

/// The two identity documents attached to a user after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Passport,
    Photo,
}

impl DocumentKind {
    /// Multipart field name the backend reads the file from.
    pub fn field_name(self) -> &'static str {
        match self {
            DocumentKind::Passport => "file",
            DocumentKind::Photo => "photo",
        }
    }

    /// Last path segment of the upload endpoint.
    pub fn route_suffix(self) -> &'static str {
        match self {
            DocumentKind::Passport => "upload-passport",
            DocumentKind::Photo => "upload-photo",
        }
    }

    /// Extensions accepted by the file input, also used as its `accept` attribute.
    pub fn accepted_extensions(self) -> &'static [&'static str] {
        match self {
            DocumentKind::Passport => &[".pdf"],
            DocumentKind::Photo => &[".jpg", ".jpeg", ".png"],
        }
    }

    pub fn accept_attribute(self) -> String {
        self.accepted_extensions().join(", ")
    }

    pub fn accepts(self, document: &Document) -> bool {
        document
            .extension()
            .is_some_and(|ext| self.accepted_extensions().contains(&ext.as_str()))
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Passport => f.write_str("passport"),
            DocumentKind::Photo => f.write_str("photo"),
        }
    }
}
