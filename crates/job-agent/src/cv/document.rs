use mime::Mime;
use serde::Serialize;

/// 10 MiB, as advertised on the upload form.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

const MSWORD: &str = "application/msword";
const DOCX: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// CV formats accepted for analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Pdf,
    Doc,
    Docx,
    Text,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 4] = [
        DocumentKind::Pdf,
        DocumentKind::Doc,
        DocumentKind::Docx,
        DocumentKind::Text,
    ];

    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let (_, extension) = file_name.rsplit_once('.')?;
        match extension.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "doc" => Some(Self::Doc),
            "docx" => Some(Self::Docx),
            "txt" => Some(Self::Text),
            _ => None,
        }
    }

    pub fn from_mime(content_type: &Mime) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.essence() == content_type.essence_str())
    }

    pub const fn extension(self) -> &'static str {
        match self {
            DocumentKind::Pdf => ".pdf",
            DocumentKind::Doc => ".doc",
            DocumentKind::Docx => ".docx",
            DocumentKind::Text => ".txt",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            DocumentKind::Pdf => "PDF",
            DocumentKind::Doc => "DOC",
            DocumentKind::Docx => "DOCX",
            DocumentKind::Text => "TEXT",
        }
    }

    fn essence(self) -> &'static str {
        match self {
            DocumentKind::Pdf => "application/pdf",
            DocumentKind::Doc => MSWORD,
            DocumentKind::Docx => DOCX,
            DocumentKind::Text => "text/plain",
        }
    }

    pub fn mime(self) -> Mime {
        match self {
            DocumentKind::Pdf => mime::APPLICATION_PDF,
            DocumentKind::Text => mime::TEXT_PLAIN,
            DocumentKind::Doc | DocumentKind::Docx => self
                .essence()
                .parse()
                .unwrap_or(mime::APPLICATION_OCTET_STREAM),
        }
    }
}

/// An uploaded CV held in memory for the duration of one analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CvDocument {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl CvDocument {
    pub fn new(file_name: impl Into<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type,
            bytes,
        }
    }

    pub fn size_bytes(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Size in MiB with two decimals, e.g. `"0.25 MB"`.
    pub fn size_label(&self) -> String {
        format!("{:.2} MB", self.size_bytes() as f64 / 1024.0 / 1024.0)
    }

    /// Extension wins; the declared content type is the fallback.
    pub fn kind(&self) -> Option<DocumentKind> {
        DocumentKind::from_file_name(&self.file_name).or_else(|| {
            self.content_type
                .as_deref()
                .and_then(|raw| raw.parse::<Mime>().ok())
                .and_then(|content_type| DocumentKind::from_mime(&content_type))
        })
    }
}

/// Acceptance rules applied before any analysis is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UploadPolicy {
    pub max_bytes: u64,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl UploadPolicy {
    pub fn new(max_bytes: u64) -> Self {
        Self { max_bytes }
    }

    pub fn validate(&self, document: &CvDocument) -> Result<DocumentKind, UploadError> {
        let kind = document
            .kind()
            .ok_or_else(|| UploadError::UnsupportedType {
                file_name: document.file_name.clone(),
            })?;

        if document.bytes.is_empty() {
            return Err(UploadError::Empty {
                file_name: document.file_name.clone(),
            });
        }

        if document.size_bytes() > self.max_bytes {
            return Err(UploadError::TooLarge {
                size_bytes: document.size_bytes(),
                max_bytes: self.max_bytes,
            });
        }

        Ok(kind)
    }

    /// Human-readable summary for the upload form.
    pub fn describe(&self) -> String {
        format!(
            "Supports PDF, DOC, DOCX, and TEXT files (max {}MB)",
            self.max_bytes / (1024 * 1024)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("'{file_name}' is not a PDF, DOC, DOCX, or TXT document")]
    UnsupportedType { file_name: String },
    #[error("'{file_name}' is empty")]
    Empty { file_name: String },
    #[error("document is {size_bytes} bytes, limit is {max_bytes} bytes")]
    TooLarge { size_bytes: u64, max_bytes: u64 },
}
