use thiserror::Error;

/// Result type alias using BcError
pub type Result<T> = std::result::Result<T, BcError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and machine-readable CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BcErrorKind {
    // Input shape
    /// The manifest does not match the bundle schema (missing keys, wrong types, bad dates)
    SchemaViolation,
    /// The manifest is not parseable YAML at all
    InvalidManifest,
    /// No manifest file was found at the bundle root
    ManifestNotFound,
    /// The bundle archive could not be opened or extracted
    InvalidArchive,

    // Normalization contract
    /// A phase or solution cites an index absent from its target collection
    DanglingReference,
    /// A phase date could not be parsed into a canonical instant
    InvalidDate,
    /// A referenced file is missing and is not a UUID placeholder
    FileMissing,

    // Integration/IO
    Io,
    Serialization,

    // Internal
    Internal,
}

impl BcErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            BcErrorKind::SchemaViolation => "ERR_SCHEMA_VIOLATION",
            BcErrorKind::InvalidManifest => "ERR_INVALID_MANIFEST",
            BcErrorKind::ManifestNotFound => "ERR_MANIFEST_NOT_FOUND",
            BcErrorKind::InvalidArchive => "ERR_INVALID_ARCHIVE",
            BcErrorKind::DanglingReference => "ERR_DANGLING_REFERENCE",
            BcErrorKind::InvalidDate => "ERR_INVALID_DATE",
            BcErrorKind::FileMissing => "ERR_FILE_MISSING",
            BcErrorKind::Io => "ERR_IO",
            BcErrorKind::Serialization => "ERR_SERIALIZATION",
            BcErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus optional
/// context (operation, entity, path) for humans.
#[derive(Debug, Clone)]
pub struct BcError {
    kind: BcErrorKind,
    op: Option<String>,
    entity: Option<String>,
    path: Option<String>,
    message: String,
    details: Vec<String>,
}

impl BcError {
    /// Create a new error with the specified kind
    pub fn new(kind: BcErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity: None,
            path: None,
            message: String::new(),
            details: Vec::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity context (e.g. `phase index:2`)
    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    /// Add filesystem path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attach an accumulated list of detail lines (used for schema violations)
    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = details;
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> BcErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity context, if any
    pub fn entity(&self) -> Option<&str> {
        self.entity.as_deref()
    }

    /// Get the path context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the detail lines, if any
    pub fn details(&self) -> &[String] {
        &self.details
    }
}

impl std::fmt::Display for BcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity) = &self.entity {
            write!(f, " (entity: {})", entity)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        for detail in &self.details {
            write!(f, "\n  - {}", detail)?;
        }
        Ok(())
    }
}

impl std::error::Error for BcError {}

// ========== End Error Facility ==========

/// Domain error taxonomy for bundle normalization and comparison
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BundleCheckError {
    /// A phase cites a task index that the bundle does not define
    #[error("Task index {index} on phase {phase} not present in tasks")]
    PhaseTaskMissing { phase: String, index: i64 },

    /// A phase cites a solution index that the bundle does not define
    #[error("Solution index {index} on phase {phase} not present in solutions")]
    PhaseSolutionMissing { phase: String, index: i64 },

    /// A phase date string is not a recognised date or date-time
    #[error("Invalid {field} date on phase {phase}: {value}")]
    InvalidPhaseDate {
        phase: String,
        field: String,
        value: String,
    },

    /// A referenced file does not exist and is not a UUID placeholder
    #[error("Referenced file not found: {path}")]
    FileNotFound { path: String },

    /// A referenced file exists but could not be read
    #[error("Failed to read {path}: {reason}")]
    FileUnreadable { path: String, reason: String },

    /// Serialization failure
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

/// Conversion from BundleCheckError to the structured BcError facility
impl From<BundleCheckError> for BcError {
    fn from(err: BundleCheckError) -> Self {
        let message = err.to_string();
        match err {
            BundleCheckError::PhaseTaskMissing { phase, index } => {
                BcError::new(BcErrorKind::DanglingReference)
                    .with_entity(format!("phase {} task {}", phase, index))
                    .with_message(message)
            }
            BundleCheckError::PhaseSolutionMissing { phase, index } => {
                BcError::new(BcErrorKind::DanglingReference)
                    .with_entity(format!("phase {} solution {}", phase, index))
                    .with_message(message)
            }
            BundleCheckError::InvalidPhaseDate { phase, .. } => {
                BcError::new(BcErrorKind::InvalidDate)
                    .with_entity(format!("phase {}", phase))
                    .with_message(message)
            }
            BundleCheckError::FileNotFound { path } => BcError::new(BcErrorKind::FileMissing)
                .with_path(path)
                .with_message(message),
            BundleCheckError::FileUnreadable { path, .. } => BcError::new(BcErrorKind::Io)
                .with_path(path)
                .with_message(message),
            BundleCheckError::Serialization { .. } => {
                BcError::new(BcErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to BundleCheckError
impl From<serde_json::Error> for BundleCheckError {
    fn from(err: serde_json::Error) -> Self {
        BundleCheckError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for BcError {
    fn from(err: serde_json::Error) -> Self {
        BundleCheckError::from(err).into()
    }
}
