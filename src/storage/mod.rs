//! Storage layer for bankdesk
//!
//! JSON file storage with atomic writes backing the local gateway.

pub mod atms;
pub mod file_io;
pub mod init;
pub mod services;
pub mod users;

pub use atms::AtmRepository;
pub use file_io::{read_json, write_json_atomic};
pub use init::seed_demo_data;
pub use services::ServiceRepository;
pub use users::UserRepository;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::BankPaths;
use crate::error::{BankError, BankResult};

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    pub users: UserRepository,
    pub services: ServiceRepository,
    pub atms: AtmRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: BankPaths) -> Result<Self, BankError> {
        paths.ensure_directories()?;

        Ok(Self {
            users: UserRepository::new(paths.users_file()),
            services: ServiceRepository::new(paths.services_file()),
            atms: AtmRepository::new(paths.atms_file()),
            audit: AuditLogger::new(paths.audit_log()),
        })
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), BankError> {
        self.users.load()?;
        self.services.load()?;
        self.atms.load()?;
        Ok(())
    }

    /// Record a create operation in the audit log
    pub fn log_create<T: serde::Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> BankResult<()> {
        let entry = AuditEntry::create(entity_type, entity_id, entity_name, entity);
        self.audit.log(&entry)
    }

    /// Record an update operation in the audit log
    pub fn log_update<T: serde::Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        summary: Option<String>,
    ) -> BankResult<()> {
        let entry = AuditEntry::update(entity_type, entity_id, entity_name, before, after, summary);
        self.audit.log(&entry)
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }
}
