//! JSON-file gateway
//!
//! Implements [`Gateway`] on top of [`Storage`]. Every mutation is written
//! to disk before it becomes visible in memory, then recorded in the audit
//! log.

use crate::audit::EntityType;
use crate::crypto::{hash_password, verify_password};
use crate::error::{BankError, BankResult};
use crate::models::{
    AccountListing, Atm, BankAccount, NewAccount, NewAtm, NewService, Service, User, UserRecord,
};
use crate::storage::Storage;

use super::{ExportQuery, Gateway};

/// Gateway backed by the local JSON store
pub struct LocalGateway<'a> {
    storage: &'a Storage,
}

impl<'a> LocalGateway<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    fn require_user(&self, login: &str) -> BankResult<User> {
        self.storage
            .users
            .get_by_login(login)?
            .ok_or_else(|| BankError::user_not_found(login))
    }

    /// Audit entries follow a write that already succeeded; losing one is
    /// logged, not reported as a failed operation.
    fn audit(&self, logged: BankResult<()>) {
        if let Err(e) = logged {
            log::warn!("audit entry not written: {}", e);
        }
    }

    fn ensure_account_number_free(&self, number: u64) -> BankResult<()> {
        if self.storage.users.account_number_exists(number)? {
            return Err(BankError::Duplicate {
                entity_type: "Account",
                identifier: number.to_string(),
            });
        }
        Ok(())
    }
}

impl Gateway for LocalGateway<'_> {
    fn authenticate(&self, login: &str, password: &str) -> BankResult<bool> {
        match self.storage.users.get_by_login(login)? {
            Some(user) => {
                let ok = verify_password(password, &user.password_hash)?;
                if ok {
                    log::debug!("{} authenticated as user {}", login, user.id);
                }
                Ok(ok)
            }
            None => Ok(false),
        }
    }

    fn list_accounts(&self, login: &str) -> BankResult<Vec<AccountListing>> {
        Ok(self.require_user(login)?.listings())
    }

    fn pay_service(&self, login: &str, service_id: u64) -> BankResult<()> {
        let service = self
            .storage
            .services
            .get(service_id)?
            .ok_or_else(|| BankError::service_not_found(service_id.to_string()))?;

        let before = self.require_user(login)?;
        let mut user = before.clone();
        let account = user.accounts.first_mut().ok_or_else(|| BankError::NotFound {
            entity_type: "Account",
            identifier: format!("for user {}", login),
        })?;

        if account.balance < service.price {
            return Err(BankError::InsufficientFunds {
                account: account.number,
                needed: service.price,
                available: account.balance,
            });
        }
        account.balance -= service.price;
        let number = account.number;

        self.storage.users.commit(user.clone())?;

        self.audit(self.storage.log_update(
            EntityType::Account,
            number.to_string(),
            Some(user.login.clone()),
            &before.accounts,
            &user.accounts,
            Some(format!("paid service {} ({})", service.id, service.name)),
        ));

        log::info!("{} paid service {} from account {}", login, service.id, number);
        Ok(())
    }

    fn create_user(&self, record: UserRecord) -> BankResult<()> {
        record.validate().map_err(BankError::Validation)?;

        if self.storage.users.login_exists(&record.login)? {
            return Err(BankError::Duplicate {
                entity_type: "User",
                identifier: record.login,
            });
        }
        self.ensure_account_number_free(record.account)?;

        let user = User::new(&record, hash_password(&record.password)?);
        self.storage.users.commit(user.clone())?;

        self.audit(self.storage.log_create(
            EntityType::User,
            user.login.clone(),
            Some(user.name.clone()),
            &user.listings(),
        ));

        log::info!("created user {} ({})", user.login, user.id);
        Ok(())
    }

    fn attach_account(&self, new: NewAccount) -> BankResult<()> {
        let mut user = self.require_user(&new.login)?;
        self.ensure_account_number_free(new.number)?;

        let account = BankAccount {
            number: new.number,
            balance: new.balance,
        };
        user.accounts.push(account.clone());
        let holder = user.login.clone();
        self.storage.users.commit(user)?;

        self.audit(self.storage.log_create(
            EntityType::Account,
            account.number.to_string(),
            Some(holder),
            &account,
        ));
        Ok(())
    }

    fn create_service(&self, new: NewService) -> BankResult<Service> {
        new.validate().map_err(BankError::Validation)?;

        if self.storage.services.name_exists(&new.name)? {
            return Err(BankError::Duplicate {
                entity_type: "Service",
                identifier: new.name,
            });
        }

        let service = self.storage.services.insert(new)?;

        self.audit(self.storage.log_create(
            EntityType::Service,
            service.id.to_string(),
            Some(service.name.clone()),
            &service,
        ));
        Ok(service)
    }

    fn create_atm(&self, new: NewAtm) -> BankResult<Atm> {
        if new.address.trim().is_empty() {
            return Err(BankError::Validation("ATM address cannot be empty".into()));
        }

        let atm = self.storage.atms.insert(new)?;

        self.audit(self.storage.log_create(
            EntityType::Atm,
            atm.id.to_string(),
            Some(atm.address.clone()),
            &atm,
        ));
        Ok(atm)
    }

    fn export_query(&self, query: ExportQuery) -> BankResult<Vec<AccountListing>> {
        log::debug!("running export query {:?}", query);
        match query {
            ExportQuery::Users => Ok(self
                .storage
                .users
                .get_all()?
                .iter()
                .flat_map(User::listings)
                .collect()),
        }
    }

    fn list_atms(&self) -> BankResult<Vec<Atm>> {
        self.storage.atms.get_all()
    }
}
