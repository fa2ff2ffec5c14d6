// ==================== ACCOUNT STORE ====================
// Single point of contact with MongoDB for account documents.
// Injected into handlers as Arc<dyn AccountStore> so tests can swap in
// an in-memory double.

use crate::{
    database::MongoDB,
    models::{Account, WorkspaceState},
};
use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::Collection;
use std::collections::HashMap;
use std::fmt;

pub const ACCOUNTS_COLLECTION: &str = "accounts";

#[derive(Debug)]
pub enum StoreError {
    /// No account document for the given username
    NotFound,
    /// An account document for the username already exists
    AlreadyExists,
    DatabaseError(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound => write!(f, "Account not found"),
            StoreError::AlreadyExists => write!(f, "Account already exists"),
            StoreError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<mongodb::error::Error> for StoreError {
    fn from(e: mongodb::error::Error) -> Self {
        StoreError::DatabaseError(e.to_string())
    }
}

#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Point lookup by username; no side effects
    async fn fetch(&self, username: &str) -> Result<Option<Account>, StoreError>;

    /// Insert a new account; AlreadyExists if the username is taken
    async fn create(&self, account: Account) -> Result<(), StoreError>;

    /// Whole-field overwrite of the workspaces attribute. Callers
    /// read-modify-write the full map; this is NOT a field-level merge.
    async fn replace_workspaces(
        &self,
        username: &str,
        workspaces: &HashMap<String, WorkspaceState>,
    ) -> Result<(), StoreError>;
}

pub struct MongoAccountStore {
    db: MongoDB,
}

impl MongoAccountStore {
    pub fn new(db: MongoDB) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Account> {
        self.db.collection::<Account>(ACCOUNTS_COLLECTION)
    }
}

fn is_duplicate_key(e: &mongodb::error::Error) -> bool {
    matches!(&*e.kind, ErrorKind::Write(WriteFailure::WriteError(we)) if we.code == 11000)
}

#[async_trait]
impl AccountStore for MongoAccountStore {
    async fn fetch(&self, username: &str) -> Result<Option<Account>, StoreError> {
        let account = self
            .collection()
            .find_one(doc! { "username": username })
            .await?;
        Ok(account)
    }

    async fn create(&self, account: Account) -> Result<(), StoreError> {
        // The unique index on username turns concurrent duplicate signups
        // into a duplicate-key error instead of a lost update.
        match self.collection().insert_one(account).await {
            Ok(_) => Ok(()),
            Err(e) if is_duplicate_key(&e) => Err(StoreError::AlreadyExists),
            Err(e) => Err(e.into()),
        }
    }

    async fn replace_workspaces(
        &self,
        username: &str,
        workspaces: &HashMap<String, WorkspaceState>,
    ) -> Result<(), StoreError> {
        let workspaces_bson = mongodb::bson::to_bson(workspaces)
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        let result = self
            .collection()
            .update_one(
                doc! { "username": username },
                doc! { "$set": { "workspaces": workspaces_bson } },
            )
            .await?;

        if result.matched_count == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
pub mod memory {
    //! In-memory AccountStore double for tests

    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MemoryAccountStore {
        accounts: Mutex<HashMap<String, Account>>,
    }

    impl MemoryAccountStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub async fn with_account(account: Account) -> Self {
            let store = Self::new();
            store
                .create(account)
                .await
                .expect("seed account insert failed");
            store
        }
    }

    #[async_trait]
    impl AccountStore for MemoryAccountStore {
        async fn fetch(&self, username: &str) -> Result<Option<Account>, StoreError> {
            let accounts = self.accounts.lock().unwrap();
            Ok(accounts.get(username).cloned())
        }

        async fn create(&self, account: Account) -> Result<(), StoreError> {
            let mut accounts = self.accounts.lock().unwrap();
            if accounts.contains_key(&account.username) {
                return Err(StoreError::AlreadyExists);
            }
            accounts.insert(account.username.clone(), account);
            Ok(())
        }

        async fn replace_workspaces(
            &self,
            username: &str,
            workspaces: &HashMap<String, WorkspaceState>,
        ) -> Result<(), StoreError> {
            let mut accounts = self.accounts.lock().unwrap();
            let account = accounts.get_mut(username).ok_or(StoreError::NotFound)?;
            account.workspaces = workspaces.clone();
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_create_then_fetch() {
            let store = MemoryAccountStore::new();
            store
                .create(Account::new("alice", "pw1", "Alice", "a@x.com"))
                .await
                .unwrap();

            let account = store.fetch("alice").await.unwrap().unwrap();
            assert_eq!(account.username, "alice");
            assert!(account.workspaces.is_empty());
        }

        #[tokio::test]
        async fn test_create_duplicate_fails() {
            let store = MemoryAccountStore::new();
            store
                .create(Account::new("alice", "pw1", "Alice", "a@x.com"))
                .await
                .unwrap();

            let err = store
                .create(Account::new("alice", "pw2", "Alice 2", "a2@x.com"))
                .await
                .unwrap_err();
            assert!(matches!(err, StoreError::AlreadyExists));
        }

        #[tokio::test]
        async fn test_replace_workspaces_unknown_user() {
            let store = MemoryAccountStore::new();
            let err = store
                .replace_workspaces("ghost", &HashMap::new())
                .await
                .unwrap_err();
            assert!(matches!(err, StoreError::NotFound));
        }
    }
}
