//! In-memory port implementations for request-level tests.
//!
//! Each repository keeps its records in a `Mutex<BTreeMap>` and assigns ids
//! from 1 upwards, mirroring a freshly migrated `SERIAL` column. Call
//! [`InMemoryStore::fail_with`] to make every operation return a connection
//! error carrying the given message. Creates with an unset required column
//! fail with the same NOT NULL message PostgreSQL reports and, like a
//! sequence, still consume an id.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    ActivityPersistenceError, ActivityRepository, PantryPersistenceError, PantryRepository,
    RecipePersistenceError, RecipeRepository, UserPersistenceError, UserRepository,
};
use crate::domain::{
    AccountServiceImpl, Activity, ActivityFields, NewUser, PantryItem, PantryItemChanges,
    PantryItemDraft, Recipe, RecipeChanges, RecipeDraft, RecordId, User,
};
use crate::inbound::http::state::HttpState;

#[derive(Debug)]
struct Table<T> {
    next_id: i32,
    rows: BTreeMap<i32, T>,
    failure: Option<String>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
            failure: None,
        }
    }
}

impl<T> Table<T> {
    fn allocate_id(&mut self) -> RecordId {
        let id = self.next_id;
        self.next_id += 1;
        RecordId::new(id)
    }
}

/// Thread-safe table shared by an in-memory repository.
#[derive(Debug)]
pub struct InMemoryStore<T> {
    table: Mutex<Table<T>>,
}

impl<T> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self {
            table: Mutex::new(Table::default()),
        }
    }
}

impl<T: Clone> InMemoryStore<T> {
    fn lock(&self) -> MutexGuard<'_, Table<T>> {
        // A poisoned lock only means another test thread panicked.
        self.table
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Make every subsequent operation fail with `message`.
    pub fn fail_with(&self, message: impl Into<String>) {
        self.lock().failure = Some(message.into());
    }

    /// Snapshot of the stored rows ordered by id.
    pub fn rows(&self) -> Vec<T> {
        self.lock().rows.values().cloned().collect()
    }

    fn check(&self) -> Result<MutexGuard<'_, Table<T>>, String> {
        let table = self.lock();
        match &table.failure {
            Some(message) => Err(message.clone()),
            None => Ok(table),
        }
    }
}

/// In-memory [`ActivityRepository`].
pub type InMemoryActivityRepository = InMemoryStore<Activity>;

#[async_trait]
impl ActivityRepository for InMemoryStore<Activity> {
    async fn list(&self) -> Result<Vec<Activity>, ActivityPersistenceError> {
        let table = self.check().map_err(ActivityPersistenceError::connection)?;
        Ok(table.rows.values().cloned().collect())
    }

    async fn create(&self, fields: ActivityFields) -> Result<Activity, ActivityPersistenceError> {
        let mut table = self.check().map_err(ActivityPersistenceError::connection)?;
        let id = table.allocate_id();
        let activity = Activity { id, fields };
        table.rows.insert(id.get(), activity.clone());
        Ok(activity)
    }

    async fn update(
        &self,
        id: RecordId,
        patch: ActivityFields,
    ) -> Result<Activity, ActivityPersistenceError> {
        let mut table = self.check().map_err(ActivityPersistenceError::connection)?;
        let activity = table
            .rows
            .get_mut(&id.get())
            .ok_or_else(|| ActivityPersistenceError::not_found(id.get()))?;
        activity.fields.merge(patch);
        Ok(activity.clone())
    }

    async fn delete(&self, id: RecordId) -> Result<(), ActivityPersistenceError> {
        let mut table = self.check().map_err(ActivityPersistenceError::connection)?;
        table
            .rows
            .remove(&id.get())
            .map(drop)
            .ok_or_else(|| ActivityPersistenceError::not_found(id.get()))
    }
}

/// In-memory [`UserRepository`] enforcing unique emails.
pub type InMemoryUserRepository = InMemoryStore<User>;

#[async_trait]
impl UserRepository for InMemoryStore<User> {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserPersistenceError> {
        let table = self.check().map_err(UserPersistenceError::connection)?;
        Ok(table.rows.values().find(|user| user.email == email).cloned())
    }

    async fn create(&self, new_user: NewUser) -> Result<User, UserPersistenceError> {
        let mut table = self.check().map_err(UserPersistenceError::connection)?;
        if table
            .rows
            .values()
            .any(|user| new_user.email.as_deref() == Some(user.email.as_str()))
        {
            return Err(UserPersistenceError::query(
                "duplicate key value violates unique constraint \"users_email_key\"",
            ));
        }
        let id = table.allocate_id();
        let user = new_user
            .into_user(id)
            .map_err(|err| UserPersistenceError::query(err.to_string()))?;
        table.rows.insert(id.get(), user.clone());
        Ok(user)
    }
}

/// In-memory [`RecipeRepository`].
pub type InMemoryRecipeRepository = InMemoryStore<Recipe>;

#[async_trait]
impl RecipeRepository for InMemoryStore<Recipe> {
    async fn list(&self) -> Result<Vec<Recipe>, RecipePersistenceError> {
        let table = self.check().map_err(RecipePersistenceError::connection)?;
        Ok(table.rows.values().cloned().collect())
    }

    async fn create(&self, draft: RecipeDraft) -> Result<Recipe, RecipePersistenceError> {
        let mut table = self.check().map_err(RecipePersistenceError::connection)?;
        let id = table.allocate_id();
        let recipe = draft
            .into_recipe(id)
            .map_err(|err| RecipePersistenceError::query(err.to_string()))?;
        table.rows.insert(id.get(), recipe.clone());
        Ok(recipe)
    }

    async fn update(
        &self,
        id: RecordId,
        changes: RecipeChanges,
    ) -> Result<Recipe, RecipePersistenceError> {
        let mut table = self.check().map_err(RecipePersistenceError::connection)?;
        let recipe = table
            .rows
            .get_mut(&id.get())
            .ok_or_else(|| RecipePersistenceError::not_found(id.get()))?;
        changes.apply_to(recipe);
        Ok(recipe.clone())
    }
}

/// In-memory [`PantryRepository`].
pub type InMemoryPantryRepository = InMemoryStore<PantryItem>;

#[async_trait]
impl PantryRepository for InMemoryStore<PantryItem> {
    async fn list(&self) -> Result<Vec<PantryItem>, PantryPersistenceError> {
        let table = self.check().map_err(PantryPersistenceError::connection)?;
        Ok(table.rows.values().cloned().collect())
    }

    async fn create(&self, draft: PantryItemDraft) -> Result<PantryItem, PantryPersistenceError> {
        let mut table = self.check().map_err(PantryPersistenceError::connection)?;
        let id = table.allocate_id();
        let item = draft
            .into_item(id)
            .map_err(|err| PantryPersistenceError::query(err.to_string()))?;
        table.rows.insert(id.get(), item.clone());
        Ok(item)
    }

    async fn update(
        &self,
        id: RecordId,
        changes: PantryItemChanges,
    ) -> Result<PantryItem, PantryPersistenceError> {
        let mut table = self.check().map_err(PantryPersistenceError::connection)?;
        let item = table
            .rows
            .get_mut(&id.get())
            .ok_or_else(|| PantryPersistenceError::not_found(id.get()))?;
        changes.apply_to(item);
        Ok(item.clone())
    }

    async fn delete(&self, id: RecordId) -> Result<(), PantryPersistenceError> {
        let mut table = self.check().map_err(PantryPersistenceError::connection)?;
        table
            .rows
            .remove(&id.get())
            .map(drop)
            .ok_or_else(|| PantryPersistenceError::not_found(id.get()))
    }
}

/// Handles to the in-memory stores behind an [`HttpState`].
#[derive(Clone, Default)]
pub struct InMemoryBackend {
    pub activities: Arc<InMemoryActivityRepository>,
    pub users: Arc<InMemoryUserRepository>,
    pub recipes: Arc<InMemoryRecipeRepository>,
    pub pantry: Arc<InMemoryPantryRepository>,
}

impl InMemoryBackend {
    /// Empty stores with ids starting at 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// HTTP state wired to these stores, with the real account service.
    pub fn http_state(&self) -> HttpState {
        HttpState {
            activities: self.activities.clone(),
            accounts: Arc::new(AccountServiceImpl::new(self.users.clone())),
            recipes: self.recipes.clone(),
            pantry: self.pantry.clone(),
        }
    }
}
