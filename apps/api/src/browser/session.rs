//! Dashboard session: the signed-in user's loaded resumes plus the search and
//! template filter applied to them.
//!
//! A session is opened on sign-in and consumed on sign-out. Every write goes to the
//! store first and is followed by a full reload; the in-memory list is never patched.

use std::sync::Arc;

use tracing::{error, info};
use uuid::Uuid;

use crate::browser::filter::{filter, TemplateFilter};
use crate::models::resume::{ResumeRecord, StoredResume};
use crate::models::user::CurrentUser;
use crate::notify::{Notice, Notifier};
use crate::store::{DocumentStore, StoreError};

pub struct DashboardSession {
    store: Arc<dyn DocumentStore>,
    notifier: Arc<dyn Notifier>,
    user: CurrentUser,
    resumes: Vec<StoredResume>,
    query: String,
    template_filter: TemplateFilter,
}

impl DashboardSession {
    /// Starts a session for `user` and loads their resumes.
    pub async fn open(
        store: Arc<dyn DocumentStore>,
        notifier: Arc<dyn Notifier>,
        user: CurrentUser,
    ) -> Result<Self, StoreError> {
        let mut session = DashboardSession {
            store,
            notifier,
            user,
            resumes: Vec::new(),
            query: String::new(),
            template_filter: TemplateFilter::All,
        };
        session.reload().await?;
        Ok(session)
    }

    pub fn user(&self) -> &CurrentUser {
        &self.user
    }

    /// Every loaded resume, unfiltered, in store order.
    pub fn resumes(&self) -> &[StoredResume] {
        &self.resumes
    }

    pub fn find(&self, id: Uuid) -> Option<&StoredResume> {
        self.resumes.iter().find(|r| r.id == id)
    }

    /// Replaces the loaded list with the store's current contents.
    /// On failure the previous list is kept.
    pub async fn reload(&mut self) -> Result<(), StoreError> {
        match self.store.list(&self.user.id).await {
            Ok(resumes) => {
                self.resumes = resumes;
                Ok(())
            }
            Err(e) => {
                error!("Failed to load resumes for user {}: {e}", self.user.id);
                self.notifier.notify(Notice::error("Failed to load resumes"));
                Err(e)
            }
        }
    }

    /// Creates a resume when `editing` is `None`, otherwise replaces the document with
    /// that id. Returns the id of the saved resume.
    pub async fn save(
        &mut self,
        editing: Option<Uuid>,
        record: &ResumeRecord,
    ) -> Result<Uuid, StoreError> {
        let result = match editing {
            Some(id) => self
                .store
                .update(id, &self.user.id, record)
                .await
                .map(|()| (id, "Resume updated successfully!")),
            None => self
                .store
                .create(record, &self.user.id)
                .await
                .map(|id| (id, "Resume created successfully!")),
        };

        let (id, message) = match result {
            Ok(saved) => saved,
            Err(e) => {
                error!("Failed to save resume for user {}: {e}", self.user.id);
                self.notifier.notify(Notice::error("Failed to save resume"));
                return Err(e);
            }
        };

        info!("Saved resume {id} for user {}", self.user.id);
        self.notifier.notify(Notice::success("Success", message));
        // The write already succeeded; a failed refresh is reported on its own.
        let _ = self.reload().await;
        Ok(id)
    }

    /// Deletes a resume once the caller's confirmation step has accepted.
    /// Returns whether anything was deleted.
    pub async fn delete(&mut self, id: Uuid, confirmed: bool) -> Result<bool, StoreError> {
        if !confirmed {
            return Ok(false);
        }

        if let Err(e) = self.store.delete(id, &self.user.id).await {
            error!("Failed to delete resume {id}: {e}");
            self.notifier.notify(Notice::error("Failed to delete resume"));
            return Err(e);
        }

        info!("Deleted resume {id} for user {}", self.user.id);
        self.notifier
            .notify(Notice::success("Deleted", "Resume has been deleted."));
        let _ = self.reload().await;
        Ok(true)
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_template_filter(&mut self, template_filter: TemplateFilter) {
        self.template_filter = template_filter;
    }

    pub fn is_filtered(&self) -> bool {
        !self.query.is_empty() || self.template_filter.is_active()
    }

    /// The loaded resumes that pass the current query and template filter.
    pub fn visible(&self) -> Vec<StoredResume> {
        filter(&self.resumes, &self.query, self.template_filter)
    }

    pub fn empty_state_hint(&self) -> &'static str {
        if self.is_filtered() {
            "Try adjusting your search or filter"
        } else {
            "Create your first resume to get started"
        }
    }

    pub fn sign_out(self) {
        info!("Closed dashboard session for user {}", self.user.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::Template;
    use crate::notify::{NoticeLevel, RecordingNotifier};
    use crate::store::InMemoryDocumentStore;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};

    /// Delegates to an in-memory store until `fail` is switched on.
    #[derive(Default)]
    struct FlakyStore {
        inner: InMemoryDocumentStore,
        fail: AtomicBool,
    }

    impl FlakyStore {
        fn check(&self) -> Result<(), StoreError> {
            if self.fail.load(Ordering::SeqCst) {
                Err(StoreError::Database(sqlx::Error::PoolTimedOut))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl DocumentStore for FlakyStore {
        async fn list(&self, owner_id: &str) -> Result<Vec<StoredResume>, StoreError> {
            self.check()?;
            self.inner.list(owner_id).await
        }

        async fn get(&self, id: Uuid, owner_id: &str) -> Result<Option<StoredResume>, StoreError> {
            self.check()?;
            self.inner.get(id, owner_id).await
        }

        async fn create(&self, record: &ResumeRecord, owner_id: &str) -> Result<Uuid, StoreError> {
            self.check()?;
            self.inner.create(record, owner_id).await
        }

        async fn update(
            &self,
            id: Uuid,
            owner_id: &str,
            record: &ResumeRecord,
        ) -> Result<(), StoreError> {
            self.check()?;
            self.inner.update(id, owner_id, record).await
        }

        async fn delete(&self, id: Uuid, owner_id: &str) -> Result<(), StoreError> {
            self.check()?;
            self.inner.delete(id, owner_id).await
        }
    }

    fn record(title: &str, skills: &[&str]) -> ResumeRecord {
        ResumeRecord {
            title: title.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    async fn open(
        store: Arc<dyn DocumentStore>,
    ) -> (DashboardSession, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::default());
        let session = DashboardSession::open(store, notifier.clone(), CurrentUser::new("u1"))
            .await
            .unwrap();
        (session, notifier)
    }

    fn messages(notifier: &RecordingNotifier) -> Vec<String> {
        notifier.notices().into_iter().map(|n| n.message).collect()
    }

    #[tokio::test]
    async fn test_open_loads_only_own_resumes() {
        let store = Arc::new(InMemoryDocumentStore::new());
        store.create(&record("Mine", &[]), "u1").await.unwrap();
        store.create(&record("Theirs", &[]), "u2").await.unwrap();

        let (session, _) = open(store).await;
        assert_eq!(session.resumes().len(), 1);
        assert_eq!(session.resumes()[0].record.title, "Mine");
    }

    #[tokio::test]
    async fn test_create_then_update_notifies_and_reloads() {
        let (mut session, notifier) = open(Arc::new(InMemoryDocumentStore::new())).await;

        let id = session.save(None, &record("Draft", &[])).await.unwrap();
        assert_eq!(session.resumes().len(), 1);

        session.save(Some(id), &record("Final", &[])).await.unwrap();
        assert_eq!(session.resumes().len(), 1);
        assert_eq!(session.find(id).unwrap().record.title, "Final");

        assert_eq!(
            messages(&notifier),
            vec!["Resume created successfully!", "Resume updated successfully!"]
        );
    }

    #[tokio::test]
    async fn test_failed_save_keeps_list_and_notifies() {
        let store = Arc::new(FlakyStore::default());
        let (mut session, notifier) = open(store.clone()).await;
        session.save(None, &record("Kept", &[])).await.unwrap();

        store.fail.store(true, Ordering::SeqCst);
        assert!(session.save(None, &record("Lost", &[])).await.is_err());

        assert_eq!(session.resumes().len(), 1);
        assert_eq!(session.resumes()[0].record.title, "Kept");
        let last = notifier.notices().pop().unwrap();
        assert_eq!(last.level, NoticeLevel::Error);
        assert_eq!(last.message, "Failed to save resume");
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_previous_list() {
        let store = Arc::new(FlakyStore::default());
        let (mut session, notifier) = open(store.clone()).await;
        session.save(None, &record("A", &[])).await.unwrap();

        store.fail.store(true, Ordering::SeqCst);
        assert!(session.reload().await.is_err());
        assert_eq!(session.resumes().len(), 1);
        assert_eq!(
            notifier.notices().pop().unwrap().message,
            "Failed to load resumes"
        );
    }

    #[tokio::test]
    async fn test_delete_requires_confirmation() {
        let (mut session, notifier) = open(Arc::new(InMemoryDocumentStore::new())).await;
        let id = session.save(None, &record("A", &[])).await.unwrap();

        assert!(!session.delete(id, false).await.unwrap());
        assert_eq!(session.resumes().len(), 1);

        assert!(session.delete(id, true).await.unwrap());
        assert!(session.resumes().is_empty());
        assert_eq!(
            notifier.notices().pop().unwrap().message,
            "Resume has been deleted."
        );
    }

    #[tokio::test]
    async fn test_delete_missing_resume_notifies_failure() {
        let (mut session, notifier) = open(Arc::new(InMemoryDocumentStore::new())).await;
        let err = session.delete(Uuid::new_v4(), true).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
        assert_eq!(messages(&notifier), vec!["Failed to delete resume"]);
    }

    #[tokio::test]
    async fn test_visible_applies_query_and_template() {
        let (mut session, _) = open(Arc::new(InMemoryDocumentStore::new())).await;
        session.save(None, &record("Dev Resume", &["React"])).await.unwrap();
        let mut creative = record("Art", &["Figma"]);
        creative.template = Template::Creative;
        session.save(None, &creative).await.unwrap();

        assert_eq!(session.visible().len(), 2);
        assert_eq!(
            session.empty_state_hint(),
            "Create your first resume to get started"
        );

        session.set_query("react");
        assert_eq!(session.visible()[0].record.title, "Dev Resume");

        session.set_query("");
        session.set_template_filter(TemplateFilter::Only(Template::Creative));
        assert_eq!(session.visible()[0].record.title, "Art");

        session.set_query("java");
        assert!(session.visible().is_empty());
        assert_eq!(session.empty_state_hint(), "Try adjusting your search or filter");
    }
}
