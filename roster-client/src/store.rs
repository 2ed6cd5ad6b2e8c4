//! Collection store - the authoritative local view of the user collection.
//!
//! Owns the record list, the pagination window and the edit session, and is
//! the single mutation entry point for all three. Mutation is confirmed-only:
//! the list changes after the remote resource acknowledges an operation,
//! never speculatively, so a failed call leaves the list exactly as it was.
//!
//! All store methods run on one logical thread (`&mut self`); remote calls
//! are await points, and the session's Submitting variant is the only
//! mutual-exclusion flag needed to keep a second submit out while one is in
//! flight.

use crate::notify::{NoteKind, Notifier};
use crate::resource::{FetchError, UserResource};
use crate::transport::Transport;
use roster_core::{validate, Mode, Pager, Session, SessionError, ValidationErrors};
use roster_types::{Draft, Field, ParseIdError, User, UserId};
use thiserror::Error;

const MSG_LOAD_FAILED: &str = "Failed to fetch users.";
const MSG_ADDED: &str = "User added successfully!";
const MSG_ADD_FAILED: &str = "Failed to add user.";
const MSG_UPDATED: &str = "User updated successfully!";
const MSG_UPDATE_FAILED: &str = "Failed to update user.";
const MSG_DELETED: &str = "User deleted successfully!";
const MSG_DELETE_FAILED: &str = "Failed to delete user.";
const MSG_DUPLICATE_ID: &str = "The entered ID is already in use. Please enter a unique ID.";

/// Why a submit did not commit.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// One or more draft fields failed validation; the session stays
    /// Editing with the errors surfaced.
    #[error("draft failed validation")]
    Validation(ValidationErrors),
    /// The draft id is missing or not a non-negative integer (add only).
    #[error("invalid id: {0:?}")]
    InvalidId(String),
    /// A record with the chosen id already exists (add only).
    #[error("id {0} is already in use")]
    DuplicateId(UserId),
    /// Another submit is still in flight.
    #[error("a submit is already in flight")]
    InFlight,
    /// No draft is open.
    #[error("no draft is open")]
    NotEditing,
    /// The remote call failed; the draft is kept for retry.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// The collection store.
///
/// Generic over the transport behind the resource client and the
/// notification sink, so tests drive it with a mock transport and a
/// recording notifier.
pub struct CollectionStore<T, N> {
    resource: UserResource<T>,
    notifier: N,
    users: Vec<User>,
    pager: Pager,
    session: Session,
    load_error: Option<String>,
    last_error: Option<String>,
}

impl<T: Transport, N: Notifier> CollectionStore<T, N> {
    /// Create an idle, empty store without fetching.
    pub fn new(resource: UserResource<T>, notifier: N, page_size: usize) -> Self {
        Self {
            resource,
            notifier,
            users: Vec::new(),
            pager: Pager::new(page_size),
            session: Session::new(),
            load_error: None,
            last_error: None,
        }
    }

    /// Create a store and immediately run the initial fetch.
    ///
    /// On failure the collection stays empty and [`load_error`](Self::load_error)
    /// is set for display; there is no automatic retry.
    pub async fn open(resource: UserResource<T>, notifier: N, page_size: usize) -> Self {
        let mut store = Self::new(resource, notifier, page_size);
        store.refresh().await;
        store
    }

    /// Fetch the full remote list, replacing local records on success.
    ///
    /// On failure the records already held are kept and the load error
    /// snapshot is set.
    pub async fn refresh(&mut self) {
        match self.resource.list().await {
            Ok(users) => {
                tracing::debug!(count = users.len(), "user list loaded");
                self.users = users;
                self.load_error = None;
                self.pager.clamp(self.users.len());
            }
            Err(err) => {
                tracing::warn!(error = %err, "user list fetch failed");
                self.load_error = Some(MSG_LOAD_FAILED.to_string());
            }
        }
    }

    /// Open an empty draft for a new record.
    pub fn start_add(&mut self) {
        self.session.start_add();
    }

    /// Open a draft copied from the record at `id`; silent no-op when the
    /// id is unknown.
    pub fn start_edit(&mut self, id: UserId) {
        if let Some(user) = self.users.iter().find(|user| user.id == id) {
            self.session.start_edit(user);
        }
    }

    /// Discard the draft and close the edit surface.
    pub fn cancel(&mut self) {
        self.session.cancel();
    }

    /// Merge one field value into the open draft; no-op outside Editing.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.session.set_field(field, value);
    }

    /// Validate and commit the open draft.
    ///
    /// Validation failures and id conflicts keep the session in Editing
    /// with the problem surfaced and nothing sent. A confirmed create
    /// appends; a confirmed update replaces the target in place, id
    /// preserved; the current page is untouched either way. A remote
    /// failure restores Editing with the draft intact so the attempt can
    /// be retried.
    pub async fn submit(&mut self) -> Result<(), SubmitError> {
        if self.session.is_submitting() {
            return Err(SubmitError::InFlight);
        }
        let Some(draft) = self.session.draft() else {
            return Err(SubmitError::NotEditing);
        };

        let errors = validate(draft);
        if !errors.is_empty() {
            self.session.reject(errors.clone());
            return Err(SubmitError::Validation(errors));
        }

        #[derive(Clone, Copy)]
        enum Commit {
            Create(UserId),
            Update(UserId),
        }

        // Adds must carry a parseable, unused id. Edits keep their target
        // id and skip the check - identity cannot change.
        let commit = match self.session.target() {
            Some(id) => Commit::Update(id),
            None => {
                let id: UserId = draft
                    .id
                    .parse()
                    .map_err(|err: ParseIdError| SubmitError::InvalidId(err.input))?;
                if self.users.iter().any(|user| user.id == id) {
                    self.notifier.notify(NoteKind::Error, MSG_DUPLICATE_ID);
                    return Err(SubmitError::DuplicateId(id));
                }
                Commit::Create(id)
            }
        };

        let (draft, _) = self.session.begin_submit().map_err(|err| match err {
            SessionError::InFlight => SubmitError::InFlight,
            SessionError::NotEditing => SubmitError::NotEditing,
        })?;

        let result = match commit {
            Commit::Create(id) => self.resource.create(&draft, id).await,
            Commit::Update(id) => self.resource.update(id, &draft).await,
        };

        match result {
            Ok(user) => {
                match commit {
                    Commit::Create(_) => self.users.push(user),
                    Commit::Update(id) => {
                        if let Some(slot) = self.users.iter_mut().find(|user| user.id == id) {
                            *slot = user;
                        }
                    }
                }
                let message = match commit {
                    Commit::Create(_) => MSG_ADDED,
                    Commit::Update(_) => MSG_UPDATED,
                };
                self.session.finish();
                self.last_error = None;
                self.notifier.notify(NoteKind::Success, message);
                Ok(())
            }
            Err(err) => {
                let message = match commit {
                    Commit::Create(_) => MSG_ADD_FAILED,
                    Commit::Update(_) => MSG_UPDATE_FAILED,
                };
                tracing::warn!(error = %err, "submit failed");
                self.last_error = Some(message.to_string());
                self.notifier.notify(NoteKind::Error, message);
                self.session.resume();
                Err(SubmitError::Fetch(err))
            }
        }
    }

    /// Delete the record at `id` after remote confirmation.
    ///
    /// Runs in whatever mode the session is in and does not touch the edit
    /// surface. On success the page is re-clamped so the window never
    /// points past the shortened list.
    pub async fn delete(&mut self, id: UserId) -> Result<(), FetchError> {
        match self.resource.remove(id).await {
            Ok(removed) => {
                self.users.retain(|user| user.id != removed);
                self.pager.clamp(self.users.len());
                self.last_error = None;
                self.notifier.notify(NoteKind::Success, MSG_DELETED);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(%id, error = %err, "delete failed");
                self.last_error = Some(MSG_DELETE_FAILED.to_string());
                self.notifier.notify(NoteKind::Error, MSG_DELETE_FAILED);
                Err(err)
            }
        }
    }

    /// Advance one page; no-op on the last page.
    pub fn next_page(&mut self) {
        self.pager.next(self.users.len());
    }

    /// Go back one page; no-op on page 1.
    pub fn previous_page(&mut self) {
        self.pager.previous();
    }

    /// Records visible on the current page, in original order.
    pub fn current_view(&self) -> &[User] {
        &self.users[self.pager.window(self.users.len())]
    }

    /// The full record list, in original order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// The current page (1-based).
    pub fn current_page(&self) -> usize {
        self.pager.current()
    }

    /// Number of pages for the current collection (at least 1).
    pub fn total_pages(&self) -> usize {
        self.pager.total_pages(self.users.len())
    }

    /// The session mode.
    pub fn mode(&self) -> Mode {
        self.session.mode()
    }

    /// The open draft, if any.
    pub fn draft(&self) -> Option<&Draft> {
        self.session.draft()
    }

    /// Field errors from the last rejected submit.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        self.session.errors()
    }

    /// Error from the initial list fetch, if it failed.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Error from the last failed create/update/delete, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{Method, MockTransport, TransportError};
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingNotifier {
        notes: Arc<Mutex<Vec<(NoteKind, String)>>>,
    }

    impl RecordingNotifier {
        fn notes(&self) -> Vec<(NoteKind, String)> {
            self.notes.lock().unwrap().clone()
        }

        fn last(&self) -> Option<(NoteKind, String)> {
            self.notes.lock().unwrap().last().cloned()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, kind: NoteKind, message: &str) {
            self.notes.lock().unwrap().push((kind, message.to_string()));
        }
    }

    fn remote(id: u32, name: &str, email: &str, company: &str) -> Value {
        json!({ "id": id, "name": name, "email": email, "company": { "name": company } })
    }

    fn three_remote_users() -> Value {
        json!([
            remote(1, "Leanne Graham", "leanne@april.biz", "Romaguera"),
            remote(2, "Ervin Howell", "ervin@melissa.tv", "Deckow"),
            remote(3, "Clementine Bauch", "clem@yesenia.net", "Keebler"),
        ])
    }

    async fn store_with(
        users_json: Value,
        page_size: usize,
    ) -> (
        CollectionStore<MockTransport, RecordingNotifier>,
        MockTransport,
        RecordingNotifier,
    ) {
        let transport = MockTransport::new();
        transport.queue_ok(users_json);
        let notifier = RecordingNotifier::default();
        let store = CollectionStore::open(
            UserResource::new(transport.clone()),
            notifier.clone(),
            page_size,
        )
        .await;
        (store, transport, notifier)
    }

    fn fill_draft(store: &mut CollectionStore<MockTransport, RecordingNotifier>, id: &str) {
        store.set_field(Field::Id, id);
        store.set_field(Field::FirstName, "Nora");
        store.set_field(Field::LastName, "Quinn");
        store.set_field(Field::Email, "nora@q.example");
        store.set_field(Field::Department, "Design");
    }

    #[tokio::test]
    async fn open_populates_from_the_remote_list() {
        let (store, transport, _) = store_with(three_remote_users(), 3).await;

        assert_eq!(store.len(), 3);
        assert_eq!(store.users()[0].first_name, "Leanne");
        assert!(store.load_error().is_none());
        assert_eq!(store.mode(), Mode::Idle);

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, Method::Get);
        assert_eq!(sent.path, "/users");
    }

    #[tokio::test]
    async fn open_failure_leaves_an_empty_list_with_a_load_error() {
        let transport = MockTransport::new();
        transport.queue_err(TransportError::Request("connection refused".into()));
        let notifier = RecordingNotifier::default();

        let store =
            CollectionStore::open(UserResource::new(transport), notifier, 3).await;

        assert!(store.is_empty());
        assert_eq!(store.load_error(), Some("Failed to fetch users."));
        assert!(store.current_view().is_empty());
    }

    #[tokio::test]
    async fn refresh_recovers_after_a_failed_load() {
        let transport = MockTransport::new();
        transport.queue_err(TransportError::Status(502));
        let notifier = RecordingNotifier::default();
        let mut store =
            CollectionStore::open(UserResource::new(transport.clone()), notifier, 3).await;
        assert!(store.load_error().is_some());

        transport.queue_ok(three_remote_users());
        store.refresh().await;

        assert_eq!(store.len(), 3);
        assert!(store.load_error().is_none());
    }

    #[tokio::test]
    async fn start_edit_with_unknown_id_is_a_no_op() {
        let (mut store, _, _) = store_with(three_remote_users(), 3).await;

        store.start_edit(UserId::new(99));

        assert_eq!(store.mode(), Mode::Idle);
        assert!(store.draft().is_none());
    }

    #[tokio::test]
    async fn add_submit_appends_the_confirmed_record() {
        let (mut store, transport, notifier) = store_with(three_remote_users(), 3).await;

        store.start_add();
        fill_draft(&mut store, "11");
        transport.queue_ok(json!({ "id": 201 }));

        store.submit().await.unwrap();

        assert_eq!(store.len(), 4);
        let added = &store.users()[3];
        assert_eq!(added.id, UserId::new(11));
        assert_eq!(added.first_name, "Nora");
        assert_eq!(added.department, "Design");
        assert_eq!(store.mode(), Mode::Idle);
        assert!(store.draft().is_none());
        assert_eq!(
            notifier.last(),
            Some((NoteKind::Success, "User added successfully!".to_string()))
        );

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.path, "/users");
    }

    #[tokio::test]
    async fn duplicate_id_rejects_the_add_and_sends_nothing() {
        let (mut store, transport, notifier) = store_with(three_remote_users(), 3).await;
        let requests_before = transport.requests().len();

        store.start_add();
        fill_draft(&mut store, "2");

        let err = store.submit().await.unwrap_err();
        assert!(matches!(err, SubmitError::DuplicateId(id) if id == UserId::new(2)));
        assert_eq!(store.len(), 3);
        assert_eq!(store.mode(), Mode::Editing);
        assert_eq!(transport.requests().len(), requests_before);
        assert_eq!(
            notifier.last(),
            Some((
                NoteKind::Error,
                "The entered ID is already in use. Please enter a unique ID.".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn edits_skip_the_duplicate_id_check() {
        let (mut store, transport, _) = store_with(three_remote_users(), 3).await;

        store.start_edit(UserId::new(2));
        store.set_field(Field::FirstName, "Erwin");
        transport.queue_ok(json!({}));

        store.submit().await.unwrap();

        assert_eq!(store.users()[1].first_name, "Erwin");
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, Method::Put);
        assert_eq!(sent.path, "/users/2");
    }

    #[tokio::test]
    async fn unparseable_id_rejects_the_add() {
        let (mut store, transport, _) = store_with(three_remote_users(), 3).await;
        let requests_before = transport.requests().len();

        store.start_add();
        fill_draft(&mut store, "not-a-number");

        let err = store.submit().await.unwrap_err();
        assert!(matches!(err, SubmitError::InvalidId(_)));
        assert_eq!(store.mode(), Mode::Editing);
        assert_eq!(transport.requests().len(), requests_before);
    }

    #[tokio::test]
    async fn validation_failure_keeps_editing_and_sends_nothing() {
        let (mut store, transport, notifier) = store_with(three_remote_users(), 3).await;
        let requests_before = transport.requests().len();

        store.start_add();
        store.set_field(Field::Id, "11");
        store.set_field(Field::FirstName, "Nora");
        store.set_field(Field::Email, "bad");

        let err = store.submit().await.unwrap_err();
        let SubmitError::Validation(errors) = err else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[&Field::Email], "* Email format is invalid");
        assert_eq!(store.mode(), Mode::Editing);
        assert_eq!(store.validation_errors(), Some(&errors));
        assert_eq!(transport.requests().len(), requests_before);
        assert!(notifier.notes().is_empty());
    }

    #[tokio::test]
    async fn add_failure_preserves_the_draft_and_the_list() {
        let (mut store, transport, notifier) = store_with(three_remote_users(), 3).await;
        let before = store.users().to_vec();

        store.start_add();
        fill_draft(&mut store, "11");
        transport.queue_err(TransportError::Status(500));

        let err = store.submit().await.unwrap_err();
        assert!(matches!(err, SubmitError::Fetch(_)));
        assert_eq!(store.users(), &before[..]);
        assert_eq!(store.mode(), Mode::Editing);
        assert_eq!(store.draft().unwrap().first_name, "Nora");
        assert_eq!(store.last_error(), Some("Failed to add user."));
        assert_eq!(
            notifier.last(),
            Some((NoteKind::Error, "Failed to add user.".to_string()))
        );
    }

    #[tokio::test]
    async fn update_replaces_only_the_target_with_id_preserved() {
        let (mut store, transport, notifier) = store_with(three_remote_users(), 3).await;
        let before = store.users().to_vec();

        store.start_edit(UserId::new(2));
        store.set_field(Field::Id, "777"); // id text edits must not change identity
        store.set_field(Field::Email, "new@deckow.example");
        transport.queue_ok(json!({}));

        store.submit().await.unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.users()[0], before[0]);
        assert_eq!(store.users()[2], before[2]);
        let updated = &store.users()[1];
        assert_eq!(updated.id, UserId::new(2));
        assert_eq!(updated.email, "new@deckow.example");
        assert_eq!(
            notifier.last(),
            Some((NoteKind::Success, "User updated successfully!".to_string()))
        );
    }

    #[tokio::test]
    async fn update_failure_leaves_the_list_untouched() {
        let (mut store, transport, notifier) = store_with(three_remote_users(), 3).await;
        let before = store.users().to_vec();

        store.start_edit(UserId::new(3));
        store.set_field(Field::FirstName, "Changed");
        transport.queue_err(TransportError::Request("timeout".into()));

        let err = store.submit().await.unwrap_err();
        assert!(matches!(err, SubmitError::Fetch(_)));
        assert_eq!(store.users(), &before[..]);
        assert_eq!(store.mode(), Mode::Editing);
        assert_eq!(
            notifier.last(),
            Some((NoteKind::Error, "Failed to update user.".to_string()))
        );
    }

    #[tokio::test]
    async fn delete_removes_the_record_and_reclamps_the_page() {
        let users = json!([
            remote(1, "A One", "a@x.example", "D1"),
            remote(2, "B Two", "b@x.example", "D2"),
            remote(3, "C Three", "c@x.example", "D3"),
            remote(4, "D Four", "d@x.example", "D4"),
        ]);
        let (mut store, transport, notifier) = store_with(users, 3).await;

        store.next_page();
        assert_eq!(store.current_page(), 2);

        transport.queue_ok(json!({}));
        store.delete(UserId::new(4)).await.unwrap();

        assert_eq!(store.len(), 3);
        assert!(store.users().iter().all(|user| user.id != UserId::new(4)));
        assert_eq!(store.current_page(), 1);
        assert_eq!(
            notifier.last(),
            Some((NoteKind::Success, "User deleted successfully!".to_string()))
        );

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, Method::Delete);
        assert_eq!(sent.path, "/users/4");
    }

    #[tokio::test]
    async fn delete_failure_keeps_the_record() {
        let (mut store, transport, notifier) = store_with(three_remote_users(), 3).await;
        let before = store.users().to_vec();

        transport.queue_err(TransportError::Status(500));
        assert!(store.delete(UserId::new(2)).await.is_err());

        assert_eq!(store.users(), &before[..]);
        assert_eq!(store.last_error(), Some("Failed to delete user."));
        assert_eq!(
            notifier.last(),
            Some((NoteKind::Error, "Failed to delete user.".to_string()))
        );
    }

    #[tokio::test]
    async fn delete_does_not_disturb_an_open_draft() {
        let (mut store, transport, _) = store_with(three_remote_users(), 3).await;

        store.start_add();
        store.set_field(Field::FirstName, "Kept");
        transport.queue_ok(json!({}));

        store.delete(UserId::new(1)).await.unwrap();

        assert_eq!(store.mode(), Mode::Editing);
        assert_eq!(store.draft().unwrap().first_name, "Kept");
    }

    #[tokio::test]
    async fn page_navigation_clamps_at_both_ends() {
        let (mut store, _, _) = store_with(three_remote_users(), 3).await;

        store.previous_page();
        assert_eq!(store.current_page(), 1);

        store.next_page(); // 3 users, page size 3: already the last page
        assert_eq!(store.current_page(), 1);
    }

    #[tokio::test]
    async fn views_partition_the_collection_in_order() {
        let users = json!([
            remote(1, "A One", "a@x.example", "D"),
            remote(2, "B Two", "b@x.example", "D"),
            remote(3, "C Three", "c@x.example", "D"),
            remote(4, "D Four", "d@x.example", "D"),
            remote(5, "E Five", "e@x.example", "D"),
        ]);
        let (mut store, _, _) = store_with(users, 2).await;

        let mut seen = Vec::new();
        for _ in 0..store.total_pages() {
            let view = store.current_view();
            assert!(view.len() <= 2);
            seen.extend(view.to_vec());
            store.next_page();
        }

        assert_eq!(seen, store.users());
    }

    #[tokio::test]
    async fn submit_without_a_draft_is_rejected() {
        let (mut store, _, _) = store_with(three_remote_users(), 3).await;
        assert!(matches!(
            store.submit().await,
            Err(SubmitError::NotEditing)
        ));
    }

    #[tokio::test]
    async fn cancel_discards_the_draft() {
        let (mut store, _, _) = store_with(three_remote_users(), 3).await;

        store.start_edit(UserId::new(1));
        store.cancel();

        assert_eq!(store.mode(), Mode::Idle);
        assert!(store.draft().is_none());
    }
}
