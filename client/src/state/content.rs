//! Content admin screen state.
//!
//! SYSTEM CONTEXT
//! ==============
//! One screen per content kind, all the same shape: a list of items, at most
//! one open form (create or edit), a pending delete awaiting confirmation,
//! and a single error banner. Each operation has its own loading flag.
//!
//! DESIGN
//! ======
//! Transitions are synchronous methods on [`ContentScreen`]. The async
//! drivers (`refresh`, `submit`, `delete_confirmed`) call the content
//! service and write back through a [`StateCell`], so a screen that unmounts
//! mid-request simply drops the late result. A successful list or submit
//! clears the banner; a failed refetch always leaves one showing.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use console_model::{ContentDraft, ContentFields, ContentItem, ContentKind, ErrorKind};

use crate::net::{ApiResult, ContentService};
use crate::state::StateCell;

/// Whether the open form inserts a new item or overwrites an existing one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Closed,
    Open { mode: FormMode, draft: ContentDraft },
}

/// A write ready to dispatch, captured when a submission starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingWrite {
    pub kind: ContentKind,
    pub mode: FormMode,
    pub fields: ContentFields,
}

/// User-facing message for a duplicate slug.
pub fn slug_conflict_message(slug: &str) -> String {
    format!("Slug \"{slug}\" already exists. Choose a unique slug.")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentScreen {
    pub kind: ContentKind,
    /// Newest first, exactly as last fetched.
    pub items: Vec<ContentItem>,
    pub form: FormState,
    pub loading: bool,
    pub submitting: bool,
    pub error: Option<String>,
    /// Item id awaiting delete confirmation.
    pub pending_delete: Option<String>,
}

impl ContentScreen {
    #[must_use]
    pub fn new(kind: ContentKind) -> Self {
        Self {
            kind,
            items: Vec::new(),
            form: FormState::Closed,
            loading: true,
            submitting: false,
            error: None,
            pending_delete: None,
        }
    }

    pub fn is_form_open(&self) -> bool {
        matches!(self.form, FormState::Open { .. })
    }

    pub fn editing_id(&self) -> Option<&str> {
        match &self.form {
            FormState::Open { mode: FormMode::Edit(id), .. } => Some(id),
            _ => None,
        }
    }

    pub fn draft(&self) -> Option<&ContentDraft> {
        match &self.form {
            FormState::Open { draft, .. } => Some(draft),
            FormState::Closed => None,
        }
    }

    // =========================================================================
    // FORM
    // =========================================================================

    pub fn open_create(&mut self) {
        self.form = FormState::Open { mode: FormMode::Create, draft: ContentDraft::default() };
    }

    /// Open the form on an existing item. Unknown ids are ignored.
    pub fn open_edit(&mut self, id: &str) {
        if let Some(item) = self.items.iter().find(|i| i.id == id) {
            self.form = FormState::Open { mode: FormMode::Edit(item.id.clone()), draft: ContentDraft::from_item(item) };
        }
    }

    /// Close the form and discard the draft. Sends nothing.
    pub fn cancel_form(&mut self) {
        self.form = FormState::Closed;
    }

    pub fn edit_draft(&mut self, f: impl FnOnce(&mut ContentDraft)) {
        if let FormState::Open { draft, .. } = &mut self.form {
            f(draft);
        }
    }

    /// Start a submission from the open draft.
    ///
    /// Returns `None` when no form is open, a submission is already in
    /// flight, or a required field is empty (which sets the banner).
    pub fn begin_submit(&mut self) -> Option<PendingWrite> {
        if self.submitting {
            return None;
        }
        let FormState::Open { mode, draft } = &self.form else {
            return None;
        };
        let fields = draft.to_fields();
        if let Err(msg) = fields.validate() {
            self.error = Some(msg.to_owned());
            return None;
        }
        let write = PendingWrite { kind: self.kind, mode: mode.clone(), fields };
        self.submitting = true;
        Some(write)
    }

    /// Record a write outcome. Returns `true` when the list should refresh.
    ///
    /// On failure the form stays open with the draft untouched.
    pub fn finish_submit(&mut self, result: ApiResult<()>, slug: &str) -> bool {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.form = FormState::Closed;
                self.error = None;
                true
            }
            Err(e) if e.code == ErrorKind::Conflict => {
                self.error = Some(slug_conflict_message(slug));
                false
            }
            Err(e) => {
                self.error = Some(e.message);
                false
            }
        }
    }

    // =========================================================================
    // LIST
    // =========================================================================

    pub fn begin_refresh(&mut self) -> ContentKind {
        self.loading = true;
        self.kind
    }

    /// Replace the list wholesale, or keep it and show the banner.
    pub fn finish_refresh(&mut self, result: ApiResult<Vec<ContentItem>>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => self.error = Some(e.message),
        }
    }

    // =========================================================================
    // DELETE
    // =========================================================================

    /// Ask for confirmation before deleting `id`.
    pub fn request_delete(&mut self, id: &str) {
        self.pending_delete = Some(id.to_owned());
    }

    /// Dismiss the confirmation. Sends nothing.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn take_pending_delete(&mut self) -> Option<(ContentKind, String)> {
        self.pending_delete.take().map(|id| (self.kind, id))
    }

    /// Record a delete outcome after the follow-up refresh.
    ///
    /// Success leaves the banner alone: the refresh already cleared it, or
    /// set it because the refetch failed.
    pub fn finish_delete(&mut self, result: ApiResult<()>) {
        if let Err(e) = result {
            self.error = Some(e.message);
        }
    }
}

// =============================================================================
// DRIVERS
// =============================================================================

/// Fetch the list and replace it.
pub async fn refresh<S, C>(service: &S, screen: &C)
where
    S: ContentService,
    C: StateCell<ContentScreen>,
{
    let Some(kind) = screen.mutate(ContentScreen::begin_refresh) else {
        return;
    };
    let result = service.list(kind).await;
    screen.mutate(|s| s.finish_refresh(result));
}

/// Submit the open form; on success close it and refresh.
pub async fn submit<S, C>(service: &S, screen: &C)
where
    S: ContentService,
    C: StateCell<ContentScreen>,
{
    let Some(Some(write)) = screen.mutate(ContentScreen::begin_submit) else {
        return;
    };
    let result = match &write.mode {
        FormMode::Create => service.create(write.kind, &write.fields).await,
        FormMode::Edit(id) => service.update(write.kind, id, &write.fields).await,
    };
    if screen.mutate(|s| s.finish_submit(result, &write.fields.slug)) == Some(true) {
        refresh(service, screen).await;
    }
}

/// Delete the confirmed item, then refresh regardless of the outcome.
///
/// The delete outcome is applied after the refresh so a failure stays on the
/// banner.
pub async fn delete_confirmed<S, C>(service: &S, screen: &C)
where
    S: ContentService,
    C: StateCell<ContentScreen>,
{
    let Some(Some((kind, id))) = screen.mutate(ContentScreen::take_pending_delete) else {
        return;
    };
    let result = service.delete(kind, &id).await;
    refresh(service, screen).await;
    screen.mutate(|s| s.finish_delete(result));
}
