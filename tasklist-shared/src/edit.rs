//! Inline title editing.
//!
//! A title becomes editable on double-click. Enter or blur commits, Escape
//! cancels. Only a commit with a non-empty, changed value produces a save;
//! everything else reverts to the original text without touching the
//! network. A saved title stays on screen while the update is in flight.

/// Result of committing an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommit {
    /// Persist this trimmed title.
    Save(String),
    /// Show the original title again.
    Revert,
}

/// Decide what committing `edited` over `original` means.
#[must_use]
pub fn decide(original: &str, edited: &str) -> EditCommit {
    let trimmed = edited.trim();
    if trimmed.is_empty() || trimmed == original {
        EditCommit::Revert
    } else {
        EditCommit::Save(trimmed.to_string())
    }
}

/// Editing session of one title.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InlineEdit {
    original: String,
    draft: String,
    active: bool,
    saving: Option<String>,
}

impl InlineEdit {
    /// Start editing `original`.
    #[must_use]
    pub fn begin(original: impl Into<String>) -> Self {
        let original = original.into();
        Self {
            draft: original.clone(),
            original,
            active: true,
            saving: None,
        }
    }

    /// Whether the input is showing.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Keystroke in the input.
    pub fn input(&mut self, text: impl Into<String>) {
        if self.active {
            self.draft = text.into();
        }
    }

    /// Escape: drop the draft.
    pub fn cancel(&mut self) {
        self.active = false;
        self.draft.clone_from(&self.original);
    }

    /// Enter or blur. Returns `None` when the session already ended, so a
    /// blur that follows Enter does not save twice.
    pub fn commit(&mut self) -> Option<EditCommit> {
        if !self.active {
            return None;
        }
        self.active = false;
        let decision = decide(&self.original, &self.draft);
        match &decision {
            EditCommit::Save(title) => self.saving = Some(title.clone()),
            EditCommit::Revert => self.draft.clone_from(&self.original),
        }
        Some(decision)
    }

    /// Text to show for a title whose stored value is `current`.
    ///
    /// The last saved title wins until `current` differs from the title the
    /// edit started from, i.e. the store has caught up with the save.
    pub fn shown(&mut self, current: &str) -> String {
        if current != self.original {
            self.saving = None;
        }
        match &self.saving {
            Some(saved) if !self.active => saved.clone(),
            _ => current.to_string(),
        }
    }

    /// The save was rejected; the original title comes back.
    pub fn save_failed(&mut self) {
        self.saving = None;
        self.draft.clone_from(&self.original);
    }
}
