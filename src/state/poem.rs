//! Poem entity and the poem-loading state machine.

#[cfg(test)]
#[path = "poem_test.rs"]
mod poem_test;

/// Longest line sequence shown before a poem is clipped.
pub const MAX_DISPLAY_LINES: usize = 28;

/// A normalized poem ready for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Poem {
    pub title: String,
    pub author: String,
    pub lines: Vec<String>,
    /// Set when the source had more than [`MAX_DISPLAY_LINES`] lines.
    pub truncated: bool,
}

impl Poem {
    /// Build a poem, clipping `lines` to [`MAX_DISPLAY_LINES`].
    pub fn new(title: impl Into<String>, author: impl Into<String>, mut lines: Vec<String>) -> Self {
        let truncated = lines.len() > MAX_DISPLAY_LINES;
        lines.truncate(MAX_DISPLAY_LINES);
        Self { title: title.into(), author: author.into(), lines, truncated }
    }

    /// Lines joined into one block, order preserved.
    #[must_use]
    pub fn body(&self) -> String {
        self.lines.join("\n")
    }
}

/// Poem-loading lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// The displayed poem plus where the loader is in its cycle.
///
/// `poem` survives a failed load so the previous poem stays on screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PoemState {
    pub poem: Option<Poem>,
    pub status: LoadStatus,
}

impl PoemState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    /// Enter `Loading`. Returns `false` if a load is already outstanding.
    pub fn begin_load(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        self.status = LoadStatus::Loading;
        true
    }

    pub fn finish_load(&mut self, poem: Poem) {
        self.poem = Some(poem);
        self.status = LoadStatus::Loaded;
    }

    pub fn fail_load(&mut self) {
        self.status = LoadStatus::Failed;
    }
}
