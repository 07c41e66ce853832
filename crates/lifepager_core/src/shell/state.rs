//! Shell state and intent transitions.

use crate::model::document::Document;
use crate::page::{resolve, Page, PageKind};
use log::debug;

/// Timeline item shown in the detail overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailTarget {
    pub timeline_index: usize,
    pub item_index: usize,
}

/// Mutable navigation state; everything else is derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShellState {
    pub page_index: usize,
    pub detail: Option<DetailTarget>,
    pub reset_prompt_visible: bool,
}

impl ShellState {
    /// Whether a modal surface (detail overlay or reset prompt) is showing.
    pub fn is_modal(&self) -> bool {
        self.detail.is_some() || self.reset_prompt_visible
    }
}

/// User gestures forwarded by the UI shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Tap anywhere on the title page.
    TapTitle,
    /// Tap the next-page chevron on a profile or timeline page.
    TapChevron,
    /// Tap anywhere on the end page.
    TapEnd,
    ConfirmReset,
    CancelReset,
    /// Tap a timeline bar or its label.
    OpenDetail {
        timeline_index: usize,
        item_index: usize,
    },
    /// Back gesture or back control on the detail overlay.
    CloseDetail,
    /// Swipe or programmatic scroll to a page.
    SwipeTo(usize),
}

/// Owns the document and navigation state for one session.
#[derive(Debug, Clone, Default)]
pub struct Presenter {
    document: Document,
    state: ShellState,
}

impl Presenter {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            state: ShellState::default(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    pub fn current_page(&self) -> Page<'_> {
        resolve(self.state.page_index, &self.document)
    }

    /// Swaps in a newly loaded document, keeping the page index when valid.
    pub fn replace_document(&mut self, document: Document) {
        self.document = document;
        self.state.page_index = self.state.page_index.min(self.document.last_page_index());
        if let Some(target) = self.state.detail {
            if !self.is_valid_detail(target) {
                self.state.detail = None;
            }
        }
        if self.current_page().kind() != PageKind::End {
            self.state.reset_prompt_visible = false;
        }
    }

    /// Applies one intent.
    ///
    /// Returns `true` when the state changed. Intents that do not fit the
    /// current page or that arrive behind a modal surface are ignored.
    pub fn apply(&mut self, intent: Intent) -> bool {
        let before = self.state;
        let kind = self.current_page().kind();

        match intent {
            Intent::TapTitle if !self.state.is_modal() && kind == PageKind::Title => {
                self.advance(1);
            }
            Intent::TapChevron
                if !self.state.is_modal()
                    && matches!(kind, PageKind::Profile | PageKind::Timeline) =>
            {
                self.advance(1);
            }
            Intent::TapEnd if !self.state.is_modal() && kind == PageKind::End => {
                self.state.reset_prompt_visible = true;
            }
            Intent::ConfirmReset if self.state.reset_prompt_visible => {
                self.state.reset_prompt_visible = false;
                self.state.page_index = 0;
            }
            Intent::CancelReset => {
                self.state.reset_prompt_visible = false;
            }
            Intent::OpenDetail {
                timeline_index,
                item_index,
            } if !self.state.is_modal() => {
                let target = DetailTarget {
                    timeline_index,
                    item_index,
                };
                if self.is_valid_detail(target) {
                    self.state.detail = Some(target);
                }
            }
            Intent::CloseDetail => {
                self.state.detail = None;
            }
            Intent::SwipeTo(index) if !self.state.is_modal() => {
                self.state.page_index = index.min(self.document.last_page_index());
            }
            _ => {}
        }

        let changed = self.state != before;
        if changed {
            debug!(
                "event=intent_applied module=shell intent={:?} page_index={} detail={} prompt={}",
                intent,
                self.state.page_index,
                self.state.detail.is_some(),
                self.state.reset_prompt_visible
            );
        }
        changed
    }

    fn advance(&mut self, pages: usize) {
        self.state.page_index = self
            .state
            .page_index
            .saturating_add(pages)
            .min(self.document.last_page_index());
    }

    fn is_valid_detail(&self, target: DetailTarget) -> bool {
        match self.current_page() {
            Page::Timeline { index, .. } if index == target.timeline_index => self
                .document
                .item(target.timeline_index, target.item_index)
                .is_some(),
            _ => false,
        }
    }
}
