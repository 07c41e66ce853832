//! Render projection of shell state.

use crate::layout::timeline::{layout_timeline, TimelineLayout};
use crate::page::Page;
use crate::shell::state::Presenter;

/// Text shown centered on the end page.
pub const END_PAGE_LABEL: &str = "End";

/// Labels for the reset confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetPrompt {
    pub message: &'static str,
    pub confirm: &'static str,
    pub cancel: &'static str,
}

impl ResetPrompt {
    pub const STANDARD: ResetPrompt = ResetPrompt {
        message: "Reset?",
        confirm: "Reset",
        cancel: "Cancel",
    };
}

/// Detail overlay content for one timeline item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailView<'a> {
    pub name: &'a str,
    pub texts: &'a [String],
}

/// Everything the UI shell needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Screen<'a> {
    pub page_index: usize,
    pub total_pages: usize,
    pub page: Page<'a>,
    /// Present only on timeline pages.
    pub timeline_layout: Option<TimelineLayout>,
    pub detail: Option<DetailView<'a>>,
    pub reset_prompt: Option<ResetPrompt>,
}

impl Presenter {
    /// Builds the frame for the current state at `width` layout units.
    pub fn render(&self, width: f32, current_year: i32) -> Screen<'_> {
        let state = self.state();
        let document = self.document();
        let page = self.current_page();

        let timeline_layout = match page {
            Page::Timeline { timeline, .. } => Some(layout_timeline(
                timeline,
                width,
                current_year,
                document.birth_year,
            )),
            _ => None,
        };

        let detail = state.detail.and_then(|target| {
            document
                .item(target.timeline_index, target.item_index)
                .map(|item| DetailView {
                    name: item.name.as_str(),
                    texts: item.texts.as_slice(),
                })
        });

        Screen {
            page_index: state.page_index,
            total_pages: document.total_pages(),
            page,
            timeline_layout,
            detail,
            reset_prompt: state.reset_prompt_visible.then_some(ResetPrompt::STANDARD),
        }
    }
}
