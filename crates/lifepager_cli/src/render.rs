//! Plain-text page rendering.

use lifepager_core::{Page, Screen, TimelineLayout, END_PAGE_LABEL};
use std::io::{self, Write};

const RULE: char = '-';
const BAR: char = '#';

/// Writes one frame for `screen`.
pub fn render_screen(screen: &Screen<'_>, out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "[{}/{}]", screen.page_index, screen.total_pages - 1)?;

    if let Some(detail) = screen.detail {
        writeln!(out, "< {}", detail.name)?;
        for text in detail.texts {
            writeln!(out, "    {text}")?;
        }
        return Ok(());
    }

    match screen.page {
        Page::Title {
            title,
            icon_url,
            color,
        } => {
            writeln!(out, "== {title} ==")?;
            if !icon_url.is_empty() {
                writeln!(out, "icon: {icon_url}")?;
            }
            writeln!(out, "theme: {}", color.to_hex())?;
        }
        Page::Profile { profile, .. } => {
            writeln!(out, "{}  >", profile.name)?;
            for item in &profile.items {
                writeln!(out, "    {item}")?;
            }
        }
        Page::Timeline { timeline, .. } => {
            writeln!(out, "{}  >", timeline.title)?;
            if let Some(layout) = &screen.timeline_layout {
                render_timeline(layout, &timeline.items, out)?;
            }
            if !timeline.memo.is_empty() {
                writeln!(out, "{}", timeline.memo)?;
            }
        }
        Page::End { .. } => {
            writeln!(out, "== {END_PAGE_LABEL} ==")?;
        }
    }

    if let Some(prompt) = screen.reset_prompt {
        writeln!(
            out,
            "{} [y] {} / [c] {}",
            prompt.message, prompt.confirm, prompt.cancel
        )?;
    }
    Ok(())
}

fn render_timeline(
    layout: &TimelineLayout,
    items: &[lifepager_core::Item],
    out: &mut impl Write,
) -> io::Result<()> {
    let width = layout.width.round() as usize;
    writeln!(out, "{}", axis_line(layout))?;
    writeln!(out, "{}", RULE.to_string().repeat(width))?;

    for span in &layout.spans {
        let start = span.start_margin.round() as usize;
        let bar = span.bar_width(layout.width).round() as usize;
        let name = items
            .get(span.item_index)
            .map(|item| item.name.as_str())
            .unwrap_or_default();
        writeln!(
            out,
            "{}{}",
            " ".repeat(start),
            BAR.to_string().repeat(bar)
        )?;
        writeln!(out, "{}[{}] {}", " ".repeat(start), span.item_index, name)?;
    }
    Ok(())
}

/// Axis labels placed at their column starts, truncated to column width.
fn axis_line(layout: &TimelineLayout) -> String {
    let mut line = String::new();
    for (column, label) in layout.axis_labels.iter().enumerate() {
        let start = (column as f32 * layout.column_width).round() as usize;
        let end = ((column + 1) as f32 * layout.column_width).round() as usize;
        let span = end.saturating_sub(start);
        let cell: String = label.text.chars().take(span.saturating_sub(1)).collect();
        let used = line.chars().count();
        if used < start {
            line.push_str(&" ".repeat(start - used));
        }
        line.push_str(&cell);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::render_screen;
    use lifepager_core::{parse_document, Intent, Presenter};

    fn presenter() -> Presenter {
        Presenter::new(
            parse_document(
                br#"{
                    "title": "Life",
                    "profiles": [{"name": "About", "items": ["Sapporo"]}],
                    "timelines": [{
                        "title": "Jobs",
                        "memo": "part-time omitted",
                        "startYear": 2000,
                        "endYear": 2003,
                        "items": [{"name": "Cafe", "texts": ["Barista", "Night shift"], "startYear": 2001, "endYear": 2002}]
                    }]
                }"#,
            )
            .expect("fixture should parse"),
        )
    }

    fn render(presenter: &Presenter, width: f32) -> String {
        let mut out = Vec::new();
        render_screen(&presenter.render(width, 2026), &mut out).expect("render to memory");
        String::from_utf8(out).expect("render output is UTF-8")
    }

    #[test]
    fn title_and_profile_pages_render_text() {
        let mut presenter = presenter();
        let title = render(&presenter, 40.0);
        assert!(title.contains("== Life =="));
        assert!(title.contains("#FFFFFFFF"));

        presenter.apply(Intent::TapTitle);
        let profile = render(&presenter, 40.0);
        assert!(profile.contains("About  >"));
        assert!(profile.contains("    Sapporo"));
    }

    #[test]
    fn timeline_page_renders_axis_and_bars() {
        let mut presenter = presenter();
        presenter.apply(Intent::SwipeTo(2));
        let text = render(&presenter, 40.0);

        assert!(text.contains("2000"));
        assert!(text.contains("2003"));
        // column 10: start 10 + 2.5, end 10 + 5, bar 40 - 12.5 - 15
        let bar_line = format!("{}{}", " ".repeat(13), "#".repeat(13));
        assert!(text.contains(&bar_line), "{text}");
        assert!(text.contains("[0] Cafe"));
        assert!(text.contains("part-time omitted"));
    }

    #[test]
    fn detail_and_reset_prompt_render() {
        let mut presenter = presenter();
        presenter.apply(Intent::SwipeTo(2));
        presenter.apply(Intent::OpenDetail {
            timeline_index: 0,
            item_index: 0,
        });
        let detail = render(&presenter, 40.0);
        assert!(detail.contains("< Cafe"));
        assert!(detail.contains("    Night shift"));

        presenter.apply(Intent::CloseDetail);
        presenter.apply(Intent::SwipeTo(3));
        presenter.apply(Intent::TapEnd);
        let end = render(&presenter, 40.0);
        assert!(end.contains("== End =="));
        assert!(end.contains("Reset? [y] Reset / [c] Cancel"));
    }
}
