//! TUI rendering for sitenav using ratatui.
//!
//! Each frame paints the document top to bottom (header, page body, footer), then the
//! overlay and the drawer on top. Every clickable element painted is recorded in the
//! [`HitMap`] so mouse clicks can be routed back to document elements.

mod app;
mod effects;
mod hitmap;
mod input;
mod theme;

pub use app::App;
pub use effects::{PANEL_WIDTH, panel_rect, visible_fraction};
pub use hitmap::HitMap;
pub use input::{InputPump, handle_events, map_key};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use sitenav_core::Site;
use sitenav_dom::{Document, ElementId, Tag};

const HEADER_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 2;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.ui_options();
    let (site, hits) = app.parts_mut();
    hits.clear();

    let palette = palette(site.theme_mode(), options);
    let glyphs = glyphs(options);
    let area = frame.area();
    let bg_block = Block::default().style(Style::default().bg(palette.bg).fg(palette.text));
    frame.render_widget(bg_block, area);

    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(1),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .split(area);

    draw_header(frame, site, hits, chunks[0], &palette, &glyphs);
    draw_page(frame, site, hits, chunks[1], &palette, &glyphs);
    draw_footer(frame, site, hits, chunks[2], &palette, &glyphs);

    // The header stays above the overlay so the toggle remains reachable.
    let below_header = Rect {
        y: chunks[1].y,
        height: area.height.saturating_sub(chunks[0].height),
        ..area
    };
    let visible = visible_fraction(site.nav().panel_effect(), site.nav().is_open());
    if visible > 0.0 {
        frame.buffer_mut().set_style(below_header, styles::dimmed(&palette));
        hits.push(below_header, site.handles().overlay);
    }
    if let Some(rect) = panel_rect(below_header, visible) {
        draw_panel(frame, site, hits, rect, &palette, &glyphs);
    }
}

fn text_width(text: &str) -> u16 {
    u16::try_from(UnicodeWidthStr::width(text)).unwrap_or(u16::MAX)
}

/// Paint one line of text at (`x`, `y`), clipped at `right`. Returns the painted rect.
fn put(frame: &mut Frame, x: u16, y: u16, right: u16, text: &str, style: Style) -> Rect {
    let width = text_width(text).min(right.saturating_sub(x));
    let rect = Rect::new(x, y, width, 1);
    if width > 0 {
        frame.render_widget(Paragraph::new(Span::styled(text, style)), rect);
    }
    rect
}

fn element_style(doc: &Document, id: ElementId, base: Style, palette: &Palette) -> Style {
    if doc.active_element() == Some(id) {
        base.patch(styles::focused(palette))
    } else {
        base
    }
}

fn draw_header(
    frame: &mut Frame,
    site: &Site,
    hits: &mut HitMap,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(palette.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let doc = site.doc();
    let handles = site.handles();
    let y = inner.y;
    let right = inner.right().saturating_sub(1);

    let brand_style = element_style(doc, handles.brand, styles::brand(palette), palette);
    let brand = put(frame, inner.x + 1, y, right, site.brand(), brand_style);
    hits.push(brand, handles.brand);

    if site.is_wide() {
        let mut x = brand.right() + 3;
        for &link in &handles.desktop_links {
            let label = doc.text(link);
            if x + text_width(label) > right {
                break;
            }
            let style = element_style(doc, link, styles::link(palette), palette);
            let rect = put(frame, x, y, right, label, style);
            hits.push(rect, link);
            x = rect.right() + 2;
        }
    } else {
        let open = site.nav().is_open();
        let glyph = if open { glyphs.close } else { glyphs.menu };
        let label = doc.attribute(handles.toggle, "aria-label").unwrap_or_default();
        let text = format!(" {glyph} {label} ");
        let x = right.saturating_sub(text_width(&text));
        let style = element_style(doc, handles.toggle, styles::button(palette), palette);
        let rect = put(frame, x, y, right, &text, style);
        hits.push(rect, handles.toggle);
    }
}

/// Greedy word wrap by display width.
fn wrap_words(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = UnicodeWidthStr::width(current.as_str())
            + usize::from(!current.is_empty())
            + UnicodeWidthStr::width(word);
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn draw_page(
    frame: &mut Frame,
    site: &mut Site,
    hits: &mut HitMap,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(1),
    };
    if inner.is_empty() {
        return;
    }

    let mut lines: Vec<(String, Style, Option<ElementId>)> = Vec::new();
    {
        let doc = site.doc();
        for &child in doc.children(site.handles().main) {
            match doc.tag(child) {
                Some(Tag::Heading) => {
                    lines.push((doc.text(child).to_string(), styles::heading(palette), None));
                    lines.push((String::new(), Style::default(), None));
                }
                Some(Tag::Anchor) => {
                    lines.push((String::new(), Style::default(), None));
                    let style = element_style(doc, child, styles::link(palette), palette);
                    let text = format!("{} {}", glyphs.link, doc.text(child));
                    lines.push((text, style, Some(child)));
                }
                _ => {
                    for line in wrap_words(doc.text(child), inner.width) {
                        lines.push((line, Style::default().fg(palette.text), None));
                    }
                }
            }
        }
    }

    let overflow = lines.len().saturating_sub(usize::from(inner.height));
    site.set_scroll_extent(u32::try_from(overflow).unwrap_or(u32::MAX));
    let offset = usize::try_from(site.doc().scroll_offset()).unwrap_or(usize::MAX);

    let right = inner.right();
    for (row, (text, style, element)) in lines
        .iter()
        .skip(offset)
        .take(usize::from(inner.height))
        .enumerate()
    {
        let y = inner.y + u16::try_from(row).unwrap_or(u16::MAX);
        let rect = put(frame, inner.x, y, right, text, *style);
        if let Some(id) = element {
            hits.push(rect, *id);
        }
    }
}

fn draw_footer(
    frame: &mut Frame,
    site: &Site,
    hits: &mut HitMap,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    if area.height == 0 {
        return;
    }
    let doc = site.doc();
    let right = area.right().saturating_sub(1);
    let mut x = area.x + 2;
    for (i, &link) in site.handles().footer_links.iter().enumerate() {
        if i > 0 {
            let sep = put(frame, x, area.y, right, glyphs.separator, styles::key_hint(palette));
            x = sep.right() + 1;
        }
        let style = element_style(doc, link, styles::link(palette), palette);
        let rect = put(frame, x, area.y, right, doc.text(link), style);
        hits.push(rect, link);
        x = rect.right() + 1;
    }

    if area.height > 1 {
        let hint = format!(
            "tab focus {sep} enter open {sep} t theme {sep} q quit",
            sep = glyphs.separator
        );
        put(
            frame,
            area.x + 2,
            area.y + 1,
            right,
            &hint,
            styles::key_hint(palette),
        );
    }
}

fn draw_panel(
    frame: &mut Frame,
    site: &Site,
    hits: &mut HitMap,
    rect: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    frame.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::LEFT)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.bg_panel).fg(palette.text));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);
    if inner.is_empty() {
        return;
    }

    let doc = site.doc();
    let handles = site.handles();
    let x = inner.x + 1;
    let right = inner.right();
    let mut y = inner.y + 1;
    let bottom = inner.bottom();

    let icon = match doc.attribute(handles.theme_toggle, "data-icon") {
        Some("sun") => glyphs.sun,
        _ => glyphs.moon,
    };
    let buttons = [
        (handles.close_button, glyphs.close),
        (handles.theme_toggle, icon),
        (handles.language_toggle, glyphs.language),
    ];
    for (button, glyph) in buttons {
        if y >= bottom {
            return;
        }
        let label = doc
            .attribute(button, "aria-label")
            .filter(|_| doc.text(button).is_empty())
            .unwrap_or_else(|| doc.text(button));
        let text = format!("{glyph} {label}");
        let style = element_style(doc, button, styles::button(palette), palette);
        put(frame, x, y, right, &text, style);
        hits.push(Rect::new(x, y, right.saturating_sub(x), 1), button);
        y += 1;
    }

    y += 1;
    for &link in &handles.panel_links {
        if y >= bottom {
            return;
        }
        let text = format!("{} {}", glyphs.link, doc.text(link));
        let style = element_style(doc, link, styles::link(palette), palette);
        put(frame, x, y, right, &text, style);
        hits.push(Rect::new(x, y, right.saturating_sub(x), 1), link);
        y += 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_respects_width() {
        let lines = wrap_words("We design, build and run web platforms", 12);
        assert!(lines.iter().all(|line| UnicodeWidthStr::width(line.as_str()) <= 12));
        assert_eq!(lines.join(" "), "We design, build and run web platforms");
    }

    #[test]
    fn wrap_keeps_overlong_words_whole() {
        assert_eq!(wrap_words("Produktentwicklung", 5), vec!["Produktentwicklung"]);
    }

    #[test]
    fn hit_map_prefers_topmost() {
        let mut doc = Document::new();
        let below = doc.create_element(Tag::Div);
        let above = doc.create_element(Tag::Button);
        let mut hits = HitMap::default();
        hits.push(Rect::new(0, 0, 10, 10), below);
        hits.push(Rect::new(2, 2, 3, 1), above);
        assert_eq!(hits.hit(3, 2), Some(above));
        assert_eq!(hits.hit(0, 0), Some(below));
        assert_eq!(hits.hit(20, 20), None);
        assert_eq!(hits.rect_of(above), Some(Rect::new(2, 2, 3, 1)));
    }
}
