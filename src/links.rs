// Page-link window computation and the rendered link model

use crate::style;

/// Default number of link slots in the windowed row.
pub const DEFAULT_MAX_SIZE: usize = 9;

/// Smallest permitted window; smaller requests are clamped up to this.
pub const MIN_MAX_SIZE: usize = 5;

/// One slot of the windowed page-number sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Number(usize),
    Ellipsis,
}

/// One rendered link in the controls row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    First { disabled: bool },
    Prev { disabled: bool },
    Page { number: usize, active: bool },
    Ellipsis,
    Next { disabled: bool },
    Last { disabled: bool },
}

impl PageLink {
    /// Text shown for this link.
    pub fn label(&self) -> String {
        match self {
            PageLink::First { .. } => style::FIRST_GLYPH.to_owned(),
            PageLink::Prev { .. } => style::PREV_GLYPH.to_owned(),
            PageLink::Page { number, .. } => number.to_string(),
            PageLink::Ellipsis => style::ELLIPSIS_GLYPH.to_owned(),
            PageLink::Next { .. } => style::NEXT_GLYPH.to_owned(),
            PageLink::Last { .. } => style::LAST_GLYPH.to_owned(),
        }
    }

    /// Page a click on this link navigates to, or `None` for ellipsis
    /// markers and disabled arrows.
    pub fn target(&self, current: usize, last_page: usize) -> Option<usize> {
        match self {
            PageLink::First { disabled: false } => Some(1),
            PageLink::Prev { disabled: false } => Some(current.saturating_sub(1).max(1)),
            PageLink::Page { number, .. } => Some(*number),
            PageLink::Next { disabled: false } => Some((current + 1).min(last_page)),
            PageLink::Last { disabled: false } => Some(last_page),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Position {
    Start,
    Middle,
    End,
}

/// Compute the windowed page-number sequence for the controls.
///
/// When every page fits inside `max_size` slots the sequence is simply
/// `1..=last_page`. Otherwise the first and last slot are reserved for page
/// 1 and `last_page`, the interior window follows `current`, and an ellipsis
/// marker fills slot 2 and/or `max_size - 1` wherever the window does not
/// abut the reserved pages.
pub fn page_items(current: usize, last_page: usize, max_size: usize) -> Vec<PageItem> {
    let range = max_size.max(MIN_MAX_SIZE);
    let half_way = range.div_ceil(2);

    let position = if current <= half_way {
        Position::Start
    } else if last_page.saturating_sub(half_way) < current {
        Position::End
    } else {
        Position::Middle
    };

    let ellipses_needed = range < last_page;
    let mut items = Vec::with_capacity(range.min(last_page));
    let mut i = 1;
    while i <= last_page && i <= range {
        let opening = i == 2 && position != Position::Start;
        let closing = i + 1 == range && position != Position::End;
        if ellipses_needed && (opening || closing) {
            items.push(PageItem::Ellipsis);
        } else {
            items.push(PageItem::Number(slot_page(i, current, range, last_page, position)));
        }
        i += 1;
    }
    items
}

/// Page number occupying slot `i` of the window.
fn slot_page(i: usize, current: usize, range: usize, last_page: usize, position: Position) -> usize {
    let half_way = range.div_ceil(2);
    if i == range {
        last_page
    } else if i == 1 {
        1
    } else if range < last_page {
        match position {
            Position::End => last_page - range + i,
            Position::Middle => current - half_way + i,
            Position::Start => i,
        }
    } else {
        i
    }
}

/// Build the full link row for the controls.
///
/// Empty when there is at most one page; otherwise prev/next arrows frame
/// the windowed page numbers, with first/last jump arrows outside them when
/// `boundary_links` is set. Arrows at the edge of the range are disabled.
pub fn link_row(current: usize, last_page: usize, max_size: usize, boundary_links: bool) -> Vec<PageLink> {
    if last_page <= 1 {
        return Vec::new();
    }
    let current = current.clamp(1, last_page);

    let mut row = Vec::new();
    if boundary_links {
        row.push(PageLink::First { disabled: current == 1 });
    }
    row.push(PageLink::Prev { disabled: current == 1 });
    for item in page_items(current, last_page, max_size) {
        row.push(match item {
            PageItem::Number(number) => PageLink::Page {
                number,
                active: number == current,
            },
            PageItem::Ellipsis => PageLink::Ellipsis,
        });
    }
    row.push(PageLink::Next { disabled: current == last_page });
    if boundary_links {
        row.push(PageLink::Last { disabled: current == last_page });
    }
    row
}
