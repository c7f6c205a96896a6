// Pagination controls - windowed page links rendered as an egui widget

use crate::error::SetupError;
use crate::links::{link_row, PageLink, DEFAULT_MAX_SIZE};
use crate::state::context::{PaginationContext, DEFAULT_ID};
use crate::state::page::PageState;
use crate::style;

/// Navigation controls for one pagination instance.
///
/// Built fresh each frame, after the matching list has been paginated for
/// the same frame so the state snapshot it reads is current:
///
/// ```text
/// let page_rows = list.paginate(&mut pg, &rows);
/// // ... render the rows ...
/// PaginationControls::for_instance("rows").show(ui, &mut pg)?;
/// ```
pub struct PaginationControls<'a> {
    instance_id: String,
    max_size: usize,
    boundary_links: bool,
    on_page_change: Option<Box<dyn FnMut(usize) + 'a>>,
}

/// What a call to [`PaginationControls::show`] did.
#[derive(Debug)]
pub struct ControlsResponse {
    /// Page dispatched by a click this frame, if any.
    pub page_changed: Option<usize>,
    /// The link row that was rendered; empty when everything fits on one
    /// page and the controls drew nothing.
    pub links: Vec<PageLink>,
}

impl<'a> PaginationControls<'a> {
    /// Controls for the default pagination instance.
    pub fn new() -> Self {
        Self::for_instance(DEFAULT_ID)
    }

    /// Controls for a named pagination instance. The id must match a list
    /// declared with the same id.
    pub fn for_instance(instance_id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            max_size: DEFAULT_MAX_SIZE,
            boundary_links: false,
            on_page_change: None,
        }
    }

    /// Limit the number of link slots. Values below the floor of 5 are
    /// clamped up.
    pub fn max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    /// Also render first-page/last-page jump arrows.
    pub fn boundary_links(mut self, enabled: bool) -> Self {
        self.boundary_links = enabled;
        self
    }

    /// Callback invoked with the new page number, exactly once per explicit
    /// click on an enabled link - including a click on the already-active
    /// page. Programmatic page assignment never triggers it.
    pub fn on_page_change(mut self, callback: impl FnMut(usize) + 'a) -> Self {
        self.on_page_change = Some(Box::new(callback));
        self
    }

    /// Render the controls and dispatch any click into the shared state.
    ///
    /// Fails when no paginated list has registered state under this
    /// instance id, naming the id when it is not the default.
    pub fn show(
        mut self,
        ui: &mut egui::Ui,
        ctx: &mut PaginationContext,
    ) -> Result<ControlsResponse, SetupError> {
        let Some(state) = ctx.get(&self.instance_id) else {
            return Err(SetupError::controls_without_list(&self.instance_id));
        };
        let current = state.current_page();
        let last_page = state.last_page();

        let links = link_row(current, last_page, self.max_size, self.boundary_links);
        let mut clicked = None;
        if !links.is_empty() {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = style::LINK_SPACING;
                for link in &links {
                    if self.render_link(ui, link) {
                        clicked = link.target(current, last_page);
                    }
                }
            });
        }

        let mut response = ControlsResponse {
            page_changed: None,
            links,
        };
        if let Some(target) = clicked {
            if let Some(state) = ctx.get_mut(&self.instance_id) {
                response.page_changed = Some(self.commit(state, target));
            }
        }
        Ok(response)
    }

    fn render_link(&self, ui: &mut egui::Ui, link: &PageLink) -> bool {
        match link {
            PageLink::Page { active, number } => {
                ui.selectable_label(*active, number.to_string()).clicked()
            }
            PageLink::Ellipsis => {
                ui.label(egui::RichText::new(style::ELLIPSIS_GLYPH).weak());
                false
            }
            PageLink::First { disabled }
            | PageLink::Prev { disabled }
            | PageLink::Next { disabled }
            | PageLink::Last { disabled } => {
                let button = egui::Button::new(link.label())
                    .min_size(egui::vec2(style::LINK_MIN_WIDTH, 0.0));
                ui.add_enabled(!disabled, button).clicked()
            }
        }
    }

    /// Write a clicked page into the state and fire the callback.
    fn commit(&mut self, state: &mut PageState, target: usize) -> usize {
        let page = state.set_current_page(target);
        log::trace!("pagination '{}': page -> {page}", self.instance_id);
        if let Some(callback) = self.on_page_change.as_mut() {
            callback(page);
        }
        page
    }
}

impl Default for PaginationControls<'_> {
    fn default() -> Self {
        Self::new()
    }
}
