// Paginated list rendering - the current page as repeated fragments

use crate::binding::ListBinding;
use crate::state::context::PaginationContext;

impl ListBinding {
    /// Paginate `items` and render the current page, one fragment per item.
    ///
    /// The closure draws the whole repeated region for an item and may emit
    /// any number of sibling widgets; a multi-element row (heading, body,
    /// footer) is just a closure that draws all three. Returns the slice it
    /// rendered.
    pub fn show<'a, T>(
        &self,
        ui: &mut egui::Ui,
        ctx: &mut PaginationContext,
        items: &'a [T],
        mut render_item: impl FnMut(&mut egui::Ui, &'a T),
    ) -> &'a [T] {
        let page = self.paginate(ctx, items);
        for item in page {
            render_item(ui, item);
        }
        page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_renders_one_fragment_per_page_item() {
        let mut pg = PaginationContext::new();
        let list = ListBinding::setup("item in items | items_per_page: 3").unwrap();
        let items: Vec<String> = (1..=10).map(|i| format!("item {i}")).collect();

        let mut rendered = Vec::new();
        let egui_ctx = egui::Context::default();
        egui_ctx.run(egui::RawInput::default(), |ctx| {
            rendered.clear();
            egui::CentralPanel::default().show(ctx, |ui| {
                list.show(ui, &mut pg, &items, |ui, item| {
                    // A fragment may span several sibling widgets.
                    ui.label("entry");
                    ui.label(item);
                    rendered.push(item.as_str());
                });
            });
        });

        assert_eq!(rendered, ["item 1", "item 2", "item 3"]);
    }

    #[test]
    fn test_show_follows_the_current_page() {
        let mut pg = PaginationContext::new();
        let list = ListBinding::setup("item in items | items_per_page: 3").unwrap();
        let items: Vec<String> = (1..=10).map(|i| format!("item {i}")).collect();

        list.paginate(&mut pg, &items);
        pg.set_current_page(crate::state::DEFAULT_ID, 2);

        let mut rendered = Vec::new();
        let egui_ctx = egui::Context::default();
        egui_ctx.run(egui::RawInput::default(), |ctx| {
            rendered.clear();
            egui::CentralPanel::default().show(ctx, |ui| {
                list.show(ui, &mut pg, &items, |_ui, item| rendered.push(item.as_str()));
            });
        });

        assert_eq!(rendered, ["item 4", "item 5", "item 6"]);
    }
}
