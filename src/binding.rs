// Declarative list binding - one-shot expression parsing and per-list config

use crate::error::SetupError;
use crate::slice;
use crate::state::context::{PaginationContext, DEFAULT_ID};
use crate::state::page::PageCell;

/// Page-size source extracted from the repeat expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SizeExpr {
    /// Integer literal written directly in the expression.
    Literal(usize),
    /// Named binding the host evaluates each cycle.
    Binding(String),
}

/// Structured form of a paginated repeat expression:
///
/// ```text
/// <item> in <collection> [| <filter>]... | items_per_page: <size> [: '<id>']
/// ```
///
/// Parsed once at setup. The collection and filter stages stay expression
/// text: the host evaluates them and hands the resulting (already filtered)
/// rows to [`ListBinding::paginate`] each cycle, so pagination always counts
/// the post-filter collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatExpr {
    pub item: String,
    pub collection: String,
    pub filters: Vec<String>,
    pub page_size: SizeExpr,
    pub instance_id: Option<String>,
}

impl RepeatExpr {
    pub fn parse(source: &str) -> Result<Self, SetupError> {
        let bad = || SetupError::BadRepeatExpression {
            expr: source.to_owned(),
        };

        let mut segments = source.split('|').map(str::trim);
        let head = segments.next().unwrap_or_default();
        let (item, collection) = head.split_once(" in ").ok_or_else(bad)?;
        let (item, collection) = (item.trim(), collection.trim());
        if item.is_empty() || collection.is_empty() {
            return Err(bad());
        }

        let mut filters = Vec::new();
        let mut page_size = None;
        let mut instance_id = None;
        for segment in segments {
            if segment.is_empty() {
                return Err(bad());
            }
            match size_stage(segment) {
                Some(args) => {
                    let (size, id) = parse_size_args(args).ok_or_else(bad)?;
                    page_size = Some(size);
                    instance_id = id;
                }
                None => filters.push(segment.to_owned()),
            }
        }

        let page_size = page_size.ok_or(SetupError::MissingItemsPerPage)?;
        Ok(Self {
            item: item.to_owned(),
            collection: collection.to_owned(),
            filters,
            page_size,
            instance_id,
        })
    }
}

/// Returns the argument text when the segment is the `items_per_page` stage.
/// A space between the stage name and the colon is accepted.
fn size_stage(segment: &str) -> Option<&str> {
    let rest = segment.strip_prefix("items_per_page")?;
    rest.trim_start().strip_prefix(':')
}

fn parse_size_args(args: &str) -> Option<(SizeExpr, Option<String>)> {
    let (size_text, id_text) = match args.split_once(':') {
        Some((size, id)) => (size.trim(), Some(id.trim())),
        None => (args.trim(), None),
    };
    if size_text.is_empty() {
        return None;
    }
    let size = match size_text.parse::<usize>() {
        Ok(n) => SizeExpr::Literal(n),
        Err(_) => SizeExpr::Binding(size_text.to_owned()),
    };
    let id = match id_text {
        Some(raw) => Some(unquote(raw)?.to_owned()),
        None => None,
    };
    Some((size, id))
}

/// Strip a matched pair of quotes from an id literal.
fn unquote(raw: &str) -> Option<&str> {
    if let Some(rest) = raw.strip_prefix('\'') {
        return rest.strip_suffix('\'').filter(|s| !s.is_empty());
    }
    if let Some(rest) = raw.strip_prefix('"') {
        return rest.strip_suffix('"').filter(|s| !s.is_empty());
    }
    (!raw.is_empty()).then_some(raw)
}

/// Per-list pagination configuration, built once at setup.
///
/// A `ListBinding` pairs a parsed [`RepeatExpr`] with the instance id the
/// list is declared under, plus the optional current-page cell and
/// total-items override. Per cycle the host calls
/// [`paginate`](Self::paginate) with the evaluated collection.
#[derive(Debug)]
pub struct ListBinding {
    expr: RepeatExpr,
    instance_id: String,
    page_size: usize,
    total_override: Option<usize>,
    cell: Option<PageCell>,
}

impl ListBinding {
    /// Set up a list declared without an explicit instance id.
    pub fn setup(source: &str) -> Result<Self, SetupError> {
        Self::build(source, None)
    }

    /// Set up a list declared with an instance-id attribute.
    pub fn setup_with_id(source: &str, instance_id: &str) -> Result<Self, SetupError> {
        Self::build(source, Some(instance_id))
    }

    fn build(source: &str, attr_id: Option<&str>) -> Result<Self, SetupError> {
        let expr = RepeatExpr::parse(source)?;
        let declared = attr_id.unwrap_or(DEFAULT_ID);
        if let Some(literal) = &expr.instance_id {
            if literal != declared {
                return Err(SetupError::UnmatchedInstanceId {
                    id: literal.clone(),
                });
            }
        }
        let page_size = match &expr.page_size {
            SizeExpr::Literal(n) => *n,
            SizeExpr::Binding(_) => 0,
        };
        log::debug!("pagination: list '{declared}' bound to '{}'", expr.collection);
        Ok(Self {
            expr,
            instance_id: declared.to_owned(),
            page_size,
            total_override: None,
            cell: None,
        })
    }

    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    pub fn expr(&self) -> &RepeatExpr {
        &self.expr
    }

    /// Attach a shared current-page cell (two-way binding).
    pub fn bind_current_page(&mut self, cell: PageCell) {
        self.cell = Some(cell);
    }

    /// Store the evaluated page-size binding for the coming cycles. A
    /// literal size in the expression pre-fills this; the controls widget
    /// never touches it.
    pub fn set_page_size(&mut self, per_page: usize) {
        self.page_size = per_page;
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Externally reported total item count, for collections where the host
    /// holds one server page at a time. `None` returns to counting the
    /// visible collection.
    pub fn set_total_items(&mut self, total: Option<usize>) {
        self.total_override = total;
    }

    /// Slice the current page out of `items` and refresh the shared state
    /// for this list's instance id.
    pub fn paginate<'a, T>(&self, ctx: &mut PaginationContext, items: &'a [T]) -> &'a [T] {
        if let Some(cell) = &self.cell {
            ctx.get_or_create(&self.instance_id).bind_cell(cell.clone());
        }
        slice::items_per_page_with_total(
            ctx,
            items,
            self.page_size,
            &self.instance_id,
            self.total_override,
        )
    }

    /// Drop this list's registry entry when the list leaves the view.
    pub fn release(&self, ctx: &mut PaginationContext) {
        ctx.remove(&self.instance_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_expression() {
        let expr = RepeatExpr::parse("item in collection | items_per_page: itemsPerPage").unwrap();
        assert_eq!(expr.item, "item");
        assert_eq!(expr.collection, "collection");
        assert!(expr.filters.is_empty());
        assert_eq!(expr.page_size, SizeExpr::Binding("itemsPerPage".to_owned()));
        assert_eq!(expr.instance_id, None);
    }

    #[test]
    fn test_parse_allows_space_before_colon() {
        let expr = RepeatExpr::parse("item in collection | items_per_page : 10").unwrap();
        assert_eq!(expr.page_size, SizeExpr::Literal(10));
    }

    #[test]
    fn test_parse_captures_filters_in_order() {
        let expr = RepeatExpr::parse(
            "row in rows | search: query | sort: 'name' | items_per_page: pageSize",
        )
        .unwrap();
        assert_eq!(expr.filters, ["search: query", "sort: 'name'"]);
    }

    #[test]
    fn test_parse_instance_id_literal() {
        let expr =
            RepeatExpr::parse("item in shelf.books | items_per_page: 5 : 'books'").unwrap();
        assert_eq!(expr.instance_id.as_deref(), Some("books"));

        let expr =
            RepeatExpr::parse("item in shelf.books | items_per_page: 5 : \"books\"").unwrap();
        assert_eq!(expr.instance_id.as_deref(), Some("books"));
    }

    #[test]
    fn test_parse_missing_stage() {
        let err = RepeatExpr::parse("item in collection").unwrap_err();
        assert_eq!(err, SetupError::MissingItemsPerPage);
        assert_eq!(
            err.to_string(),
            "paginated list: the 'items_per_page' stage must be set"
        );
    }

    #[test]
    fn test_parse_malformed_expressions() {
        for source in [
            "collection | items_per_page: 5",
            " in collection | items_per_page: 5",
            "item in  | items_per_page: 5",
            "item in collection | items_per_page:",
            "item in collection | items_per_page: 5 : ''",
            "item in collection | | items_per_page: 5",
        ] {
            let err = RepeatExpr::parse(source).unwrap_err();
            assert_eq!(
                err,
                SetupError::BadRepeatExpression {
                    expr: source.to_owned()
                },
                "source: {source}"
            );
        }
    }

    #[test]
    fn test_similarly_named_stage_is_a_filter() {
        let expr = RepeatExpr::parse(
            "item in collection | items_per_page_hint: 3 | items_per_page: 5",
        )
        .unwrap();
        assert_eq!(expr.filters, ["items_per_page_hint: 3"]);
        assert_eq!(expr.page_size, SizeExpr::Literal(5));
    }

    #[test]
    fn test_setup_matching_id() {
        let list = ListBinding::setup_with_id(
            "item in collection | items_per_page: 5 : 'c1'",
            "c1",
        )
        .unwrap();
        assert_eq!(list.instance_id(), "c1");
        assert_eq!(list.page_size(), 5);
    }

    #[test]
    fn test_setup_mismatched_id() {
        let err = ListBinding::setup_with_id(
            "item in collection | items_per_page: 3 : 'id2'",
            "id1",
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "the items_per_page id argument (id: id2) does not match a registered pagination id"
        );
    }

    #[test]
    fn test_setup_id_literal_without_attribute() {
        let err = ListBinding::setup("item in collection | items_per_page: 3 : 'books'")
            .unwrap_err();
        assert_eq!(err, SetupError::UnmatchedInstanceId { id: "books".to_owned() });
    }

    #[test]
    fn test_binding_size_defaults_to_unpaged_until_evaluated() {
        let mut list =
            ListBinding::setup("item in collection | items_per_page: pageSize").unwrap();
        assert_eq!(list.page_size(), 0);
        list.set_page_size(25);
        assert_eq!(list.page_size(), 25);
    }

    #[test]
    fn test_release_removes_registry_entry() {
        let mut ctx = PaginationContext::new();
        let list = ListBinding::setup("item in collection | items_per_page: 5").unwrap();
        let items: Vec<u32> = (0..20).collect();

        list.paginate(&mut ctx, &items);
        assert!(ctx.is_registered(DEFAULT_ID));

        list.release(&mut ctx);
        assert!(!ctx.is_registered(DEFAULT_ID));
    }
}
