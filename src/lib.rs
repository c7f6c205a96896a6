//! Client-side pagination for collections rendered with egui.
//!
//! Three cooperating pieces:
//!
//! - the slice filter ([`slice::items_per_page`], usually reached through a
//!   [`ListBinding`]) cuts one page out of a collection and records the
//!   totals in shared state;
//! - the [`PaginationContext`] registry keys that state by instance id, so
//!   several independent paginated lists can live in one view;
//! - [`PaginationControls`] reads the state, renders a windowed row of page
//!   links (with ellipsis truncation) and writes page changes back.
//!
//! Per frame, paginate first and show the controls second - the filter
//! finishes its state writes before the controls read them:
//!
//! ```
//! use egui_paginate::{ListBinding, PaginationContext};
//!
//! let mut pg = PaginationContext::new();
//! let list = ListBinding::setup("item in items | items_per_page: 10")?;
//!
//! let items: Vec<u32> = (1..=95).collect();
//! let page = list.paginate(&mut pg, &items);
//! assert_eq!(page.len(), 10);
//! assert_eq!(pg.get(list.instance_id()).unwrap().last_page(), 10);
//! # Ok::<(), egui_paginate::SetupError>(())
//! ```
//!
//! Wiring mistakes (a repeat expression without the `items_per_page` stage,
//! controls without a matching list, an instance-id mismatch) fail fast at
//! setup with a [`SetupError`]; runtime data edge cases clamp instead.

pub mod binding;
pub mod error;
pub mod links;
pub mod slice;
pub mod state;
pub mod style;
pub mod view;

pub use binding::{ListBinding, RepeatExpr, SizeExpr};
pub use error::SetupError;
pub use links::{link_row, page_items, PageItem, PageLink, DEFAULT_MAX_SIZE, MIN_MAX_SIZE};
pub use slice::{items_per_page, items_per_page_with_total};
pub use state::{PageCell, PageState, PaginationContext, DEFAULT_ID};
pub use view::{ControlsResponse, PaginationControls};
