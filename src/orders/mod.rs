//! Order domain logic
//!
//! The rules that make an order record internally consistent, kept apart
//! from the HTTP and storage layers:
//!
//! - [`order_id`] - human-readable reference generation (`EG` + 10 digits)
//! - [`paging`] - offset pagination math shared by the listing endpoints
//! - [`query`] - listing filter/sort parameters and the sort whitelist
//! - [`export`] - CSV report assembly

pub mod export;
pub mod order_id;
pub mod paging;
pub mod query;

pub use export::orders_to_csv;
pub use order_id::generate_order_id;
pub use paging::Pagination;
pub use query::OrderListQuery;
