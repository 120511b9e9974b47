pub mod invoice;
pub mod line_item;

pub use invoice::{DocumentType, Invoice};
pub use line_item::LineItem;
