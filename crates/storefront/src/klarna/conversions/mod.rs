//! Field mappings between the commerce platform and the gateway schema.

mod address;
mod order_lines;

pub use address::{checkout_address, order_address};
pub use order_lines::order_lines;
