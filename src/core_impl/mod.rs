use super::*;

mod dom;
mod harness;
mod html;

pub use harness::Harness;
pub(crate) use html::parse_html;
