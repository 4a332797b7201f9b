use super::*;
use super::html::{ParseOutput, is_void_tag};

mod event_dispatch;
mod form_controls;
mod query_and_classes;
mod selector_matching;
mod text_html_content;
mod tree_mutation;

pub(crate) use form_controls::{is_checkbox_input, is_form_control, is_radio_input};
