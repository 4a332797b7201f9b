//! Input bindings that keep DOM form controls in sync with a server-driven model.
//!
//! The crate ships the radio-group binding together with the deterministic DOM
//! store it operates on: an arena tree, an HTML fragment parser, a selector
//! engine and namespaced event listeners. [`Harness`] owns a page and drives user
//! actions against it.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::rc::Rc;

mod bindings;
mod core_dom_utils;
mod core_impl;
mod events;
mod selector;

pub use bindings::{
    ChangeCallback, InputBinding, LabelContent, LocalBoxFuture, OptionsPayload, RadioInputBinding,
    RadioMarkup, RadioMessage, RadioState, RatePolicy, SelectionValue, ValueLabel,
    choice_label, escape_selector, render_options, set_choice_label, update_label,
};
pub use core_dom_utils::{Dom, Error, NodeId, Result};
pub use core_impl::Harness;
pub use events::{EventSpec, EventState};

pub(crate) use core_dom_utils::*;
pub(crate) use events::*;
pub(crate) use selector::*;
