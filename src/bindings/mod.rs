use super::*;
use std::future::Future;
use std::pin::Pin;

mod escape;
mod label;
mod options;
mod radio;
mod value;

pub use escape::escape_selector;
pub use label::update_label;
pub use options::render_options;
pub use radio::{RadioInputBinding, RadioMarkup, choice_label, set_choice_label};
pub use value::{
    LabelContent, OptionsPayload, RadioMessage, RadioState, SelectionValue, ValueLabel,
};

/// A boxed future that may borrow from its caller and is not `Send`.
pub type LocalBoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Framework callback invoked on change. The flag asks for rate-limited delivery.
pub type ChangeCallback = Box<dyn FnMut(bool)>;

/// How a dispatcher should rate-limit value reports for a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "policy", rename_all = "lowercase")]
pub enum RatePolicy {
    Debounce { delay: u64 },
    Throttle { delay: u64 },
}

/// Adapter between one widget family and the value/update protocol.
///
/// Values cross this boundary as JSON so a dispatcher can hold heterogeneous
/// bindings as `Box<dyn InputBinding>`. Bindings keep no per-element state; every
/// call re-derives what it needs from the [`Dom`].
pub trait InputBinding {
    /// Widget containers among the descendants of `scope`, in document order.
    fn find(&self, dom: &Dom, scope: NodeId) -> Result<Vec<NodeId>>;

    fn get_id(&self, dom: &Dom, el: NodeId) -> Option<String> {
        dom.attr(el, "data-input-id")
            .or_else(|| dom.attr(el, "id"))
            .filter(|id| !id.is_empty())
    }

    fn get_type(&self, _dom: &Dom, _el: NodeId) -> Option<String> {
        None
    }

    fn get_value(&self, dom: &Dom, el: NodeId) -> Result<serde_json::Value>;

    fn set_value(&self, dom: &mut Dom, el: NodeId, value: serde_json::Value) -> Result<()>;

    fn get_state(&self, dom: &Dom, el: NodeId) -> Result<serde_json::Value>;

    /// Applies a partial server update. The future resolves once every part of the
    /// update, including asynchronous label rendering, has landed in the DOM.
    fn receive_message<'a>(
        &'a self,
        dom: &'a mut Dom,
        el: NodeId,
        data: serde_json::Value,
    ) -> LocalBoxFuture<'a, Result<()>>;

    fn subscribe(&self, dom: &mut Dom, el: NodeId, callback: ChangeCallback) -> Result<()>;

    fn unsubscribe(&self, dom: &mut Dom, el: NodeId) -> Result<()>;

    fn get_rate_policy(&self) -> Option<RatePolicy> {
        None
    }
}
