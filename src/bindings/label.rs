use super::*;
use std::task::{Context, Poll};

/// Updates group label nodes. Html content is rendered after one executor turn.
///
/// `None` leaves the nodes alone. [`LabelContent::Hidden`] marks every node with
/// `hidden_class` and keeps its content. Html replaces each node's children and
/// clears `hidden_class`. An empty `nodes` slice is a no-op.
pub async fn update_label(
    dom: &mut Dom,
    label: Option<&LabelContent>,
    nodes: &[NodeId],
    hidden_class: &str,
) -> Result<()> {
    let Some(label) = label else {
        return Ok(());
    };
    if nodes.is_empty() {
        tracing::trace!(target: "input_bindings::radio", "no label node to update");
        return Ok(());
    }

    match label {
        LabelContent::Hidden => {
            for node in nodes {
                dom.class_add(*node, hidden_class)?;
            }
        }
        LabelContent::Html(html) => {
            YieldNow::default().await;
            for node in nodes {
                dom.set_inner_html(*node, html)?;
                dom.class_remove(*node, hidden_class)?;
            }
        }
    }
    Ok(())
}

#[derive(Debug, Default)]
struct YieldNow {
    yielded: bool,
}

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.yielded {
            return Poll::Ready(());
        }
        self.yielded = true;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}
