//! Document listeners installed through Dioxus script evaluation.
//!
//! Each [`EvalHost::listen`] call starts one script that registers the
//! requested listeners on `document`, forwards matching events back as
//! [`DocumentEvent`](biglight_core::DocumentEvent) JSON, and removes them again when it receives
//! `"release"` (or when the owning element has left the DOM).

use biglight_core::{DocumentHost, ListenerKind, ScopeSpec, UiError, UiResult};
use dioxus::document::{self, Eval};

/// Keys forwarded to the owning component; everything else stays in JS
const FORWARDED_KEYS: &str = r#"["Enter", " ", "ArrowUp", "ArrowDown", "Escape"]"#;

/// Arrow keys whose default (scrolling) an arrow-capturing host blocks
const ARROW_KEYS: &str = r#"["ArrowUp", "ArrowDown"]"#;

const SCRIPT_PRELUDE: &str = r#"
const inside = [__INSIDE_IDS__];
const forwarded = __KEYS__;
const captured = __CAPTURED__;
const parts = () => inside.map((id) => document.getElementById(id)).filter((el) => el !== null);
const handlers = [];
const cleanup = () => {
    for (const [name, handler] of handlers) {
        document.removeEventListener(name, handler);
    }
    handlers.length = 0;
};
const listen = (name, handler) => {
    document.addEventListener(name, handler);
    handlers.push([name, handler]);
};
"#;

const POINTER_HANDLER: &str = r#"
listen("__EVENT__", (event) => {
    const els = parts();
    if (els.length === 0) { cleanup(); return; }
    if (!els.some((el) => el.contains(event.target))) {
        dioxus.send({ type: "pointer_down_outside" });
    }
});
"#;

const KEY_HANDLER: &str = r#"
listen("__EVENT__", (event) => {
    if (parts().length === 0) { cleanup(); return; }
    if (!forwarded.includes(event.key)) { return; }
    if (captured.includes(event.key)) { event.preventDefault(); }
    dioxus.send({ type: "key", key: event.key });
});
"#;

const SCRIPT_EPILOGUE: &str = r#"
await dioxus.recv();
cleanup();
"#;

/// Build the listener script for one open scope.
///
/// A pointer-down counts as outside unless one of the `inside` elements
/// contains its target. Once none of them are in the DOM any more the
/// listeners remove themselves.
pub(crate) fn listen_script(inside: &[String], spec: &ScopeSpec, capture_arrows: bool) -> String {
    let ids = inside
        .iter()
        .map(|id| format!("{id:?}"))
        .collect::<Vec<_>>()
        .join(", ");
    let captured = if capture_arrows { ARROW_KEYS } else { "[]" };

    let mut script = SCRIPT_PRELUDE
        .replace("__INSIDE_IDS__", &ids)
        .replace("__KEYS__", FORWARDED_KEYS)
        .replace("__CAPTURED__", captured);
    for kind in &spec.listeners {
        let handler = match kind {
            ListenerKind::PointerDown => POINTER_HANDLER,
            ListenerKind::KeyDown => KEY_HANDLER,
        };
        script.push_str(&handler.replace("__EVENT__", kind.dom_event()));
    }
    script.push_str(SCRIPT_EPILOGUE);
    script
}

/// [`DocumentHost`] for one component instance, identified by the DOM ids
/// of the elements that count as inside it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalHost {
    inside: Vec<String>,
    capture_arrows: bool,
}

impl EvalHost {
    /// Host whose inside is the element with `root_id` and its subtree
    pub fn new(root_id: impl Into<String>) -> Self {
        Self::with_inside([root_id.into()])
    }

    /// Host whose inside is the union of several subtrees
    pub fn with_inside(ids: impl IntoIterator<Item = String>) -> Self {
        Self {
            inside: ids.into_iter().collect(),
            capture_arrows: false,
        }
    }

    /// Stop arrow keys from scrolling the page while the scope is held
    pub fn capturing_arrows(mut self) -> Self {
        self.capture_arrows = true;
        self
    }

    pub fn inside(&self) -> &[String] {
        &self.inside
    }
}

impl DocumentHost for EvalHost {
    type Handle = Eval;

    fn listen(&self, spec: &ScopeSpec) -> Eval {
        tracing::trace!(inside = ?self.inside, listeners = ?spec.listeners, "installing document listeners");
        document::eval(&listen_script(&self.inside, spec, self.capture_arrows))
    }

    fn unlisten(&self, handle: Eval) -> UiResult<()> {
        handle
            .send("release")
            .map_err(|e| UiError::Document(format!("{e:?}")))
    }

    fn lock_scroll(&self, locked: bool) -> UiResult<()> {
        let overflow = if locked { "hidden" } else { "" };
        document::eval(&format!(r#"document.body.style.overflow = "{overflow}";"#));
        Ok(())
    }
}
