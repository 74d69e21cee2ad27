//! Animation-overlay application and scroll-trigger state.

use std::collections::HashSet;

use parking_lot::Mutex;

use manara_types::BlockAnimations;

use crate::tree::VisualNode;

/// Apply an animation overlay to a block wrapper in view mode.
///
/// Entrance and hover animations become CSS classes; duration/delay become
/// inline animation properties. A scroll-deferred entrance gets the
/// `scroll-animate` marker instead of the live entrance class — the class
/// is added on first intersection (see [`ScrollTriggers`]).
pub fn apply_animations(mut node: VisualNode, anim: &BlockAnimations) -> VisualNode {
    if let Some(class) = anim.entrance.css_class() {
        if anim.scroll_animation {
            node.classes.push("scroll-animate".to_string());
            node.attrs
                .insert("data-entrance".to_string(), class.to_string());
            if let Some(offset) = &anim.scroll_offset {
                node.attrs
                    .insert("data-scroll-offset".to_string(), offset.clone());
            }
        } else {
            node.classes.push(class.to_string());
        }
    }
    if let Some(class) = anim.hover.css_class() {
        node.classes.push(class.to_string());
    }
    if let Some(ms) = anim.entrance_duration_ms {
        node.styles
            .insert("animation-duration".to_string(), format!("{ms}ms"));
    }
    if let Some(ms) = anim.entrance_delay_ms {
        node.styles
            .insert("animation-delay".to_string(), format!("{ms}ms"));
    }
    for (i, elem) in anim.element_animations.iter().enumerate() {
        // Element animations ride along as data attributes; the front end
        // fans them out to matching descendants.
        let Some(class) = elem.animation.css_class() else {
            continue;
        };
        let mut spec = format!("{}:{class}", elem.selector);
        if let Some(ms) = elem.stagger_ms {
            spec.push_str(&format!(":stagger={ms}"));
        }
        node.attrs.insert(format!("data-element-animation-{i}"), spec);
    }
    node
}

/// Fire-once state for scroll-triggered entrances.
///
/// Registration happens at mount, deregistration at unmount. The
/// observation callback may report intersection any number of times;
/// [`on_intersect`](Self::on_intersect) returns `true` exactly once per
/// registered block, so the visual effect is idempotent.
#[derive(Default)]
pub struct ScrollTriggers {
    registered: Mutex<HashSet<String>>,
    fired: Mutex<HashSet<String>>,
}

impl ScrollTriggers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a block at mount. Re-registering a fired block does not
    /// re-arm it.
    pub fn register(&self, block_id: &str) {
        self.registered.lock().insert(block_id.to_string());
    }

    /// Report an intersection. Returns `true` only on the first
    /// intersection of a registered block; every later report is a no-op.
    pub fn on_intersect(&self, block_id: &str) -> bool {
        if !self.registered.lock().contains(block_id) {
            return false;
        }
        self.fired.lock().insert(block_id.to_string())
    }

    /// Deregister at unmount; no observation survives the block leaving
    /// the tree.
    pub fn deregister(&self, block_id: &str) {
        self.registered.lock().remove(block_id);
        self.fired.lock().remove(block_id);
    }

    /// Whether a block's entrance has fired.
    pub fn has_fired(&self, block_id: &str) -> bool {
        self.fired.lock().contains(block_id)
    }
}
