//! Shared component lifecycle
//!
//! Every piece of page chrome follows the same three phases: configure,
//! render, mount. [`Fragment`] describes what a component renders and
//! where it lands; [`mount`] performs the idempotent insertion;
//! [`install`] defers the mount until the document has finished parsing
//! when the host is still loading.

use crate::dom::{Document, ReadyState};
use crate::markup::Element;

/// Where a fragment is inserted relative to existing body children
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// First child of the body
    BodyStart,
    /// Last child of the body
    BodyEnd,
}

/// Outcome of a mount attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountOutcome {
    /// The fragment and its styles were inserted
    Inserted,
    /// An element with the fragment's marker class was already present
    AlreadyMounted,
}

/// A renderable piece of page chrome
pub trait Fragment {
    /// Class marking an already-mounted instance in the body
    fn marker_class(&self) -> &'static str;

    /// Insertion point relative to existing body children
    fn placement(&self) -> Placement;

    /// Build the markup tree for the current location path
    fn markup(&self, current_path: &str) -> Element;

    /// Stylesheet accompanying the fragment
    fn styles(&self) -> &'static str;
}

/// Mount a fragment into the document exactly once
///
/// When an element carrying the fragment's marker class is already in
/// the body, nothing is inserted; neither the fragment nor its style
/// element is duplicated by re-evaluation.
pub fn mount(doc: &mut Document, fragment: &impl Fragment) -> MountOutcome {
    let marker = fragment.marker_class();
    if doc.body_has_class(marker) {
        tracing::debug!(marker, "Fragment already mounted, skipping");
        return MountOutcome::AlreadyMounted;
    }

    let markup = fragment.markup(&doc.location().path);
    doc.append_style(fragment.styles());
    match fragment.placement() {
        Placement::BodyStart => doc.prepend_body_child(markup),
        Placement::BodyEnd => doc.append_body_child(markup),
    }
    tracing::debug!(marker, placement = ?fragment.placement(), "Fragment mounted");
    MountOutcome::Inserted
}

/// Mount now, or once the document's content has been parsed
///
/// Reads the ready state from the document: while it is still
/// `loading`, the mount is registered as a one-shot content-parsed
/// callback; otherwise it runs synchronously.
pub fn install(doc: &mut Document, fragment: impl Fragment + 'static) {
    if doc.ready_state() == ReadyState::Loading {
        tracing::trace!(
            marker = fragment.marker_class(),
            "Deferring mount until content is parsed"
        );
        doc.on_content_parsed(move |d| {
            mount(d, &fragment);
        });
    } else {
        mount(doc, &fragment);
    }
}
