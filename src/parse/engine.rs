//! Routing of child elements between namespace handlers.
//!
//! Whichever handler is walking an element's children (the root RSS or
//! Atom handler, or a vendor handler with nested structure) hands each
//! child to `dispatch_feed` / `dispatch_item` with itself as `current`:
//!
//! 1. no namespace, or `current`'s own namespace: `current` handles it
//! 2. a namespace the registry knows: that handler handles it
//! 3. anything else: the subtree is skipped and recorded as unknown
//!
//! Whatever route is taken, the child is fully consumed when dispatch
//! returns.

use super::{ParseContext, StartTag};
use crate::error::Result;
use crate::model::{Feed, Item};
use crate::namespace::NamespaceHandler;

enum Route<'r> {
    Current,
    Delegate(&'r dyn NamespaceHandler),
    Unknown,
}

impl<'a> ParseContext<'a> {
    /// Routes a channel-level element to the handler for its namespace.
    pub fn dispatch_feed(
        &mut self,
        current: &dyn NamespaceHandler,
        feed: &mut Feed,
        tag: &StartTag,
    ) -> Result<()> {
        match self.route(current, tag) {
            Route::Current => current.process_feed(self, feed, tag)?,
            Route::Delegate(handler) => handler.process_feed(self, feed, tag)?,
            Route::Unknown => self.skip_unknown(tag)?,
        }
        self.check_balanced(tag);
        Ok(())
    }

    /// Routes an episode-level element to the handler for its namespace.
    pub fn dispatch_item(
        &mut self,
        current: &dyn NamespaceHandler,
        item: &mut Item,
        tag: &StartTag,
    ) -> Result<()> {
        match self.route(current, tag) {
            Route::Current => current.process_item(self, item, tag)?,
            Route::Delegate(handler) => handler.process_item(self, item, tag)?,
            Route::Unknown => self.skip_unknown(tag)?,
        }
        self.check_balanced(tag);
        Ok(())
    }

    fn route(&self, current: &dyn NamespaceHandler, tag: &StartTag) -> Route<'a> {
        let uri = tag.namespace();
        if uri.trim().is_empty() || current.recognizes(uri) {
            return Route::Current;
        }
        match self.registry().resolve(uri) {
            // Handlers are compared by namespace; unit structs share addresses.
            Some(handler) if handler.namespace() == current.namespace() => Route::Current,
            Some(handler) => {
                tracing::trace!(
                    from = current.prefix(),
                    to = handler.prefix(),
                    element = tag.local_name(),
                    "Delegating element"
                );
                Route::Delegate(handler)
            }
            None => Route::Unknown,
        }
    }

    fn check_balanced(&self, tag: &StartTag) {
        debug_assert_eq!(
            self.depth() + 1,
            tag.depth(),
            "handler for <{}> did not consume exactly its element",
            tag.qualified_name()
        );
    }
}
