//! Event listener bookkeeping with release on drop.
//!
//! A registered callback must be removed from its target before the callback
//! itself is freed, or the target keeps invoking a dead function. A
//! [`ListenerSet`] removes everything it holds when cleared or dropped.

use super::activation::PointerKind;
use smallvec::SmallVec;

/// Target that listeners can be removed from.
pub trait ListenerHost {
    type Listener;

    fn remove_listener(&self, kind: PointerKind, listener: &Self::Listener);
}

pub struct ListenerSet<H: ListenerHost> {
    host: H,
    bound: SmallVec<[(PointerKind, H::Listener); 2]>,
}

impl<H: ListenerHost> ListenerSet<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            bound: SmallVec::new(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Track a listener the caller has already registered on the host.
    pub fn push(&mut self, kind: PointerKind, listener: H::Listener) {
        self.bound.push((kind, listener));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bound.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bound.is_empty()
    }

    /// Remove every listener from the host, then free it.
    pub fn clear(&mut self) {
        for (kind, listener) in self.bound.drain(..) {
            self.host.remove_listener(kind, &listener);
        }
    }
}

impl<H: ListenerHost> Drop for ListenerSet<H> {
    fn drop(&mut self) {
        self.clear();
    }
}
