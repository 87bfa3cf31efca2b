//! Cancellation token tying scheduled frame callbacks to a controller's life.
//!
//! Frame requests cannot be revoked once handed to the browser, so every
//! callback carries a [`LifetimeToken`] and checks it before touching state.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug)]
pub struct Lifetime {
    alive: Rc<Cell<bool>>,
}

#[derive(Clone, Debug)]
pub struct LifetimeToken {
    alive: Rc<Cell<bool>>,
}

impl Lifetime {
    pub fn new() -> Self {
        Self {
            alive: Rc::new(Cell::new(true)),
        }
    }

    pub fn token(&self) -> LifetimeToken {
        LifetimeToken {
            alive: self.alive.clone(),
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive.get()
    }

    /// Idempotent.
    pub fn end(&self) {
        self.alive.set(false);
    }
}

impl Default for Lifetime {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Lifetime {
    fn drop(&mut self) {
        self.alive.set(false);
    }
}

impl LifetimeToken {
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive.get()
    }
}
