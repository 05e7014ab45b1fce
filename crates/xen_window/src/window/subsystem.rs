//! Process-wide windowing subsystem lifetime
//!
//! Windowing libraries keep global state that every window depends on. The
//! [`SubsystemRegistry`] hands out [`Subsystem`] leases: the first lease
//! initializes the platform, later leases share it, and dropping the last
//! lease terminates it. Acquiring again after that starts a fresh subsystem.
//!
//! Leases are reference counted with `Rc`, so a registry and its leases stay
//! on the thread that polls events.

use std::cell::{RefCell, RefMut};
use std::rc::{Rc, Weak};

use super::backend::Platform;
use super::WindowResult;

struct Shared<P: Platform> {
    platform: Rc<P>,
    context: RefCell<P::Context>,
}

impl<P: Platform> Drop for Shared<P> {
    fn drop(&mut self) {
        log::info!("Terminating windowing subsystem");
        self.platform.terminate(self.context.get_mut());
    }
}

/// Hands out shared leases on one platform's subsystem
pub struct SubsystemRegistry<P: Platform> {
    platform: Rc<P>,
    live: RefCell<Weak<Shared<P>>>,
}

impl<P: Platform> SubsystemRegistry<P> {
    /// Create a registry for `platform`; nothing is initialized yet
    pub fn new(platform: P) -> Self {
        Self {
            platform: Rc::new(platform),
            live: RefCell::new(Weak::new()),
        }
    }

    /// The platform this registry manages
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Take a lease, initializing the subsystem if no lease is live
    pub fn acquire(&self) -> WindowResult<Subsystem<P>> {
        if let Some(shared) = self.live.borrow().upgrade() {
            log::debug!(
                "Sharing live windowing subsystem ({} existing lease(s))",
                Rc::strong_count(&shared) - 1
            );
            return Ok(Subsystem { shared });
        }

        log::info!("Initializing windowing subsystem");
        let context = self.platform.initialize()?;
        let shared = Rc::new(Shared {
            platform: Rc::clone(&self.platform),
            context: RefCell::new(context),
        });
        *self.live.borrow_mut() = Rc::downgrade(&shared);

        Ok(Subsystem { shared })
    }

    /// Number of leases currently holding the subsystem
    pub fn live_leases(&self) -> usize {
        self.live.borrow().strong_count()
    }

    /// Whether the subsystem is currently initialized
    pub fn is_initialized(&self) -> bool {
        self.live_leases() > 0
    }
}

/// A lease on an initialized subsystem
///
/// The subsystem stays initialized while any lease is alive.
pub struct Subsystem<P: Platform> {
    shared: Rc<Shared<P>>,
}

impl<P: Platform> Subsystem<P> {
    /// The platform behind this lease
    pub fn platform(&self) -> &P {
        &self.shared.platform
    }

    /// Run `f` with the platform and exclusive access to its context
    ///
    /// # Panics
    /// If called re-entrantly from inside another `with_context` closure.
    pub(crate) fn with_context<R>(&self, f: impl FnOnce(&P, &mut P::Context) -> R) -> R {
        let mut context: RefMut<'_, P::Context> = self.shared.context.borrow_mut();
        f(&self.shared.platform, &mut context)
    }
}
