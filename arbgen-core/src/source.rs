//! The process-wide random source.
//!
//! One [`Context`] is shared by every facade call in the process. It is
//! seeded from operating system entropy by [`init`], exactly once, and
//! must be initialised before the first facade call: using it earlier is
//! a programming error reported as [`ArbgenError::Uninitialized`].
//!
//! Draws from several threads are serialised by a mutex. Code that
//! generates heavily from many threads should give each thread its own
//! [`Context`] instead.
//!
//! Facade calls nest. A strategy or predicate running under the facade may
//! call the facade again on the same thread: the nested call draws from a
//! per-thread context configured like the shared one, entropy-seeded, and
//! never waits on the lock its caller already holds.

use std::cell::{Cell, RefCell};
use std::sync::{Mutex, OnceLock};

use tracing::{debug, trace};

use crate::{context::Context, data::Config, error::*};

struct Source {
    shared: Mutex<Context>,
    config: Config,
}

static SOURCE: OnceLock<Source> = OnceLock::new();

thread_local! {
    static DEPTH: Cell<usize> = const { Cell::new(0) };
    static NESTED: RefCell<Vec<Context>> = const { RefCell::new(Vec::new()) };
}

/// Seed the process-wide source with the default configuration.
pub fn init() -> Result<()> {
    init_with(Config::default())
}

/// Seed the process-wide source with the given configuration.
///
/// Fails with `AlreadyInitialized` if the source has already been seeded.
pub fn init_with(config: Config) -> Result<()> {
    let mut fresh = false;
    SOURCE.get_or_init(|| {
        fresh = true;
        Source {
            shared: Mutex::new(Context::with_config(config.clone())),
            config: config.clone(),
        }
    });

    if fresh {
        debug!(retry_budget = config.retry_budget, "seeded process-wide random source");
        Ok(())
    } else {
        Err(ArbgenError::AlreadyInitialized)
    }
}

/// Whether [`init`] has been called.
pub fn is_initialized() -> bool {
    SOURCE.get().is_some()
}

/// Run `f` with exclusive access to the process-wide context.
///
/// Called from inside another `with_context` on the same thread, `f` gets
/// a per-thread nested context instead of the shared one.
pub fn with_context<R, F>(f: F) -> Result<R>
where
    F: FnOnce(&mut Context) -> R,
{
    let source = SOURCE.get().ok_or(ArbgenError::Uninitialized)?;
    let depth = Depth::enter();

    if depth.outer > 0 {
        let mut ctx = NESTED
            .with(|pool| pool.borrow_mut().pop())
            .unwrap_or_else(|| {
                trace!(depth = depth.outer, "creating nested random source");
                Context::with_config(source.config.clone())
            });
        let value = f(&mut ctx);
        NESTED.with(|pool| pool.borrow_mut().push(ctx));
        return Ok(value);
    }

    // A panic while drawing cannot leave the engine in an invalid state.
    let mut shared = source
        .shared
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    Ok(f(&mut shared))
}

/// Nesting level of `with_context` on this thread, restored on drop.
struct Depth {
    outer: usize,
}

impl Depth {
    fn enter() -> Self {
        let outer = DEPTH.with(|depth| depth.replace(depth.get() + 1));
        Depth { outer }
    }
}

impl Drop for Depth {
    fn drop(&mut self) {
        DEPTH.with(|depth| depth.set(self.outer));
    }
}
