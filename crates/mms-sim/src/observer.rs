//! Run observer trait for progress reporting and data collection.

use mms_core::SimConfig;

use crate::{Entity, Report};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points of a run.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — wait counter
///
/// ```rust,ignore
/// struct WaitCounter(usize);
///
/// impl SimObserver for WaitCounter {
///     fn on_entity(&mut self, entity: &Entity) {
///         if entity.waited() {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once after validation, before any sample is drawn.
    fn on_run_start(&mut self, _config: &SimConfig) {}

    /// Called for each entity, in arrival order, once it has a server.
    fn on_entity(&mut self, _entity: &Entity) {}

    /// Called once with the finished report.
    fn on_run_end(&mut self, _report: &Report) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
