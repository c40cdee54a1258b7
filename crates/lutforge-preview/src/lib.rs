//! # lutforge-preview
//!
//! Frame scheduling for live grading preview.
//!
//! Per-frame transforms run on the same execution context as everything
//! else (single-threaded cooperative scheduling), so the invariants are
//! structural rather than lock-based:
//!
//! - at most one full-frame transform is in flight at a time
//! - a newly scheduled transform supersedes any pending one; results are
//!   committed only if their [`Generation`] token is still current
//!   (latest-wins, no queue buildup)
//! - the buffer being graded is always a fresh copy of the last captured
//!   frame, never the buffer being presented
//! - stopping halts further scheduling synchronously and releases the
//!   capture source
//!
//! The camera itself lives behind the [`FrameSource`] seam; a
//! [`SyntheticSource`] ships for tests and the CLI preview command.

pub mod scheduler;
pub mod source;

pub use scheduler::{Generation, Scheduler};
pub use source::{FrameSource, SyntheticSource};

use lutforge_core::{ColorGrade, ImageBuf};
use tracing::trace;

/// A capture source paired with a grade and a scheduler.
pub struct PreviewSession<S, G> {
    source: S,
    grade: G,
    scheduler: Scheduler,
}

impl<S: FrameSource, G: ColorGrade> PreviewSession<S, G> {
    /// Creates a session over a source and a grade.
    pub fn new(source: S, grade: G) -> Self {
        Self { source, grade, scheduler: Scheduler::new() }
    }

    /// Access to the scheduler, e.g. to invalidate after a parameter
    /// change.
    pub fn scheduler_mut(&mut self) -> &mut Scheduler {
        &mut self.scheduler
    }

    /// Captures, grades, and returns the next frame.
    ///
    /// Returns `None` when the session is stopped, the source is
    /// exhausted (the session then stops itself), or the result was
    /// superseded before commit.
    pub fn render_next(&mut self) -> Option<ImageBuf> {
        if self.scheduler.is_stopped() {
            return None;
        }
        let token = self.scheduler.schedule();
        let Some(frame) = self.source.next_frame() else {
            self.stop();
            return None;
        };
        // Fresh copy: the captured buffer is never graded in place.
        let mut working = frame.clone();
        working.apply_grade(&self.grade);
        if self.scheduler.is_current(token) {
            trace!(generation = token.value(), "frame committed");
            Some(working)
        } else {
            trace!(generation = token.value(), "frame superseded, dropped");
            None
        }
    }

    /// Stops the session: no further frames are scheduled and the source
    /// is released immediately.
    pub fn stop(&mut self) {
        self.scheduler.stop();
        self.source.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lutforge_grade::GradeParams;

    #[test]
    fn session_renders_graded_frames() {
        let source = SyntheticSource::new(16, 8).unwrap();
        let grade = GradeParams { exposure: 1.0, ..Default::default() };
        let mut session = PreviewSession::new(source, grade);
        let frame = session.render_next().expect("first frame");
        assert_eq!(frame.width(), 16);
        // one stop up: the graded frame is brighter than the source
        let source_frame = SyntheticSource::new(16, 8).unwrap().next_frame().unwrap().clone();
        let brighter = frame
            .data()
            .iter()
            .zip(source_frame.data().iter())
            .step_by(4)
            .all(|(a, b)| a >= b);
        assert!(brighter);
    }

    #[test]
    fn stop_halts_and_releases() {
        let source = SyntheticSource::new(4, 4).unwrap();
        let mut session = PreviewSession::new(source, GradeParams::default());
        assert!(session.render_next().is_some());
        session.stop();
        assert!(session.render_next().is_none());
    }

    #[test]
    fn exhausted_source_stops_the_session() {
        let source = SyntheticSource::new(4, 4).unwrap().with_frame_limit(2);
        let mut session = PreviewSession::new(source, GradeParams::default());
        assert!(session.render_next().is_some());
        assert!(session.render_next().is_some());
        assert!(session.render_next().is_none());
        assert!(session.render_next().is_none());
    }
}
