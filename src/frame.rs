//! Cancellable render loop bookkeeping.
//!
//! The host owns the actual frame primitive (`requestAnimationFrame` in the
//! browser); [`FrameLoop`] tracks whether the loop should keep going and
//! which request is pending, so a pause always cancels it and a resume never
//! stacks a second one.

use std::cell::Cell;

/// Something that can schedule and cancel a single next-frame callback.
pub trait FrameHost {
    type Error;

    fn request_frame(&self) -> Result<i32, Self::Error>;
    fn cancel_frame(&self, id: i32);
}

#[derive(Debug, Default)]
pub struct FrameLoop {
    running: Cell<bool>,
    pending: Cell<Option<i32>>,
}

impl FrameLoop {
    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    pub fn pending(&self) -> Option<i32> {
        self.pending.get()
    }

    /// Starts the loop unless it is already running.
    pub fn resume<H: FrameHost>(&self, host: &H) -> Result<(), H::Error> {
        if self.running.replace(true) {
            return Ok(());
        }
        self.schedule(host)
    }

    pub fn pause<H: FrameHost>(&self, host: &H) {
        self.running.set(false);
        if let Some(id) = self.pending.take() {
            host.cancel_frame(id);
        }
    }

    /// Called at the top of a frame callback. `false` means the frame must
    /// not compute or draw anything.
    pub fn begin_frame(&self) -> bool {
        self.pending.set(None);
        self.running.get()
    }

    /// Requests the next frame if the loop is still running.
    pub fn reschedule<H: FrameHost>(&self, host: &H) -> Result<(), H::Error> {
        if !self.running.get() {
            return Ok(());
        }
        self.schedule(host).inspect_err(|_| self.running.set(false))
    }

    fn schedule<H: FrameHost>(&self, host: &H) -> Result<(), H::Error> {
        let id = host.request_frame()?;
        self.pending.set(Some(id));
        Ok(())
    }
}
