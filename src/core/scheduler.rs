use std::collections::VecDeque;

/// Identifies one requested frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(pub(crate) u64);

/// Trait for hosts that call back once per display refresh
///
/// The host fires a requested frame at most once, on its next refresh, by
/// handing the handle back to [`SimulationLoop::on_frame`](crate::core::SimulationLoop::on_frame).
pub trait FrameScheduler {
    /// Requests a callback on the next refresh
    fn request_frame(&mut self) -> FrameHandle;

    /// Withdraws a requested callback. Unknown or fired handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// A scheduler driven explicitly by its owner
///
/// Requested frames queue up until the owner fires them with
/// [`next_frame`](ManualScheduler::next_frame), one per refresh tick.
#[derive(Debug)]
pub struct ManualScheduler {
    next_id: u64,
    pending: VecDeque<FrameHandle>,
}

impl ManualScheduler {
    /// Creates a scheduler with nothing pending
    pub fn new() -> Self {
        Self {
            next_id: 1,
            pending: VecDeque::new(),
        }
    }

    /// Takes the oldest requested frame, if any
    pub fn next_frame(&mut self) -> Option<FrameHandle> {
        self.pending.pop_front()
    }

    /// Number of frames requested and not yet fired or cancelled
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next_id);
        self.next_id += 1;
        self.pending.push_back(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.retain(|&pending| pending != handle);
    }
}
