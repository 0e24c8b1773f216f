use crate::pathfinding::PageId;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::sync::Notify;

/// FIFO of pages awaiting exploration, shared by the breadth-first workers.
///
/// A worker claims a page with [`Frontier::next`] and must hand the claim
/// back with [`Frontier::complete`]. The frontier closes itself once it is
/// empty and nobody holds a claim, which is how workers learn the graph is
/// exhausted.
///
/// `capacity` is a soft bound: producers wait for room instead of dropping
/// pages, except that the last worker to block may overflow it so the pool
/// can never wait on itself.
pub struct Frontier {
    state: Mutex<FrontierState>,
    /// Signalled when pages are queued, a claim is released or the frontier closes
    work_ready: Notify,
    /// Signalled when a consumer takes a page or the frontier closes
    room: Notify,
    capacity: usize,
    workers: usize,
}

#[derive(Default)]
struct FrontierState {
    queue: VecDeque<PageId>,
    claimed: usize,
    blocked_producers: usize,
    closed: bool,
}

impl Frontier {
    pub fn new(capacity: usize, workers: usize) -> Self {
        Self {
            state: Mutex::new(FrontierState::default()),
            work_ready: Notify::new(),
            room: Notify::new(),
            capacity: capacity.max(1),
            workers: workers.max(1),
        }
    }

    pub fn seed(&self, page: PageId) {
        self.lock().queue.push_back(page);
        self.work_ready.notify_waiters();
    }

    /// Waits for the next page. `None` means the frontier is closed.
    pub async fn next(&self) -> Option<PageId> {
        loop {
            let notified = self.work_ready.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            {
                let mut state = self.lock();
                if state.closed {
                    return None;
                }
                if let Some(page) = state.queue.pop_front() {
                    state.claimed += 1;
                    drop(state);
                    self.room.notify_waiters();
                    return Some(page);
                }
                if state.claimed == 0 {
                    state.closed = true;
                    drop(state);
                    self.notify_all();
                    return None;
                }
            }

            notified.await;
        }
    }

    /// Queues `discovered` and releases the caller's claim, waiting for room
    /// while the frontier is over capacity.
    pub async fn complete(&self, discovered: Vec<PageId>) {
        let mut pending = discovered.into_iter();

        loop {
            // Registered before the capacity check so a pop in between is not missed
            let room = self.room.notified();
            tokio::pin!(room);
            room.as_mut().enable();

            let queued_any = {
                let mut state = self.lock();
                if state.closed {
                    return;
                }

                // Everyone else is stuck pushing: nobody is left to drain
                let overflow = state.blocked_producers + 1 >= self.workers;
                let queued_before = state.queue.len();
                while overflow || state.queue.len() < self.capacity {
                    match pending.next() {
                        Some(page) => state.queue.push_back(page),
                        None => break,
                    }
                }

                if pending.len() == 0 {
                    state.claimed = state.claimed.saturating_sub(1);
                    drop(state);
                    self.work_ready.notify_waiters();
                    return;
                }
                state.blocked_producers += 1;
                state.queue.len() > queued_before
            };

            if queued_any {
                self.work_ready.notify_waiters();
            }
            room.await;
            let mut state = self.lock();
            state.blocked_producers = state.blocked_producers.saturating_sub(1);
        }
    }

    /// Stops the frontier; pending and future `next` calls return `None`.
    pub fn close(&self) {
        self.lock().closed = true;
        self.notify_all();
    }

    pub fn len(&self) -> usize {
        self.lock().queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn notify_all(&self) {
        self.work_ready.notify_waiters();
        self.room.notify_waiters();
    }

    fn lock(&self) -> MutexGuard<'_, FrontierState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
