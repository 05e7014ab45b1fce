//! In-memory platform for tests
//!
//! Records every request the window manager makes, counts subsystem and
//! handle lifetimes, and can be told to fail at each fallible step.

use std::cell::{Ref, RefCell, RefMut};
use std::collections::VecDeque;
use std::rc::Rc;

use super::backend::{HandleDescriptor, NativeHandle, Platform};
use super::{WindowError, WindowEvent, WindowResult};

#[derive(Debug, Default)]
pub(crate) struct MockState {
    pub init_calls: usize,
    pub terminate_calls: usize,
    pub poll_calls: usize,
    pub handles_created: usize,
    pub handles_destroyed: usize,
    pub current_handle: Option<usize>,
    pub swap_interval: Option<u32>,
    pub requested_context: Option<(u32, u32)>,
    pub live_handles_at_terminate: Option<usize>,
    pub fail_initialize: bool,
    pub fail_create: bool,
    pub fail_title_copy: bool,
}

impl MockState {
    pub fn live_handles(&self) -> usize {
        self.handles_created - self.handles_destroyed
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct MockPlatform {
    state: Rc<RefCell<MockState>>,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> Ref<'_, MockState> {
        self.state.borrow()
    }

    pub fn state_mut(&self) -> RefMut<'_, MockState> {
        self.state.borrow_mut()
    }
}

#[derive(Debug)]
pub(crate) struct MockContext;

#[derive(Debug)]
pub(crate) struct MockHandle {
    pub id: usize,
    pub title: String,
    pub size: (u32, u32),
    pub resizable: bool,
    pub should_close: bool,
    pub size_requests: Vec<(u32, u32)>,
    pub swaps: usize,
    events: VecDeque<WindowEvent>,
    state: Rc<RefCell<MockState>>,
}

impl MockHandle {
    /// Queue an event as if the platform had reported it
    pub fn push_event(&mut self, event: WindowEvent) {
        self.events.push_back(event);
    }
}

impl Platform for MockPlatform {
    type Context = MockContext;
    type Handle = MockHandle;

    fn initialize(&self) -> WindowResult<MockContext> {
        let mut state = self.state.borrow_mut();
        if state.fail_initialize {
            return Err(WindowError::InitializationFailed);
        }
        state.init_calls += 1;
        Ok(MockContext)
    }

    fn terminate(&self, _context: &mut MockContext) {
        let mut state = self.state.borrow_mut();
        state.terminate_calls += 1;
        state.live_handles_at_terminate = Some(state.live_handles());
    }

    fn create_handle(
        &self,
        _context: &mut MockContext,
        descriptor: &HandleDescriptor<'_>,
    ) -> WindowResult<MockHandle> {
        let mut state = self.state.borrow_mut();
        state.requested_context = Some((
            descriptor.context.version_major,
            descriptor.context.version_minor,
        ));
        if state.fail_create {
            return Err(WindowError::CreationFailed);
        }
        state.handles_created += 1;

        Ok(MockHandle {
            id: state.handles_created,
            title: descriptor.title.to_string(),
            size: (descriptor.width, descriptor.height),
            resizable: descriptor.resizable,
            should_close: false,
            size_requests: Vec::new(),
            swaps: 0,
            events: VecDeque::new(),
            state: Rc::clone(&self.state),
        })
    }

    fn poll_events(&self, _context: &mut MockContext) {
        self.state.borrow_mut().poll_calls += 1;
    }

    fn set_swap_interval(&self, _context: &mut MockContext, interval: u32) {
        self.state.borrow_mut().swap_interval = Some(interval);
    }

    fn copy_title(&self, title: &str) -> WindowResult<String> {
        if self.state.borrow().fail_title_copy {
            return Err(WindowError::TitleAllocation { len: title.len() });
        }
        Ok(title.to_string())
    }
}

impl NativeHandle for MockHandle {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.size = (width, height);
        self.size_requests.push((width, height));
    }

    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn make_current(&mut self) {
        self.state.borrow_mut().current_handle = Some(self.id);
    }

    fn should_close(&self) -> bool {
        self.should_close
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.should_close = should_close;
    }

    fn swap_buffers(&mut self) {
        self.swaps += 1;
    }

    fn drain_events(&mut self) -> Vec<WindowEvent> {
        self.events.drain(..).collect()
    }
}

impl Drop for MockHandle {
    fn drop(&mut self) {
        let mut state = self.state.borrow_mut();
        state.handles_destroyed += 1;
        if state.current_handle == Some(self.id) {
            state.current_handle = None;
        }
    }
}
