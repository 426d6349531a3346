#![allow(dead_code)]

use dwm_window_attributes::{
    Compositor, HResult, WindowAttribute, WindowHandle, CLOAKED_APP,
};
use std::{cell::RefCell, collections::HashMap};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Get {
        window: WindowHandle,
        attribute: WindowAttribute,
        len: usize,
    },
    Set {
        window: WindowHandle,
        attribute: WindowAttribute,
        bytes: Vec<u8>,
    },
}

/// Records every call, answers reads from `reads`, and reports `status`.
#[derive(Default)]
pub struct Recorder {
    pub calls: RefCell<Vec<Call>>,
    pub reads: HashMap<WindowAttribute, Vec<u8>>,
    pub status: Option<HResult>,
}

impl Recorder {
    pub fn failing(status: HResult) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
    pub fn read(mut self, attribute: WindowAttribute, bytes: &[u8]) -> Self {
        self.reads.insert(attribute, bytes.to_vec());
        self
    }
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl Compositor for Recorder {
    fn get_window_attribute(
        &self,
        window: WindowHandle,
        attribute: WindowAttribute,
        value: &mut [u8],
    ) -> HResult {
        assert!(value.iter().all(|b| *b == 0), "read buffer was not zeroed");
        self.calls.borrow_mut().push(Call::Get {
            window,
            attribute,
            len: value.len(),
        });
        // Written even when failing, so a leaked buffer would show up.
        if let Some(bytes) = self.reads.get(&attribute) {
            value.copy_from_slice(bytes);
        }
        self.status.unwrap_or(HResult::OK)
    }

    fn set_window_attribute(
        &self,
        window: WindowHandle,
        attribute: WindowAttribute,
        value: &[u8],
    ) -> HResult {
        self.calls.borrow_mut().push(Call::Set {
            window,
            attribute,
            bytes: value.to_vec(),
        });
        self.status.unwrap_or(HResult::OK)
    }
}

/// A compositor with one live window whose attributes persist between calls.
pub struct FakeWindow {
    pub live: WindowHandle,
    pub state: RefCell<HashMap<WindowAttribute, Vec<u8>>>,
}

impl FakeWindow {
    pub fn new(live: WindowHandle) -> Self {
        Self {
            live,
            state: RefCell::new(HashMap::new()),
        }
    }
    pub fn with(self, attribute: WindowAttribute, bytes: &[u8]) -> Self {
        self.state.borrow_mut().insert(attribute, bytes.to_vec());
        self
    }
}

impl Compositor for FakeWindow {
    fn get_window_attribute(
        &self,
        window: WindowHandle,
        attribute: WindowAttribute,
        value: &mut [u8],
    ) -> HResult {
        if window != self.live {
            return HResult::E_HANDLE;
        }
        match self.state.borrow().get(&attribute) {
            Some(bytes) if bytes.len() == value.len() => {
                value.copy_from_slice(bytes);
                HResult::OK
            }
            Some(_) => HResult::E_INVALIDARG,
            None => HResult::OK,
        }
    }

    fn set_window_attribute(
        &self,
        window: WindowHandle,
        attribute: WindowAttribute,
        value: &[u8],
    ) -> HResult {
        if window != self.live {
            return HResult::E_HANDLE;
        }
        let mut state = self.state.borrow_mut();
        if attribute == WindowAttribute::CLOAK {
            let cloaked = value.iter().any(|b| *b != 0);
            let reason = if cloaked { CLOAKED_APP } else { 0 };
            state.insert(WindowAttribute::CLOAKED, reason.to_ne_bytes().to_vec());
        }
        state.insert(attribute, value.to_vec());
        HResult::OK
    }
}
