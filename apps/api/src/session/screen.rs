//! Per-screen request state.
//!
//! Each screen owns one slot. At most one request per screen may be in flight;
//! screens are independent of each other. The last submitted input survives a
//! failure so the user never has to retype it.

use std::fmt::Display;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RequestStatus<T> {
    Idle,
    InFlight,
    Succeeded { result: T },
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenState<I, T> {
    pub request: RequestStatus<T>,
    pub last_input: Option<I>,
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("a {screen} request is already in flight")]
pub struct ScreenBusy {
    pub screen: &'static str,
}

pub const CANCELLED_MESSAGE: &str = "request was cancelled before completion";

#[derive(Debug)]
pub struct ScreenSlot<I, T> {
    name: &'static str,
    state: Mutex<ScreenState<I, T>>,
}

impl<I, T> ScreenSlot<I, T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: Mutex::new(ScreenState {
                request: RequestStatus::Idle,
                last_input: None,
            }),
        }
    }

    /// Marks the screen in flight and records `input`.
    pub fn begin(&self, input: I) -> Result<InFlight<'_, I, T>, ScreenBusy> {
        let mut state = self.lock();
        if matches!(state.request, RequestStatus::InFlight) {
            return Err(ScreenBusy { screen: self.name });
        }
        state.request = RequestStatus::InFlight;
        state.last_input = Some(input);

        Ok(InFlight {
            slot: self,
            settled: false,
        })
    }

    fn lock(&self) -> MutexGuard<'_, ScreenState<I, T>> {
        // Slot updates are single assignments, so a poisoned lock still holds a valid state.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn settle(&self, request: RequestStatus<T>) {
        self.lock().request = request;
    }
}

impl<I: Clone, T: Clone> ScreenSlot<I, T> {
    pub fn snapshot(&self) -> ScreenState<I, T> {
        self.lock().clone()
    }

    pub fn last_result(&self) -> Option<T> {
        match &self.lock().request {
            RequestStatus::Succeeded { result } => Some(result.clone()),
            _ => None,
        }
    }
}

/// Token for an in-flight request. Dropping it unsettled marks the slot failed.
#[must_use = "an unsettled request marks its screen as failed when dropped"]
pub struct InFlight<'a, I, T> {
    slot: &'a ScreenSlot<I, T>,
    settled: bool,
}

impl<I, T> InFlight<'_, I, T> {
    pub fn succeed(mut self, result: T) {
        self.settled = true;
        self.slot.settle(RequestStatus::Succeeded { result });
    }

    pub fn fail(mut self, error: impl Display) {
        self.settled = true;
        self.slot.settle(RequestStatus::Failed {
            error: error.to_string(),
        });
    }
}

impl<I, T: Clone> InFlight<'_, I, T> {
    /// Settles the slot from `result` and hands the result back to the caller.
    pub fn settle<E: Display>(self, result: Result<T, E>) -> Result<T, E> {
        match &result {
            Ok(value) => self.succeed(value.clone()),
            Err(e) => self.fail(e),
        }
        result
    }
}

impl<I, T> Drop for InFlight<'_, I, T> {
    fn drop(&mut self) {
        if !self.settled {
            self.slot.settle(RequestStatus::Failed {
                error: CANCELLED_MESSAGE.to_string(),
            });
        }
    }
}
