//! Four-box one-time code entry.

use crate::steps::OTP_LEN;

/// Slot-by-slot editor for the one-time code. Each slot holds at most one
/// character; the code is the filled slots read left to right.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OtpSlots {
    slots: [Option<char>; OTP_LEN],
    focus: usize,
}

impl OtpSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from a stored code, e.g. when coming back to the step.
    pub fn from_code(code: &str) -> Self {
        let mut slots = [None; OTP_LEN];
        for (slot, c) in slots.iter_mut().zip(code.chars()) {
            *slot = Some(c);
        }
        let focus = slots
            .iter()
            .position(Option::is_none)
            .unwrap_or(OTP_LEN - 1);
        Self { slots, focus }
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn slot(&self, i: usize) -> Option<char> {
        self.slots.get(i).copied().flatten()
    }

    pub fn slots(&self) -> &[Option<char>; OTP_LEN] {
        &self.slots
    }

    /// Write slot `i`. A character moves focus to the next slot.
    pub fn set(&mut self, i: usize, value: Option<char>) {
        let Some(slot) = self.slots.get_mut(i) else {
            return;
        };
        *slot = value;
        self.focus = if value.is_some() {
            (i + 1).min(OTP_LEN - 1)
        } else {
            i
        };
    }

    /// Type into the focused slot.
    pub fn input(&mut self, c: char) {
        self.set(self.focus, Some(c));
    }

    /// Clear the focused slot, or step back and clear the previous one when
    /// the focused slot is already empty.
    pub fn backspace(&mut self) {
        if self.slots[self.focus].is_some() {
            self.slots[self.focus] = None;
        } else if self.focus > 0 {
            self.focus -= 1;
            self.slots[self.focus] = None;
        }
    }

    pub fn focus_left(&mut self) {
        self.focus = self.focus.saturating_sub(1);
    }

    pub fn focus_right(&mut self) {
        self.focus = (self.focus + 1).min(OTP_LEN - 1);
    }

    pub fn code(&self) -> String {
        self.slots.iter().flatten().collect()
    }
}
