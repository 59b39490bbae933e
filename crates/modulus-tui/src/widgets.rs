//! Small, reusable UI helpers used by multiple steps.

use modulus_core::OtpSlots;

/// Categories are laid out as a grid with this many columns.
pub const GRID_COLUMNS: usize = 3;

/// Radio marker for single-select options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadioState {
    Unselected,
    Selected,
}

impl RadioState {
    pub fn is_selected(&self) -> bool {
        matches!(self, RadioState::Selected)
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            RadioState::Unselected => "( )",
            RadioState::Selected => "(•)",
        }
    }
}

impl From<bool> for RadioState {
    fn from(b: bool) -> Self {
        if b {
            RadioState::Selected
        } else {
            RadioState::Unselected
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridMove {
    Up,
    Down,
    Left,
    Right,
}

/// Move a cursor inside a `len`-item grid of [`GRID_COLUMNS`] columns,
/// wrapping left/right within the whole list and clamping up/down.
pub fn grid_step(index: usize, len: usize, dir: GridMove) -> usize {
    if len == 0 {
        return 0;
    }
    match dir {
        GridMove::Left => (index + len - 1) % len,
        GridMove::Right => (index + 1) % len,
        GridMove::Up => index.checked_sub(GRID_COLUMNS).unwrap_or(index),
        GridMove::Down => {
            let next = index + GRID_COLUMNS;
            if next < len {
                next
            } else {
                index
            }
        }
    }
}

/// Render the code boxes, e.g. `[4] [2] ‹ › [ ]` with the focused slot in
/// angle quotes.
pub fn otp_boxes(otp: &OtpSlots) -> String {
    otp.slots()
        .iter()
        .enumerate()
        .map(|(i, slot)| {
            let c = slot.unwrap_or(' ');
            if i == otp.focus() {
                format!("‹{}›", c)
            } else {
                format!("[{}]", c)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a button; disabled buttons are greyed with a trailing note.
pub fn button(label: &str, enabled: bool, focused: bool) -> String {
    let marker = if focused { "▸" } else { " " };
    if enabled {
        format!("{} [ {} ]", marker, label)
    } else {
        format!("{} [ {} ] (not ready)", marker, label)
    }
}
