//! The wizard controller: current step, the shared record, and single-step
//! navigation gated by the step table.

use crate::form::{FormData, FormPatch};
use crate::steps::StepType;
use std::sync::Arc;

/// Outcome of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Moved { from: StepType, to: StepType },
    /// The current step does not permit the move yet.
    Blocked,
    /// Nothing lies in that direction.
    AtEnd,
}

impl Navigation {
    pub fn moved(&self) -> bool {
        matches!(self, Navigation::Moved { .. })
    }
}

/// Filled-fraction progress for the layout shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub position: usize,
    pub total: usize,
    /// Hidden on the welcome and success screens.
    pub visible: bool,
}

impl Progress {
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.position as f64 / self.total as f64
    }

    pub fn percent(&self) -> u16 {
        (self.fraction() * 100.0).round().clamp(0.0, 100.0) as u16
    }
}

/// Notified whenever the current step changes. Purely cosmetic.
pub trait TransitionObserver {
    fn on_step_change(&mut self, from: StepType, to: StepType);
}

pub struct Wizard {
    index: usize,
    data: Arc<FormData>,
    observer: Option<Box<dyn TransitionObserver>>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Wizard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wizard")
            .field("index", &self.index)
            .field("data", &self.data)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self::with_data(FormData::default())
    }

    pub fn with_data(data: FormData) -> Self {
        Self {
            index: 0,
            data: Arc::new(data),
            observer: None,
        }
    }

    pub fn set_observer(&mut self, observer: Box<dyn TransitionObserver>) {
        self.observer = Some(observer);
    }

    pub fn current(&self) -> StepType {
        // index only ever moves through `next`/`prev`, so it is always in range
        StepType::from_index(self.index).unwrap_or(StepType::Success)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total_steps(&self) -> usize {
        StepType::all().len()
    }

    pub fn is_finished(&self) -> bool {
        self.current().def().is_terminal
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    /// Shared handle to the current record. Later updates install a new
    /// record and never touch the one returned here.
    pub fn snapshot(&self) -> Arc<FormData> {
        Arc::clone(&self.data)
    }

    pub fn can_advance(&self) -> bool {
        self.current().can_advance(&self.data)
    }

    pub fn can_retreat(&self) -> bool {
        self.current().def().allows_retreat && self.current().prev().is_some()
    }

    pub fn advance(&mut self) -> Navigation {
        let from = self.current();
        let Some(to) = from.next() else {
            return Navigation::AtEnd;
        };
        if !self.can_advance() {
            log::debug!("advance from {:?} blocked", from);
            return Navigation::Blocked;
        }
        self.move_to(from, to)
    }

    pub fn retreat(&mut self) -> Navigation {
        let from = self.current();
        let Some(to) = from.prev() else {
            return Navigation::AtEnd;
        };
        if !from.def().allows_retreat {
            log::debug!("retreat from {:?} not offered", from);
            return Navigation::Blocked;
        }
        self.move_to(from, to)
    }

    fn move_to(&mut self, from: StepType, to: StepType) -> Navigation {
        self.index = to.index();
        log::debug!("step {:?} -> {:?}", from, to);
        if let Some(observer) = self.observer.as_mut() {
            observer.on_step_change(from, to);
        }
        Navigation::Moved { from, to }
    }

    /// Shallow-merge `patch` into the record, installing a new value.
    pub fn update_data(&mut self, patch: FormPatch) {
        if patch.is_empty() {
            return;
        }
        self.data = Arc::new(self.data.merged(&patch));
    }

    /// Like [`Wizard::update_data`], but only for fields the current step
    /// declares as writes. Returns false and leaves the record alone otherwise.
    pub fn update_from_step(&mut self, patch: FormPatch) -> bool {
        let step = self.current();
        if !step.def().permits_write(&patch) {
            let fields: Vec<_> = patch.fields().iter().map(|f| f.name()).collect();
            log::warn!("{:?} may not write {:?}; update ignored", step, fields);
            return false;
        }
        self.update_data(patch);
        true
    }

    pub fn progress(&self) -> Progress {
        let total = self.total_steps();
        Progress {
            position: self.index + 1,
            total,
            visible: self.index > 0 && self.index + 1 < total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Category;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder(Rc<RefCell<Vec<(StepType, StepType)>>>);

    impl TransitionObserver for Recorder {
        fn on_step_change(&mut self, from: StepType, to: StepType) {
            self.0.borrow_mut().push((from, to));
        }
    }

    fn at_otp() -> Wizard {
        let mut wizard = Wizard::new();
        wizard.advance();
        wizard.update_data(FormPatch::new().phone("9876543210"));
        wizard.advance();
        assert_eq!(wizard.current(), StepType::Otp);
        wizard
    }

    #[test]
    fn starts_at_welcome_with_empty_record() {
        let wizard = Wizard::new();
        assert_eq!(wizard.index(), 0);
        assert_eq!(wizard.current(), StepType::Welcome);
        assert_eq!(wizard.data(), &FormData::default());
        assert_eq!(wizard.total_steps(), 6);
    }

    #[test]
    fn advance_is_gated_by_predicate() {
        let mut wizard = Wizard::new();
        assert!(wizard.advance().moved());
        assert_eq!(wizard.advance(), Navigation::Blocked);
        assert_eq!(wizard.current(), StepType::Phone);

        wizard.update_data(FormPatch::new().phone("123456789"));
        assert!(!wizard.can_advance());
        wizard.update_data(FormPatch::new().phone("1234567890"));
        assert_eq!(
            wizard.advance(),
            Navigation::Moved {
                from: StepType::Phone,
                to: StepType::Otp
            }
        );
        // a satisfied predicate on the next step does not carry a second move
        assert_eq!(wizard.index(), 2);
    }

    #[test]
    fn retreat_from_otp_keeps_data() {
        let mut wizard = at_otp();
        wizard.update_data(FormPatch::new().otp("12"));
        assert!(wizard.can_retreat());
        assert!(wizard.retreat().moved());
        assert_eq!(wizard.current(), StepType::Phone);
        assert_eq!(wizard.data().phone, "9876543210");
        assert_eq!(wizard.data().otp, "12");
    }

    #[test]
    fn retreat_not_offered_elsewhere() {
        let mut wizard = Wizard::new();
        assert_eq!(wizard.retreat(), Navigation::AtEnd);
        wizard.advance();
        assert_eq!(wizard.retreat(), Navigation::Blocked);
        assert_eq!(wizard.current(), StepType::Phone);
    }

    #[test]
    fn terminal_step_does_not_advance() {
        let mut wizard = Wizard::with_data(FormData {
            phone: "9876543210".into(),
            otp: "4219".into(),
            store_name: "Test Store".into(),
            category: Some(Category::Grocery),
            city: "Mumbai".into(),
            pincode: "400001".into(),
        });
        for _ in 0..5 {
            assert!(wizard.advance().moved());
        }
        assert!(wizard.is_finished());
        assert_eq!(wizard.advance(), Navigation::AtEnd);
        assert_eq!(wizard.index(), 5);
    }

    #[test]
    fn snapshots_are_unaffected_by_updates() {
        let mut wizard = Wizard::new();
        wizard.update_data(FormPatch::new().otp("12"));
        let before = wizard.snapshot();
        wizard.update_data(FormPatch::new().phone("9999999999"));
        assert_eq!(before.phone, "");
        assert_eq!(wizard.data().otp, "12");
        assert_eq!(wizard.data().phone, "9999999999");
    }

    #[test]
    fn step_updates_limited_to_declared_writes() {
        let mut wizard = at_otp();
        assert!(!wizard.update_from_step(FormPatch::new().phone("0000000000")));
        assert_eq!(wizard.data().phone, "9876543210");
        assert!(wizard.update_from_step(FormPatch::new().otp("1")));
        assert_eq!(wizard.data().otp, "1");
    }

    #[test]
    fn progress_hidden_on_first_and_last() {
        let mut wizard = Wizard::new();
        let p = wizard.progress();
        assert!(!p.visible);
        assert_eq!((p.position, p.total), (1, 6));

        wizard.advance();
        let p = wizard.progress();
        assert!(p.visible);
        assert_eq!(p.percent(), 33);
    }

    #[test]
    fn observer_sees_each_change_once() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut wizard = Wizard::new();
        wizard.set_observer(Box::new(Recorder(seen.clone())));
        wizard.advance();
        wizard.advance();
        assert_eq!(
            seen.borrow().as_slice(),
            &[(StepType::Welcome, StepType::Phone)]
        );
    }
}
