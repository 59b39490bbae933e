//! Application state for the onboarding TUI: the wizard plus the widget
//! state each step needs to turn key presses into form updates.

mod input;
mod types;

pub use input::InputResult;
pub use types::{LocationFocus, StoreFocus};

use crate::input::InputField;
use crate::transition::SlideTransition;
use crate::widgets::{grid_step, GridMove};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use modulus_core::{
    Category, FixedLocation, FormPatch, LocationProvider, Navigation, OnboardConfig, OtpSlots,
    StepType, Wizard,
};

pub struct App {
    pub wizard: Wizard,
    pub brand: String,
    pub phone_input: InputField,
    pub otp: OtpSlots,
    pub store_name_input: InputField,
    pub store_focus: StoreFocus,
    pub category_cursor: usize,
    pub location_focus: LocationFocus,
    pub city_input: InputField,
    pub pincode_input: InputField,
    pub status_message: String,
    pub transition: Option<SlideTransition>,
    locator: Box<dyn LocationProvider>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self::with_wizard(Wizard::new())
    }

    pub fn with_wizard(wizard: Wizard) -> Self {
        let mut app = Self {
            wizard,
            brand: "Modulus Sell".to_string(),
            phone_input: InputField::new("Enter mobile number"),
            otp: OtpSlots::new(),
            store_name_input: InputField::new("e.g. Gupta General Store"),
            store_focus: StoreFocus::Name,
            category_cursor: 0,
            location_focus: LocationFocus::UseCurrent,
            city_input: InputField::new("e.g. Mumbai"),
            pincode_input: InputField::new("e.g. 400001").with_max_chars(6),
            status_message: String::new(),
            transition: None,
            locator: Box::new(FixedLocation::default()),
        };
        app.sync_step_state();
        app
    }

    pub fn from_config(config: &OnboardConfig) -> Self {
        let mut app = Self::new();
        app.brand = config.brand.clone();
        app.locator = Box::new(config.location_provider());
        if config.transitions {
            let slide = SlideTransition::new();
            app.wizard.set_observer(Box::new(slide.clone()));
            app.transition = Some(slide);
        }
        app
    }

    pub fn set_locator(&mut self, locator: Box<dyn LocationProvider>) {
        self.locator = locator;
    }

    pub fn current_step(&self) -> StepType {
        self.wizard.current()
    }

    /// Re-seed the current step's widgets from the stored record, so that
    /// returning to a step shows what was entered before.
    fn sync_step_state(&mut self) {
        let data = self.wizard.snapshot();
        match self.wizard.current() {
            StepType::Phone => self.phone_input.set_value(&data.phone),
            StepType::Otp => self.otp = OtpSlots::from_code(&data.otp),
            StepType::StoreDetails => {
                self.store_name_input.set_value(&data.store_name);
                self.store_focus = StoreFocus::Name;
                if let Some(category) = data.category {
                    self.category_cursor = Category::all()
                        .iter()
                        .position(|c| *c == category)
                        .unwrap_or(0);
                }
            }
            StepType::Location => {
                self.city_input.set_value(&data.city);
                self.pincode_input.set_value(&data.pincode);
                // Offer the shortcut only while nothing has been entered yet.
                self.location_focus = if data.city.is_empty() && data.pincode.is_empty() {
                    LocationFocus::UseCurrent
                } else {
                    LocationFocus::City
                };
            }
            StepType::Welcome | StepType::Success => {}
        }
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> InputResult {
        if key.kind != KeyEventKind::Press {
            return InputResult::Continue;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return InputResult::Quit;
        }
        match self.wizard.current() {
            StepType::Welcome => self.handle_welcome_input(key),
            StepType::Phone => self.handle_phone_input(key),
            StepType::Otp => self.handle_otp_input(key),
            StepType::StoreDetails => self.handle_store_input(key),
            StepType::Location => self.handle_location_input(key),
            StepType::Success => self.handle_success_input(key),
        }
    }

    fn handle_welcome_input(&mut self, key: KeyEvent) -> InputResult {
        match key.code {
            KeyCode::Enter => self.go_next(),
            KeyCode::Esc | KeyCode::Char('q') => InputResult::Quit,
            _ => InputResult::Continue,
        }
    }

    fn handle_phone_input(&mut self, key: KeyEvent) -> InputResult {
        match key.code {
            KeyCode::Enter => self.go_next(),
            KeyCode::Esc => InputResult::Quit,
            _ => {
                if self.phone_input.handle_key(key) {
                    let phone = self.phone_input.value().to_string();
                    self.apply(FormPatch::new().phone(phone));
                }
                InputResult::Continue
            }
        }
    }

    fn handle_otp_input(&mut self, key: KeyEvent) -> InputResult {
        match key.code {
            KeyCode::Enter => return self.go_next(),
            // "Wrong number?"
            KeyCode::Esc => return self.go_prev(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.otp.input(c);
            }
            KeyCode::Backspace => self.otp.backspace(),
            KeyCode::Left => {
                self.otp.focus_left();
                return InputResult::Continue;
            }
            KeyCode::Right => {
                self.otp.focus_right();
                return InputResult::Continue;
            }
            _ => return InputResult::Continue,
        }
        let code = self.otp.code();
        self.apply(FormPatch::new().otp(code));
        InputResult::Continue
    }

    fn handle_store_input(&mut self, key: KeyEvent) -> InputResult {
        match key.code {
            // Enter picks the highlighted tile until a category is chosen.
            KeyCode::Enter
                if self.store_focus == StoreFocus::Category
                    && self.wizard.data().category.is_none() =>
            {
                self.select_category();
                return InputResult::Continue;
            }
            KeyCode::Enter => return self.go_next(),
            KeyCode::Esc => return InputResult::Quit,
            KeyCode::Tab | KeyCode::BackTab => {
                self.store_focus = self.store_focus.toggle();
                return InputResult::Continue;
            }
            _ => {}
        }
        match self.store_focus {
            StoreFocus::Name => {
                if self.store_name_input.handle_key(key) {
                    let name = self.store_name_input.value().to_string();
                    self.apply(FormPatch::new().store_name(name));
                }
            }
            StoreFocus::Category => {
                let len = Category::all().len();
                let dir = match key.code {
                    KeyCode::Up | KeyCode::Char('k') => Some(GridMove::Up),
                    KeyCode::Down | KeyCode::Char('j') => Some(GridMove::Down),
                    KeyCode::Left | KeyCode::Char('h') => Some(GridMove::Left),
                    KeyCode::Right | KeyCode::Char('l') => Some(GridMove::Right),
                    _ => None,
                };
                if let Some(dir) = dir {
                    self.category_cursor = grid_step(self.category_cursor, len, dir);
                } else if key.code == KeyCode::Char(' ') {
                    self.select_category();
                }
            }
        }
        InputResult::Continue
    }

    fn select_category(&mut self) {
        if let Some(category) = Category::all().get(self.category_cursor) {
            self.apply(FormPatch::new().category(*category));
        }
    }

    fn handle_location_input(&mut self, key: KeyEvent) -> InputResult {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('l') if ctrl => {
                self.use_current_location();
                return InputResult::Continue;
            }
            KeyCode::Enter => {
                if self.location_focus == LocationFocus::UseCurrent {
                    self.use_current_location();
                    return InputResult::Continue;
                }
                return self.go_next();
            }
            KeyCode::Esc => return InputResult::Quit,
            KeyCode::Tab | KeyCode::Down => {
                self.location_focus = self.location_focus.next();
                return InputResult::Continue;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.location_focus = self.location_focus.prev();
                return InputResult::Continue;
            }
            _ => {}
        }
        match self.location_focus {
            LocationFocus::UseCurrent => {}
            LocationFocus::City => {
                if self.city_input.handle_key(key) {
                    let city = self.city_input.value().to_string();
                    self.apply(FormPatch::new().city(city));
                }
            }
            LocationFocus::Pincode => {
                if self.pincode_input.handle_key(key) {
                    let pincode = self.pincode_input.value().to_string();
                    self.apply(FormPatch::new().pincode(pincode));
                }
            }
        }
        InputResult::Continue
    }

    fn handle_success_input(&mut self, key: KeyEvent) -> InputResult {
        match key.code {
            KeyCode::Enter => InputResult::Complete,
            KeyCode::Esc | KeyCode::Char('q') => InputResult::Quit,
            _ => InputResult::Continue,
        }
    }

    /// Fill city and pincode from the location provider.
    pub fn use_current_location(&mut self) {
        let location = self.locator.locate();
        self.city_input.set_value(&location.city);
        self.pincode_input.set_value(&location.pincode);
        self.apply(location.into_patch());
        if self.location_focus == LocationFocus::UseCurrent {
            self.location_focus = LocationFocus::City;
        }
        self.status_message = "📍 Location filled in.".to_string();
    }

    fn apply(&mut self, patch: FormPatch) {
        if self.wizard.update_from_step(patch) {
            self.status_message.clear();
        }
    }

    /// Forward action for the current step.
    pub fn advance(&mut self) -> Navigation {
        let nav = self.wizard.advance();
        match nav {
            Navigation::Moved { .. } => {
                self.status_message.clear();
                self.sync_step_state();
            }
            Navigation::Blocked => {
                self.status_message = blocked_hint(self.wizard.current()).to_string();
            }
            Navigation::AtEnd => {}
        }
        nav
    }

    fn go_next(&mut self) -> InputResult {
        self.advance();
        InputResult::Continue
    }

    fn go_prev(&mut self) -> InputResult {
        if self.wizard.retreat().moved() {
            self.status_message.clear();
            self.sync_step_state();
        }
        InputResult::Continue
    }
}

/// Why the forward action is still disabled on `step`.
pub fn blocked_hint(step: StepType) -> &'static str {
    match step {
        StepType::Phone => "📱 Enter at least 10 digits to get a code.",
        StepType::Otp => "🔢 Enter all 4 digits of the code.",
        StepType::StoreDetails => "🏪 Add a store name and pick a category.",
        StepType::Location => "📍 Fill in both city and pincode.",
        StepType::Welcome | StepType::Success => "",
    }
}
