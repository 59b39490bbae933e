use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use modulus_core::{Category, FormData, StepType};
use modulus_tui::app::{App, InputResult};
use ratatui::{backend::TestBackend, Terminal};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
        app.handle_input(key(KeyCode::Char(c)));
    }
}

fn screen_text(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 32)).unwrap();
    terminal.draw(|f| modulus_tui::draw(f, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn end_to_end_flow_reaches_success() {
    let mut app = App::new();
    assert_eq!(app.current_step(), StepType::Welcome);

    app.handle_input(key(KeyCode::Enter));
    assert_eq!(app.current_step(), StepType::Phone);

    type_str(&mut app, "9876543210");
    app.handle_input(key(KeyCode::Enter));
    assert_eq!(app.current_step(), StepType::Otp);

    for c in ['4', '2', '1', '9'] {
        app.handle_input(key(KeyCode::Char(c)));
    }
    assert_eq!(app.wizard.data().otp, "4219");
    app.handle_input(key(KeyCode::Enter));
    assert_eq!(app.current_step(), StepType::StoreDetails);

    type_str(&mut app, "Test Store");
    app.handle_input(key(KeyCode::Tab));
    app.handle_input(key(KeyCode::Char(' ')));
    app.handle_input(key(KeyCode::Enter));
    assert_eq!(app.current_step(), StepType::Location);

    // focus starts on "Use Current Location" and moves to the city field
    app.handle_input(key(KeyCode::Enter));
    assert_eq!(app.wizard.data().city, "Mumbai");
    assert_eq!(app.wizard.data().pincode, "400001");
    assert_eq!(app.current_step(), StepType::Location);

    app.handle_input(key(KeyCode::Enter));
    assert_eq!(app.current_step(), StepType::Success);

    assert_eq!(
        app.wizard.data(),
        &FormData {
            phone: "9876543210".into(),
            otp: "4219".into(),
            store_name: "Test Store".into(),
            category: Some(Category::Grocery),
            city: "Mumbai".into(),
            pincode: "400001".into(),
        }
    );
    assert_eq!(app.handle_input(key(KeyCode::Enter)), InputResult::Complete);
}

#[test]
fn nine_digit_phone_cannot_advance() {
    let mut app = App::new();
    app.handle_input(key(KeyCode::Enter));
    type_str(&mut app, "987654321");
    for _ in 0..3 {
        app.handle_input(key(KeyCode::Enter));
    }
    assert_eq!(app.current_step(), StepType::Phone);
}

#[test]
fn three_digit_code_cannot_advance() {
    let mut app = App::new();
    app.handle_input(key(KeyCode::Enter));
    type_str(&mut app, "9876543210");
    app.handle_input(key(KeyCode::Enter));
    type_str(&mut app, "123");
    app.handle_input(key(KeyCode::Enter));
    assert_eq!(app.current_step(), StepType::Otp);

    type_str(&mut app, "4");
    app.handle_input(key(KeyCode::Enter));
    assert_eq!(app.current_step(), StepType::StoreDetails);
}

#[test]
fn wrong_number_goes_back_without_clearing() {
    let mut app = App::new();
    app.handle_input(key(KeyCode::Enter));
    type_str(&mut app, "9876543210");
    app.handle_input(key(KeyCode::Enter));
    type_str(&mut app, "42");

    app.handle_input(key(KeyCode::Esc));
    assert_eq!(app.current_step(), StepType::Phone);
    assert_eq!(app.wizard.data().phone, "9876543210");
    assert_eq!(app.wizard.data().otp, "42");

    // Esc on the phone step quits rather than stepping back again
    assert_eq!(app.handle_input(key(KeyCode::Esc)), InputResult::Quit);
    assert_eq!(app.current_step(), StepType::Phone);
}

#[test]
fn progress_bar_only_between_first_and_last() {
    let mut app = App::new();
    let welcome = screen_text(&app);
    assert!(!welcome.contains("Progress"));
    assert!(welcome.contains("Powered by Modulus Sell"));

    app.handle_input(key(KeyCode::Enter));
    let screen = screen_text(&app);
    assert!(screen.contains("Progress"));
    assert!(screen.contains("2/6"));
    assert!(screen.contains("Mobile Number"));
}
