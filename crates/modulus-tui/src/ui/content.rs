use super::super::app::{App, LocationFocus, StoreFocus};
use crate::widgets::{button, otp_boxes, RadioState, GRID_COLUMNS};
use modulus_core::{Category, StepType};

pub(super) fn build_step_lines(app: &App) -> Vec<String> {
    let data = app.wizard.data();
    let ready = app.wizard.can_advance();
    let mut items = Vec::new();

    match app.current_step() {
        StepType::Welcome => {
            items.push(format!("🏪 {}", app.brand));
            items.push("".to_string());
            items.push(
                "Everything you need to manage your store, billing, and inventory in one place."
                    .to_string(),
            );
            items.push("".to_string());
            items.push(button("Get Started →", true, true));
            items.push("  Takes less than 2 minutes".to_string());
        }
        StepType::Phone => {
            items.push("We'll text you a code to verify your account.".to_string());
            items.push("".to_string());
            items.push("Mobile Number".to_string());
            items.push(format!("📱 {}", app.phone_input.display(true)));
            items.push("".to_string());
            items.push(button("Send Code →", ready, true));
        }
        StepType::Otp => {
            items.push(format!("Enter the 4-digit code sent to {}", data.phone));
            items.push("".to_string());
            items.push(format!("    {}", otp_boxes(&app.otp)));
            items.push("".to_string());
            items.push(button("Verify & Continue", ready, true));
            items.push("  Wrong number? (Esc)".to_string());
        }
        StepType::StoreDetails => {
            let name_focused = app.store_focus == StoreFocus::Name;
            items.push("This helps us customize your experience.".to_string());
            items.push("".to_string());
            items.push("Store Name".to_string());
            items.push(format!(
                "{} 🏪 {}",
                if name_focused { "▸" } else { " " },
                app.store_name_input.display(name_focused)
            ));
            items.push("".to_string());
            items.push("Business Category".to_string());
            items.extend(category_grid(app, data.category, !name_focused));
            items.push("".to_string());
            items.push(button("Continue", ready, false));
        }
        StepType::Location => {
            let focus = app.location_focus;
            items.push("Customers in your area will act on this.".to_string());
            items.push("".to_string());
            items.push(button(
                "📍 Use Current Location",
                true,
                focus == LocationFocus::UseCurrent,
            ));
            items.push("  ──────── OR ────────".to_string());
            items.push("City".to_string());
            items.push(field_line(
                &app.city_input.display(focus == LocationFocus::City),
                focus == LocationFocus::City,
            ));
            items.push("Pincode".to_string());
            items.push(field_line(
                &app.pincode_input.display(focus == LocationFocus::Pincode),
                focus == LocationFocus::Pincode,
            ));
            items.push("".to_string());
            items.push(button("Complete Setup", ready, false));
        }
        StepType::Success => {
            items.push("✅".to_string());
            items.push("".to_string());
            items.push("Your store is now online. Let's make your first sale.".to_string());
            items.push("".to_string());
            items.push(button("Go to Dashboard →", true, true));
        }
    }
    items
}

fn field_line(text: &str, focused: bool) -> String {
    format!("{} {}", if focused { "▸" } else { " " }, text)
}

fn category_grid(app: &App, selected: Option<Category>, focused: bool) -> Vec<String> {
    Category::all()
        .chunks(GRID_COLUMNS)
        .enumerate()
        .map(|(row, chunk)| {
            chunk
                .iter()
                .enumerate()
                .map(|(col, category)| {
                    let index = row * GRID_COLUMNS + col;
                    let cursor = if focused && index == app.category_cursor {
                        "▸"
                    } else {
                        " "
                    };
                    let radio = RadioState::from(selected == Some(*category));
                    format!("{}{} {:<12}", cursor, radio.symbol(), category.label())
                })
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

pub(super) fn expected_actions(app: &App) -> &'static str {
    match app.current_step() {
        StepType::Welcome => "Enter — Get started | Esc — Quit",
        StepType::Phone => "Type your number | Enter — Send code | Esc — Quit",
        StepType::Otp => "Type digits | ←/→ — Move | Backspace — Clear | Enter — Verify | Esc — Wrong number",
        StepType::StoreDetails => match app.store_focus {
            StoreFocus::Name => "Type store name | Tab — Categories | Enter — Continue | Esc — Quit",
            StoreFocus::Category => {
                "Arrows — Move | Space/Enter — Select | Tab — Store name | Enter — Continue"
            }
        },
        StepType::Location => {
            "Tab/↑↓ — Move | Enter on button or Ctrl+L — Use current location | Enter — Complete"
        }
        StepType::Success => "Enter — Go to dashboard | Esc — Quit",
    }
}

pub(super) fn status_message(app: &App) -> String {
    if !app.status_message.is_empty() {
        return app.status_message.clone();
    }
    match app.current_step() {
        StepType::Success => "🎉 Setup complete.".to_string(),
        step if app.wizard.can_advance() => format!("✅ {} ready.", step.label()),
        _ => "✏️ In progress.".to_string(),
    }
}
