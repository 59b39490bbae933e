use super::content::{build_step_lines, expected_actions, status_message};
use super::super::app::App;

pub fn dump_step(app: &App) -> String {
    let progress = app.wizard.progress();
    let body = build_step_lines(app).join("\n");
    let data = app.wizard.data();
    let reads = app
        .current_step()
        .def()
        .reads
        .iter()
        .map(|field| format!("{}={:?}", field.name(), data.get(*field)))
        .collect::<Vec<_>>();
    let reads = if reads.is_empty() {
        "(none)".to_string()
    } else {
        reads.join(", ")
    };
    let progress_line = if progress.visible {
        format!(
            "{}/{} ({}%)",
            progress.position,
            progress.total,
            progress.percent()
        )
    } else {
        "(hidden)".to_string()
    };

    format!(
        "STEP {}: {}\n\n- Header: {}\n- Reads: {}\n- Body contents:\n{}\n- Progress: {}\n- Status: {}\n- Expected user actions (keys): {}\n",
        app.wizard.index(),
        app.current_step().title(),
        app.brand,
        reads,
        body,
        progress_line,
        status_message(app),
        expected_actions(app)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use modulus_core::FormPatch;

    #[test]
    fn welcome_dump_hides_progress() {
        let app = App::new();
        let dump = dump_step(&app);
        assert!(dump.starts_with("STEP 0: Welcome"));
        assert!(dump.contains("- Progress: (hidden)"));
        assert!(dump.contains("Get Started"));
        assert!(dump.contains("- Reads: (none)"));
    }

    #[test]
    fn otp_dump_shows_phone_and_progress() {
        let mut app = App::new();
        app.wizard.advance();
        app.wizard.update_data(FormPatch::new().phone("9876543210"));
        app.wizard.advance();
        let dump = dump_step(&app);
        assert!(dump.contains("sent to 9876543210"));
        assert!(dump.contains("- Progress: 3/6 (50%)"));
        assert!(dump.contains("Wrong number"));
        assert!(dump.contains("- Reads: phone=\"9876543210\", otp=\"\""));
    }
}
