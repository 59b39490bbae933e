use super::super::app::App;
use modulus_core::StepType;

pub(super) fn build_step_sidebar(app: &App) -> String {
    let current = app.current_step();
    StepType::all()
        .iter()
        .map(|step| {
            let marker = if *step == current {
                "▶"
            } else if step.index() < current.index() {
                "✓"
            } else {
                " "
            };
            format!("{} {}", marker, step.label())
        })
        .collect::<Vec<_>>()
        .join("\n")
}
