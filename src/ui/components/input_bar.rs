use eframe::egui;

/// What the user asked for while the input bar was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// The send button was clicked.
    Send,
    /// A key was pressed as the text field gave up focus.
    Key(egui::Key),
}

pub fn render(ui: &mut egui::Ui, draft: &mut String) -> Option<InputAction> {
    let mut action = None;
    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(draft)
                .hint_text("Type a message...")
                .desired_width(ui.available_width() - 60.0),
        );

        if ui.button("Send").clicked() {
            action = Some(InputAction::Send);
        }

        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            action = Some(InputAction::Key(egui::Key::Enter));
            response.request_focus();
        }
    });

    action
}
