use std::time::Duration;

use eframe::egui;

use super::components::chat_area;
use super::components::input_bar::{self, InputAction};
use super::view::ConversationView;

const REPAINT_INTERVAL: Duration = Duration::from_millis(100);

pub struct ChatApp {
    view: ConversationView,
    title: String,
}

impl ChatApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, view: ConversationView, title: String) -> Self {
        Self { view, title }
    }

    fn handle_input(&mut self, ui: &mut egui::Ui) {
        let mut draft = self.view.draft().to_owned();
        let action = input_bar::render(ui, &mut draft);

        if draft != self.view.draft() {
            self.view.update_draft(draft);
        }

        match action {
            Some(InputAction::Send) => self.view.submit(),
            Some(InputAction::Key(key)) => self.view.handle_key_commit(key),
            None => {}
        }
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.view.poll_replies() > 0 {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::bottom("input_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            self.handle_input(ui);
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(&self.title);
            ui.separator();
            chat_area::render(ui, self.view.messages());
        });

        // Replies land on a channel; poll for them even when the user is idle.
        ctx.request_repaint_after(REPAINT_INTERVAL);
    }
}
