use eframe::egui;

use crate::common::{Message, Sender};

const USER_FILL: egui::Color32 = egui::Color32::from_rgb(0, 120, 215);
const BOT_FILL: egui::Color32 = egui::Color32::from_rgb(60, 60, 60);

pub fn render(ui: &mut egui::Ui, messages: &[Message]) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for message in messages {
                render_message(ui, message);
                ui.add_space(4.0);
            }
        });
}

fn render_message(ui: &mut egui::Ui, message: &Message) {
    let (layout, fill) = style_for(message.sender);

    ui.with_layout(layout, |ui| {
        egui::Frame::new()
            .fill(fill)
            .corner_radius(8.0)
            .inner_margin(egui::Margin::symmetric(10, 6))
            .show(ui, |ui| {
                ui.set_max_width(ui.available_width() * 0.75);
                ui.label(egui::RichText::new(&message.text).color(egui::Color32::WHITE));
            });
    });
}

fn style_for(sender: Sender) -> (egui::Layout, egui::Color32) {
    match sender {
        Sender::User => (egui::Layout::right_to_left(egui::Align::TOP), USER_FILL),
        Sender::Bot => (egui::Layout::left_to_right(egui::Align::TOP), BOT_FILL),
    }
}
