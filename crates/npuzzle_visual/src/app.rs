use std::time::Duration;

use npuzzle_prefs::{PlaceholderStyle, Preferences};
use npuzzle_replay::{FrameClock, Replay, ReplayInput, TileAtlas};

use crate::draw;
use crate::startup::Startup;

pub(crate) struct ReplayApp {
    replay: Replay,
    textures: TileAtlas<egui::TextureHandle>,
    clock: FrameClock,

    board_size: f32,
    frame_interval: Duration,
    placeholder: PlaceholderStyle,
}

impl ReplayApp {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, startup: Startup, prefs: &Preferences) -> Self {
        let textures = startup.images.map(|tile, image| {
            cc.egui_ctx
                .load_texture(format!("tile_{tile}"), image, egui::TextureOptions::LINEAR)
        });

        Self {
            replay: startup.replay,
            textures,
            clock: FrameClock::new(),

            board_size: prefs.window_size as f32,
            frame_interval: prefs.frame_interval(),
            placeholder: prefs.placeholder,
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        let (close, advance) = ctx.input(|input| {
            let close = input.viewport().close_requested();
            let key_pressed = input.events.iter().any(|event| {
                matches!(
                    event,
                    egui::Event::Key {
                        pressed: true,
                        repeat: false,
                        ..
                    }
                )
            });
            (close, key_pressed || input.pointer.any_click())
        });

        if close {
            self.replay.handle_input(ReplayInput::Close);
        } else if advance {
            self.replay.handle_input(ReplayInput::Advance);
        }
    }
}

impl eframe::App for ReplayApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.replay.step(self.clock.tick());

        let Some(frame) = self.replay.frame() else {
            log::info!("replay finished");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        };

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                draw::paint_frame(
                    ui.painter(),
                    ui.max_rect(),
                    self.board_size,
                    &frame,
                    &self.textures,
                    &self.placeholder,
                );
            });

        match self.replay.time_until_next_step() {
            Some(remaining) => ctx.request_repaint_after(remaining.max(self.frame_interval)),
            // Waiting for input; egui repaints when it arrives.
            None => self.clock.pause(),
        }
    }
}
