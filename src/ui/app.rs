//! Main browser window using eframe/egui

use eframe::egui;

use super::{ShellAction, ShellController, UiConfig};
use crate::engine::{ViewBounds, WebEngine};

/// Main browser application
pub struct BrowserApp<E: WebEngine> {
    /// Controller owning the engine and the bookmarks
    shell: ShellController<E>,
    /// Title last sent to the native window
    applied_title: String,
}

impl<E: WebEngine> BrowserApp<E> {
    /// Create the application around a ready controller
    pub fn new(shell: ShellController<E>) -> Self {
        Self {
            shell,
            applied_title: String::new(),
        }
    }

    pub fn shell(&self) -> &ShellController<E> {
        &self.shell
    }

    /// Render the navigation toolbar
    fn render_toolbar(&mut self, ui: &mut egui::Ui, actions: &mut Vec<ShellAction>) {
        ui.horizontal(|ui| {
            if ui.button("←").on_hover_text("Back").clicked() {
                actions.push(ShellAction::Back);
            }
            if ui.button("→").on_hover_text("Forward").clicked() {
                actions.push(ShellAction::Forward);
            }
            if ui.button("⟳").on_hover_text("Reload").clicked() {
                actions.push(ShellAction::Reload);
            }
            if ui.button("🏠").on_hover_text("Home").clicked() {
                actions.push(ShellAction::Home);
            }

            // URL bar
            let response = ui.add(
                egui::TextEdit::singleline(self.shell.url_text_mut())
                    .desired_width(ui.available_width() - 40.0)
                    .hint_text("Enter URL..."),
            );

            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                actions.push(ShellAction::Navigate(self.shell.chrome().url_text.clone()));
            }

            if ui.button("☆").on_hover_text("Bookmark").clicked() {
                actions.push(ShellAction::AddBookmark);
            }
        });
    }

    /// Render one button per bookmark, left to right in list order
    fn render_bookmark_bar(&self, ui: &mut egui::Ui, actions: &mut Vec<ShellAction>) {
        ui.horizontal(|ui| {
            for (position, bookmark) in self.shell.bookmarks().iter().enumerate() {
                let response = ui
                    .add(egui::Button::new(&bookmark.title).frame(false))
                    .on_hover_text(&bookmark.url);

                if response.clicked() {
                    actions.push(ShellAction::OpenBookmark(position));
                }

                response.context_menu(|ui| {
                    if ui.button("Remove Bookmark").clicked() {
                        actions.push(ShellAction::RemoveBookmark(position));
                        ui.close();
                    }
                });
            }
        });
    }

    fn render_status_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| match self.shell.chrome().status.clone() {
            Some(status) => {
                ui.colored_label(ui.visuals().error_fg_color, status);
                if ui.small_button("×").clicked() {
                    self.shell.clear_status();
                }
            }
            None => {
                ui.label("Ready");
            }
        });
    }

    fn sync_window_title(&mut self, ctx: &egui::Context) {
        let title = &self.shell.chrome().window_title;
        if *title != self.applied_title {
            self.applied_title = title.clone();
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
        }
    }
}

impl<E: WebEngine> eframe::App for BrowserApp<E> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // webkit2gtk only paints and reports through the GTK main loop
        #[cfg(all(feature = "webview", target_os = "linux"))]
        {
            while gtk::events_pending() {
                gtk::main_iteration_do(false);
            }
            ctx.request_repaint_after(std::time::Duration::from_millis(16));
        }

        self.shell.pump_engine_events();
        self.sync_window_title(ctx);

        let mut actions = Vec::new();

        // Top panel with toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.render_toolbar(ui, &mut actions);
        });

        // Bookmark bar
        egui::TopBottomPanel::top("bookmarks").show(ctx, |ui| {
            self.render_bookmark_bar(ui, &mut actions);
        });

        // Status bar
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            self.render_status_bar(ui);
        });

        // The engine draws its own native view over the remaining area
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                self.shell.engine_mut().set_bounds(ViewBounds::new(
                    rect.min.x,
                    rect.min.y,
                    rect.width(),
                    rect.height(),
                ));
            });

        for action in actions {
            self.shell.dispatch(action);
        }
    }
}

/// Window options for the shell
pub fn native_options(config: &UiConfig) -> eframe::NativeOptions {
    #[allow(unused_mut)]
    let mut options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_position([config.window_x, config.window_y])
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([400.0, 300.0])
            .with_title(config.app_name.clone()),
        ..Default::default()
    };

    // Child webviews need an X11 window; Wayland sessions go through XWayland
    #[cfg(target_os = "linux")]
    {
        options.event_loop_builder = Some(Box::new(|builder| {
            use winit::platform::x11::EventLoopBuilderExtX11;
            builder.with_x11();
        }));
    }

    options
}

/// Run the browser application
#[cfg(feature = "webview")]
pub fn run(config: UiConfig) -> eframe::Result<()> {
    use crate::bookmarks::BookmarkStore;
    use crate::engine::WryEngine;
    #[cfg(target_os = "linux")]
    use crate::utils::ShellError;

    let app_name = config.app_name.clone();
    eframe::run_native(
        &app_name,
        native_options(&config),
        Box::new(move |cc| {
            cc.egui_ctx.set_theme(egui::Theme::Light);

            #[cfg(target_os = "linux")]
            gtk::init().map_err(|e| ShellError::Engine(format!("GTK init failed: {}", e)))?;

            let repaint = cc.egui_ctx.clone();
            let engine = WryEngine::new(cc, &config.home_url, move || repaint.request_repaint())?;
            // A corrupt bookmark file aborts startup instead of being overwritten on the next save
            let bookmarks = BookmarkStore::open(&config.bookmarks_path)?;
            let shell = ShellController::new(engine, bookmarks, &config);
            Ok(Box::new(BrowserApp::new(shell)))
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookmarks::BookmarkStore;
    use crate::engine::MockWebEngine;

    #[test]
    fn test_browser_app_creation() {
        // We can't fully test eframe app without a display,
        // but we can test the underlying structures
        let shell = ShellController::new(
            MockWebEngine::new(),
            BookmarkStore::new("unused.json"),
            &UiConfig::default(),
        );
        let app = BrowserApp::new(shell);
        assert_eq!(app.shell().chrome().window_title, "Custom Browser");
        assert!(app.shell().bookmarks().is_empty());
    }

    #[test]
    fn test_ui_config_default() {
        let config = UiConfig::default();
        assert_eq!(config.window_width, 1200.0);
        assert_eq!(config.window_height, 800.0);
        assert_eq!(config.home_url, "https://www.google.com");
        assert_eq!(config.bookmarks_path, std::path::PathBuf::from("bookmarks.json"));
    }

    #[test]
    fn test_native_options_geometry() {
        let options = native_options(&UiConfig::default());
        assert_eq!(options.viewport.position, Some(egui::pos2(100.0, 100.0)));
        assert_eq!(options.viewport.inner_size, Some(egui::vec2(1200.0, 800.0)));
        assert_eq!(options.viewport.title.as_deref(), Some("Custom Browser"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_native_options_force_x11_on_linux() {
        let options = native_options(&UiConfig::default());
        assert!(options.event_loop_builder.is_some());
    }
}
