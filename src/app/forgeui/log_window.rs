use super::window_focus::FocusableWindow;
use eframe::egui;
use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

const MAX_LOG_LINES: usize = 1000;
const UPDATE_INTERVAL_MS: u64 = 100;

#[derive(Debug, Clone, PartialEq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn from_str(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "ERROR" => LogLevel::Error,
            "WARN" | "WARNING" => LogLevel::Warn,
            "INFO" => LogLevel::Info,
            "DEBUG" => LogLevel::Debug,
            "TRACE" => LogLevel::Trace,
            _ => LogLevel::Info,
        }
    }

    fn should_show(&self, filter_level: &LogLevel) -> bool {
        match filter_level {
            LogLevel::Error => matches!(self, LogLevel::Error),
            LogLevel::Warn => matches!(self, LogLevel::Error | LogLevel::Warn),
            LogLevel::Info => matches!(self, LogLevel::Error | LogLevel::Warn | LogLevel::Info),
            LogLevel::Debug => matches!(
                self,
                LogLevel::Error | LogLevel::Warn | LogLevel::Info | LogLevel::Debug
            ),
            LogLevel::Trace => true,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }
}

#[derive(Clone)]
pub struct LogMessage {
    pub timestamp: String,
    pub level: String,
    pub message: String,
    pub full_line: String,
}

pub struct LogWindow {
    pub open: bool,
    log_path: PathBuf,
    log_messages: Arc<Mutex<VecDeque<LogMessage>>>,
    log_receiver: Receiver<Vec<LogMessage>>,
    auto_scroll: bool,
    search_query: String,
    filter_level: LogLevel,
    verbose: bool,
}

impl Default for LogWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl LogWindow {
    pub fn new() -> Self {
        let log_path = Self::get_log_path();
        let (sender, receiver) = channel();

        // The watcher tails the log file and forwards parsed lines over the
        // channel. It is detached and exits once the receiver is gone.
        let watch_path = log_path.clone();
        thread::spawn(move || {
            let mut last_position = 0u64;

            loop {
                thread::sleep(Duration::from_millis(UPDATE_INTERVAL_MS));

                let file = match File::open(&watch_path) {
                    Ok(f) => f,
                    Err(_) => continue, // File doesn't exist yet
                };

                let mut reader = BufReader::new(file);

                if let Ok(metadata) = std::fs::metadata(&watch_path) {
                    let current_size = metadata.len();

                    // If the file was truncated or rotated, start over.
                    if current_size < last_position {
                        last_position = 0;
                    }

                    if reader.seek(SeekFrom::Start(last_position)).is_ok() {
                        let mut new_messages = Vec::new();
                        let mut line = String::new();

                        while reader.read_line(&mut line).unwrap_or(0) > 0 {
                            if !line.trim().is_empty() {
                                if let Some(msg) = Self::parse_log_line(&line) {
                                    new_messages.push(msg);
                                }
                            }
                            line.clear();
                        }

                        if let Ok(pos) = reader.stream_position() {
                            last_position = pos;
                        }

                        if !new_messages.is_empty() && sender.send(new_messages).is_err() {
                            // Window was dropped, nobody is listening anymore.
                            return;
                        }
                    }
                }
            }
        });

        Self {
            open: false,
            log_path,
            log_messages: Arc::new(Mutex::new(VecDeque::with_capacity(MAX_LOG_LINES))),
            log_receiver: receiver,
            auto_scroll: true,
            search_query: String::new(),
            filter_level: LogLevel::Info,
            verbose: false,
        }
    }

    fn get_log_path() -> PathBuf {
        if let Some(proj_dirs) = directories::ProjectDirs::from("com", "", "backforge") {
            let log_dir = proj_dirs.data_dir().join("logs");
            log_dir.join("backforge.log")
        } else {
            PathBuf::from("./backforge.log")
        }
    }

    /// Parse one line of the tracing fmt output:
    /// `2025-05-30T00:20:07.991790Z DEBUG backforge::app::forgeui::menu: Log button clicked`
    fn parse_log_line(line: &str) -> Option<LogMessage> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }

        let parts: Vec<&str> = trimmed.splitn(3, ' ').collect();
        if parts.len() == 3 {
            let timestamp = parts[0].to_string();
            let level = parts[1].to_string();
            let module_and_message = parts[2];

            // The ": " separator ends the module path; "::" inside the path
            // never precedes a space.
            if let Some(colon_pos) = module_and_message.find(": ") {
                let module = module_and_message[..colon_pos].to_string();
                let message = module_and_message[colon_pos + 2..].trim().to_string();

                return Some(LogMessage {
                    timestamp,
                    level,
                    message: format!("{}: {}", module, message),
                    full_line: line.to_string(),
                });
            }
        }

        // Continuation lines and panics don't follow the format; keep them as-is.
        Some(LogMessage {
            timestamp: String::new(),
            level: "INFO".to_string(),
            message: trimmed.to_string(),
            full_line: line.to_string(),
        })
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn show_with_focus(&mut self, ctx: &egui::Context, bring_to_front: bool) {
        if !self.open {
            return;
        }

        // Pull in anything the watcher found since last frame.
        while let Ok(new_messages) = self.log_receiver.try_recv() {
            if let Ok(mut messages) = self.log_messages.lock() {
                for msg in new_messages {
                    messages.push_back(msg);

                    while messages.len() > MAX_LOG_LINES {
                        messages.pop_front();
                    }
                }
            }
        }

        let screen_rect = ctx.screen_rect();
        let max_width = screen_rect.width() * 0.9;
        let max_height = screen_rect.height() * 0.9;

        let default_width = 800.0_f32.min(max_width);
        let default_height = 400.0_f32.min(max_height);

        let mut open = self.open;
        let mut window = egui::Window::new("Log Viewer")
            .open(&mut open)
            .default_size([default_width, default_height])
            .max_size([max_width, max_height])
            .constrain(true)
            .resizable(true)
            .movable(true);

        if bring_to_front {
            window = window.order(egui::Order::Foreground);
        }

        window.show(ctx, |ui| {
            self.ui_content(ui);
        });
        self.open = open;

        // Keep the tail fresh while the window is visible.
        ctx.request_repaint_after(Duration::from_millis(UPDATE_INTERVAL_MS));
    }

    fn ui_content(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Log file:");
            ui.monospace(self.log_path.display().to_string());

            ui.separator();

            ui.checkbox(&mut self.auto_scroll, "Auto-scroll");

            ui.separator();

            if ui
                .checkbox(&mut self.verbose, "Verbose")
                .on_hover_text("Switch the application log filter to trace output")
                .changed()
            {
                if let Err(e) = crate::set_verbose_logging(self.verbose) {
                    log_error!("Failed to update the log filter: {}", e);
                }
            }

            ui.separator();

            ui.label("Level:");
            egui::ComboBox::from_id_salt("log_level_filter")
                .selected_text(self.filter_level.as_str())
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.filter_level, LogLevel::Error, "ERROR");
                    ui.selectable_value(&mut self.filter_level, LogLevel::Warn, "WARN");
                    ui.selectable_value(&mut self.filter_level, LogLevel::Info, "INFO");
                    ui.selectable_value(&mut self.filter_level, LogLevel::Debug, "DEBUG");
                    ui.selectable_value(&mut self.filter_level, LogLevel::Trace, "TRACE");
                });

            ui.separator();

            ui.label("Search:");
            ui.text_edit_singleline(&mut self.search_query);

            if ui.button("Clear").clicked() {
                if let Ok(mut messages) = self.log_messages.lock() {
                    messages.clear();
                }
            }
        });

        ui.separator();

        egui::ScrollArea::both()
            .auto_shrink([false; 2])
            .stick_to_bottom(self.auto_scroll)
            .show(ui, |ui| {
                if let Ok(messages) = self.log_messages.lock() {
                    let total_messages = messages.len();
                    let mut shown_messages = 0;

                    for msg in messages.iter() {
                        let msg_level = LogLevel::from_str(&msg.level);
                        if !msg_level.should_show(&self.filter_level) {
                            continue;
                        }

                        if !self.search_query.is_empty()
                            && !msg
                                .full_line
                                .to_lowercase()
                                .contains(&self.search_query.to_lowercase())
                        {
                            continue;
                        }

                        shown_messages += 1;

                        ui.horizontal(|ui| {
                            ui.style_mut().wrap_mode = Some(egui::TextWrapMode::Extend);
                            ui.style_mut().text_styles.insert(
                                egui::TextStyle::Monospace,
                                egui::FontId::new(10.0, egui::FontFamily::Monospace),
                            );

                            if !msg.timestamp.is_empty() {
                                ui.monospace(&msg.timestamp);
                            }

                            let (level_color, level_text) = match msg.level.as_str() {
                                "ERROR" => (egui::Color32::from_rgb(255, 100, 100), "ERROR"),
                                "WARN" | "WARNING" => {
                                    (egui::Color32::from_rgb(255, 200, 100), "WARN")
                                }
                                "INFO" => (egui::Color32::from_rgb(100, 200, 255), "INFO"),
                                "DEBUG" => (egui::Color32::from_rgb(150, 150, 150), "DEBUG"),
                                "TRACE" => (egui::Color32::from_rgb(120, 120, 120), "TRACE"),
                                _ => (egui::Color32::from_rgb(200, 200, 200), msg.level.as_str()),
                            };

                            ui.colored_label(level_color, level_text);

                            ui.monospace(&msg.message);
                        });
                    }

                    if shown_messages < total_messages {
                        ui.separator();
                        ui.label(format!(
                            "Showing {} of {} messages (filtered by level: {})",
                            shown_messages,
                            total_messages,
                            self.filter_level.as_str()
                        ));
                    }
                }
            });
    }
}

impl FocusableWindow for LogWindow {
    type ShowParams = super::window_focus::SimpleShowParams;

    fn window_id(&self) -> &'static str {
        "log_window"
    }

    fn window_title(&self) -> String {
        "Log Viewer".to_string()
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn show_with_focus(
        &mut self,
        ctx: &egui::Context,
        _params: Self::ShowParams,
        bring_to_front: bool,
    ) {
        LogWindow::show_with_focus(self, ctx, bring_to_front);
    }
}
