#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use icon_picker::prelude::*;
use icon_picker::ui::StatusLine;

const PREVIEW_SIZE: f32 = 96.0;

/// Host window showing the current icon and a button opening the picker.
struct IconPickerApp {
    icon: String,
    settings: Settings,
    geometry: SharedGeometryStore,
    dialog: Option<PickerDialog>,
    selected: Rc<RefCell<Option<String>>>,
    status: StatusLine,
}

impl IconPickerApp {
    fn new(cc: &eframe::CreationContext, icon: String, settings: Settings) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        icon_font().setup_fonts(&cc.egui_ctx);

        let mut status = StatusLine::default();
        if !load_icon_font() {
            status.warn("Icon font failed to load, icons will be blank");
        }

        let geometry: SharedGeometryStore = match &settings.dialog.geometry_file {
            Some(path) => match TomlGeometryStore::open(path) {
                Ok(store) => Rc::new(RefCell::new(store)),
                Err(e) => {
                    status.warn(format!("Cannot read {}: {}", path.display(), e));
                    Rc::new(RefCell::new(MemoryGeometryStore::default()))
                }
            },
            None => Rc::new(RefCell::new(MemoryGeometryStore::default())),
        };

        Self {
            icon,
            settings,
            geometry,
            dialog: None,
            selected: Rc::new(RefCell::new(None)),
            status,
        }
    }

    fn open_dialog(&mut self) {
        let selected = Rc::clone(&self.selected);
        let dialog = PickerDialog::new(self.icon.clone(), ICONS)
            .with_settings(&self.settings)
            .with_geometry_store(Rc::clone(&self.geometry))
            .on_icon_selected(move |icon| *selected.borrow_mut() = Some(icon.to_string()));
        self.dialog = Some(dialog);
    }

    fn show_dialog(&mut self, ctx: &Context) {
        let Some(dialog) = self.dialog.as_mut() else {
            return;
        };
        match dialog.show(ctx) {
            Some(DialogOutcome::Accepted(choice)) => {
                if let Some(icon) = self.selected.borrow_mut().take() {
                    self.icon = icon;
                }
                self.status.info(format!("Icon set to {}", choice));
                self.dialog = None;
            }
            Some(DialogOutcome::Rejected) => {
                self.status.info("Icon selection cancelled");
                self.dialog = None;
            }
            None => {}
        }
    }

    fn show_preview(&self, ui: &mut Ui) {
        let (rect, _) = ui.allocate_exact_size(Vec2::splat(PREVIEW_SIZE), egui::Sense::hover());
        ui.painter()
            .rect_stroke(rect, 4.0, ui.visuals().widgets.noninteractive.bg_stroke, egui::StrokeKind::Inside);

        match IconChoice::parse(&self.icon) {
            Some(IconChoice::Glyph(glyph)) => {
                let policy = self.settings.sizing_policy();
                let size = icon_font().fit_size(rect.width() as u32, rect.height() as u32, &policy);
                ui.painter().text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    glyph,
                    icon_font().font_id(size),
                    ui.visuals().text_color(),
                );
            }
            Some(IconChoice::File(path)) => {
                let image = egui::Image::from_uri(format!("file://{}", path.display()))
                    .fit_to_exact_size(rect.size());
                ui.put(rect, image);
            }
            None => {
                ui.put(rect, egui::Label::new(RichText::new("No icon").weak()));
            }
        }
    }
}

impl eframe::App for IconPickerApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.status
            .clear_expired(Duration::from_secs(STATUS_TIMEOUT));

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.status.show(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(self.dialog.is_none(), |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(16.0);
                    self.show_preview(ui);
                    ui.add_space(8.0);
                    if ui.button("Choose Icon...").clicked() {
                        self.open_dialog();
                    }
                    ui.label(RichText::new(icon_font().family()).weak());
                });
            });
        });

        self.show_dialog(ctx);
    }
}

fn main() {
    env_logger::Builder::from_default_env()
        .format_timestamp_secs()
        .init();

    log::info!("Initialising...");

    let settings = Settings::from_env().unwrap_or_else(|e| {
        log::warn!("Using default settings: {}", e);
        Settings::default()
    });
    let icon = std::env::args().nth(1).unwrap_or_default();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([WIN_WIDTH, WIN_HEIGHT]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        NAME,
        native_options,
        Box::new(move |cc| Ok(Box::new(IconPickerApp::new(cc, icon, settings)))),
    ) {
        log::error!("Failed to start: {}", e);
    }
}
