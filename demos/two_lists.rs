// Demo: two independent paginated lists sharing one view

use chrono::{DateTime, Local};
use eframe::egui;
use egui_paginate::{ListBinding, PageCell, PaginationContext, PaginationControls};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Demo configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
struct Config {
    books_per_page: usize,
    files_per_page: usize,
    /// Link slots in the controls row (floor 5)
    max_size: usize,
    /// Show first/last jump arrows on the files list
    boundary_links: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            books_per_page: 8,
            files_per_page: 12,
            max_size: 9,
            boundary_links: true,
        }
    }
}

impl Config {
    /// Get the path to the config file
    fn config_path() -> Option<PathBuf> {
        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "egui-paginate-demo") {
            return Some(proj_dirs.config_dir().join("config.toml"));
        }
        None
    }

    /// Load configuration from file, or return defaults if file doesn't exist
    fn load() -> Self {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                match fs::read_to_string(&path) {
                    Ok(contents) => match toml::from_str::<Config>(&contents) {
                        Ok(config) => return config,
                        Err(e) => {
                            eprintln!("Failed to parse config file: {}", e);
                            eprintln!("Using default configuration");
                        }
                    },
                    Err(e) => {
                        eprintln!("Failed to read config file: {}", e);
                        eprintln!("Using default configuration");
                    }
                }
            }
        }
        Config::default()
    }

    /// Save configuration to file
    fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let contents = toml::to_string_pretty(self)?;
            fs::write(&path, contents)?;
            return Ok(());
        }
        Err("Could not determine config directory".into())
    }
}

struct FileRow {
    name: String,
    size: u64,
    modified: SystemTime,
}

fn demo_files() -> Vec<FileRow> {
    let extensions = ["txt", "md", "rs", "toml", "csv"];
    let base = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
    (0..137)
        .map(|i: u64| FileRow {
            name: format!("report-{:03}.{}", i, extensions[(i % 5) as usize]),
            size: ((i * 37) % 900 + 1) * 1024,
            modified: base + Duration::from_secs(i * 28_800),
        })
        .collect()
}

fn demo_books() -> Vec<String> {
    let subjects = ["Rivers", "Mountains", "Harbors", "Forests", "Islands"];
    let regions = ["the North", "the Coast", "the Valley", "the Highlands"];
    (1..=100)
        .map(|i: usize| {
            format!(
                "{} of {}, vol. {}",
                subjects[i % 5],
                regions[i % 4],
                i
            )
        })
        .collect()
}

struct DemoApp {
    pg: PaginationContext,
    cfg: Config,

    books: Vec<String>,
    files: Vec<FileRow>,

    books_list: ListBinding,
    files_list: ListBinding,
    books_page: PageCell,

    search: String,
    status: Option<String>,
}

impl DemoApp {
    fn new() -> Self {
        let cfg = Config::load();

        // Setup fails fast on a bad declaration; these are static, so a
        // panic here is a programming error in the demo itself.
        let mut books_list = ListBinding::setup_with_id(
            "book in books | search: query | items_per_page: booksPerPage : 'books'",
            "books",
        )
        .expect("books list declaration");
        let mut files_list = ListBinding::setup_with_id(
            "file in files | items_per_page: filesPerPage : 'files'",
            "files",
        )
        .expect("files list declaration");

        books_list.set_page_size(cfg.books_per_page);
        files_list.set_page_size(cfg.files_per_page);

        let books_page = PageCell::new(1);
        books_list.bind_current_page(books_page.clone());

        Self {
            pg: PaginationContext::new(),
            cfg,
            books: demo_books(),
            files: demo_files(),
            books_list,
            files_list,
            books_page,
            search: String::new(),
            status: None,
        }
    }

    fn save_config(&self) {
        if let Err(e) = self.cfg.save() {
            eprintln!("Failed to save config: {}", e);
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // --- Top bar: filter and page-size settings ---
        let mut config_changed = false;
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label("Filter books:");
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.search).desired_width(160.0),
                );
                if response.changed() {
                    // A new filter restarts the books list at page 1.
                    self.books_page.set(1);
                }

                ui.separator();
                ui.label("Books/page:");
                if ui
                    .add(egui::DragValue::new(&mut self.cfg.books_per_page).range(1..=50))
                    .changed()
                {
                    self.books_list.set_page_size(self.cfg.books_per_page);
                    config_changed = true;
                }
                ui.label("Files/page:");
                if ui
                    .add(egui::DragValue::new(&mut self.cfg.files_per_page).range(1..=50))
                    .changed()
                {
                    self.files_list.set_page_size(self.cfg.files_per_page);
                    config_changed = true;
                }
                ui.label("Links:");
                if ui
                    .add(egui::DragValue::new(&mut self.cfg.max_size).range(5..=15))
                    .changed()
                {
                    config_changed = true;
                }
                if ui
                    .checkbox(&mut self.cfg.boundary_links, "First/last arrows")
                    .changed()
                {
                    config_changed = true;
                }
            });
            ui.add_space(4.0);
        });
        if config_changed {
            self.save_config();
        }

        // --- Bottom bar: status ---
        egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!(
                    "{} books | {} files",
                    self.books.len(),
                    self.files.len()
                ));
                if let Some(status) = &self.status {
                    ui.separator();
                    ui.label(status);
                }
            });
        });

        let Self {
            pg,
            cfg,
            books,
            files,
            books_list,
            files_list,
            search,
            status,
            ..
        } = self;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |columns| {
                // --- Books: filter chain composes ahead of pagination ---
                let ui = &mut columns[0];
                ui.heading("Books");
                ui.separator();

                let needle = search.to_lowercase();
                let filtered: Vec<&String> = books
                    .iter()
                    .filter(|title| needle.is_empty() || title.to_lowercase().contains(&needle))
                    .collect();

                books_list.show(ui, pg, &filtered, |ui, title| {
                    ui.label(title.as_str());
                });
                ui.add_space(6.0);
                let controls = PaginationControls::for_instance("books")
                    .max_size(cfg.max_size)
                    .on_page_change(|page| {
                        *status = Some(format!("Books: switched to page {}", page));
                    });
                if let Err(e) = controls.show(ui, pg) {
                    ui.colored_label(egui::Color32::RED, e.to_string());
                }

                // --- Files: table with boundary links ---
                let ui = &mut columns[1];
                ui.heading("Files");
                ui.separator();

                let page = files_list.paginate(pg, files);
                use egui_extras::{Column, TableBuilder};
                TableBuilder::new(ui)
                    .striped(true)
                    .resizable(false)
                    .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                    .column(Column::remainder().clip(true))
                    .column(Column::auto().at_least(70.0))
                    .column(Column::auto().at_least(110.0))
                    .header(20.0, |mut header| {
                        header.col(|ui| {
                            ui.label("Name");
                        });
                        header.col(|ui| {
                            ui.label("Size");
                        });
                        header.col(|ui| {
                            ui.label("Modified");
                        });
                    })
                    .body(|body| {
                        body.rows(20.0, page.len(), |mut row| {
                            let file = &page[row.index()];
                            row.col(|ui| {
                                ui.label(&file.name);
                            });
                            row.col(|ui| {
                                ui.label(bytesize::ByteSize(file.size).to_string());
                            });
                            row.col(|ui| {
                                let modified: DateTime<Local> = file.modified.into();
                                ui.label(modified.format("%Y-%m-%d %H:%M").to_string());
                            });
                        });
                    });
                ui.add_space(6.0);
                let controls = PaginationControls::for_instance("files")
                    .max_size(cfg.max_size)
                    .boundary_links(cfg.boundary_links)
                    .on_page_change(|page| {
                        *status = Some(format!("Files: switched to page {}", page));
                    });
                if let Err(e) = controls.show(ui, pg) {
                    ui.colored_label(egui::Color32::RED, e.to_string());
                }
            });
        });
    }
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([980.0, 640.0])
            .with_title("Paginated lists"),
        ..Default::default()
    };

    eframe::run_native(
        "egui-paginate demo",
        options,
        Box::new(|_cc| Ok(Box::new(DemoApp::new()))),
    )
}
