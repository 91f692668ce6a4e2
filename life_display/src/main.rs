// main.rs - egui front end that owns and drives a life_grid board

use std::time::{Duration, Instant};

use anyhow::Context;
use eframe::egui;
use egui::Color32;
use life_grid::{Grid, patterns};

mod ui;

// Board geometry: a 50x50 board of 15px cells.
const BOARD_EXTENT: i32 = 750;
const CELL_SIDE: i32 = 15;
/// Random-seeding threshold. Draws *below* it seed a cell dead, so a
/// higher value starts a sparser board.
const SEED_THRESHOLD: f64 = 0.5;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let grid = Grid::new(BOARD_EXTENT, CELL_SIDE, SEED_THRESHOLD)
        .context("board dimensions are incompatible")?;
    log::info!(
        "board ready: {}px square, {}px cells, {} live",
        grid.extent(),
        grid.side(),
        grid.live_count()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([BOARD_EXTENT as f32 + 20.0, BOARD_EXTENT as f32 + 200.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Game of Life",
        options,
        Box::new(|_cc| Box::new(LifeApp::new(grid))),
    )
    .map_err(|err| anyhow::anyhow!("window session failed: {err}"))
}

/// The presentation side of the simulation: owns the board, advances it
/// on a timer, and maps liveness onto two caller-chosen colors.
pub struct LifeApp {
    pub grid: Grid,
    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub generation: u32,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
}

impl LifeApp {
    fn new(grid: Grid) -> Self {
        Self {
            grid,
            is_running: false,
            last_update: Instant::now(),
            update_interval: Duration::from_millis(200),
            generation: 0,
            live_color: Color32::from_rgb(0, 128, 128),
            dead_color: Color32::WHITE,
            selected_pattern: 0,
        }
    }

    pub fn advance_generation(&mut self) {
        self.grid.step();
        self.generation += 1;
    }

    pub fn clear_board(&mut self) {
        self.grid.clear();
        self.generation = 0;
    }

    pub fn reseed_board(&mut self) {
        self.grid.randomize();
        self.generation = 0;
    }

    pub fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = patterns::PATTERNS.get(self.selected_pattern) {
            patterns::apply_pattern(&mut self.grid, pattern);
            self.generation = 0;
            log::info!("seeded pattern {}", pattern.name);
        }
    }
}
