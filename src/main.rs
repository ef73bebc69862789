use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use macroquad::prelude::*;
use cellular_terrain::{
    CellularAutomaton, GeneratorConfig, TileMap,
    application::{Pacer, TileHandle},
    domain::{CancelToken, Cancelled, GridSize, Material, TileSurface},
    rendering,
};

const MAP_WIDTH: usize = 120;
const MAP_HEIGHT: usize = 80;

fn window_conf() -> Conf {
    Conf {
        window_title: "Cellular Automaton Terrain".to_owned(),
        window_width: 1000,
        window_height: 640,
        window_resizable: true,
        ..Default::default()
    }
}

/// Tile map shared between the generator and the frame loop
struct SharedTiles(Rc<RefCell<TileMap>>);

impl GridSize for SharedTiles {
    fn dimensions(&self) -> (usize, usize) {
        self.0.borrow().dimensions()
    }
}

impl TileSurface for SharedTiles {
    type Cell = TileHandle;

    fn cell_at(&self, x: usize, y: usize) -> Option<TileHandle> {
        self.0.borrow().cell_at(x, y)
    }

    fn place(&mut self, cell: TileHandle, material: Material, overwrite: bool) {
        self.0.borrow_mut().place(cell, material, overwrite);
    }
}

/// Pacer that keeps drawing frames while the generator is paused.
/// Escape cancels the run.
struct FramePacer {
    tiles: Rc<RefCell<TileMap>>,
}

impl FramePacer {
    async fn frame(&self, cancel: &CancelToken) -> Result<(), Cancelled> {
        if is_key_pressed(KeyCode::Escape) {
            cancel.cancel();
        }
        draw_frame(&self.tiles.borrow(), "Generating...");
        next_frame().await;
        cancel.check()
    }
}

impl Pacer for FramePacer {
    async fn delay(&self, duration: Duration, cancel: &CancelToken) -> Result<(), Cancelled> {
        let until = get_time() + duration.as_secs_f64();
        loop {
            self.frame(cancel).await?;
            if get_time() >= until {
                return Ok(());
            }
        }
    }

    async fn yield_once(&self, cancel: &CancelToken) -> Result<(), Cancelled> {
        self.frame(cancel).await
    }
}

fn draw_frame(map: &TileMap, status: &str) {
    clear_background(BLACK);
    rendering::draw_tiles(map);
    rendering::draw_panel(map, status);
}

/// Optional JSON config path as the first argument
fn load_config() -> GeneratorConfig {
    let Some(path) = std::env::args().nth(1) else {
        return GeneratorConfig {
            step_delay_ms: 250,
            ..GeneratorConfig::default()
        };
    };

    match std::fs::read_to_string(&path) {
        Ok(json) => GeneratorConfig::from_json_str(&json).unwrap_or_else(|err| {
            log::error!("{}: {}", path, err);
            GeneratorConfig::default()
        }),
        Err(err) => {
            log::error!("Failed to read {}: {}", path, err);
            GeneratorConfig::default()
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let tiles = Rc::new(RefCell::new(TileMap::new(MAP_WIDTH, MAP_HEIGHT)));
    let mut automaton = CellularAutomaton::new(load_config());

    loop {
        tiles.borrow_mut().clear();
        let cancel = CancelToken::new();
        let pacer = FramePacer { tiles: tiles.clone() };
        let mut surface = SharedTiles(tiles.clone());

        let status = match automaton.generate(&mut surface, &pacer, &cancel).await {
            Ok(summary) => format!("Done, seed {}", summary.seed),
            Err(Cancelled) => "Generation stopped".to_string(),
        };

        loop {
            draw_frame(&tiles.borrow(), &status);
            if is_key_pressed(KeyCode::R) {
                break;
            }
            next_frame().await;
        }
        next_frame().await;
    }
}
