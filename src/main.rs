use log::{error, info};
use macroquad::prelude::*;
use emergence::{
    Simulation, SimulationConfig, TickOutcome, TickScheduler,
    rendering::{self, CellPalette},
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Emergence".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = SimulationConfig::default();
    if let Err(err) = config.validate() {
        error!("invalid simulation config: {err}");
        return;
    }

    let cell_size = config.cell_size;
    let mut viewport = (screen_width(), screen_height());
    let (width, height) = rendering::viewport_grid_size(viewport.0, viewport.1, cell_size);
    info!("starting {width}x{height} grid");

    let mut scheduler = TickScheduler::new(config.tick_interval);
    let mut sim = Simulation::new(config, width, height);
    let palette = CellPalette::default();
    scheduler.start();

    loop {
        // Resize replaces the grid; restart the timer so the next tick sees the new one
        let current = (screen_width(), screen_height());
        if current != viewport {
            viewport = current;
            let (width, height) = rendering::viewport_grid_size(current.0, current.1, cell_size);
            scheduler.cancel();
            sim.resize(width, height);
            scheduler.start();
        }

        if scheduler.advance(get_frame_time()) && sim.tick() == TickOutcome::Reset {
            scheduler.restart();
        }

        rendering::draw_grid(sim.grid(), sim.state(), &palette, cell_size);

        next_frame().await;
    }
}
