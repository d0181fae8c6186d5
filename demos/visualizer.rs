//! Terminal pathfinding visualizer using crossterm.
//!
//! Run: cargo run --bin visualizer

use gridwalk_core::GridConfig;
use gridwalk_crossterm::Terminal;
use gridwalk_demos::{Visualizer, VisualizerConfig};

fn run(term: &mut Terminal, vis: &mut Visualizer) -> Result<(), Box<dyn std::error::Error>> {
    let tick = vis.config().tick;
    while !vis.is_done() {
        term.draw(vis.context(), &vis.status())?;
        if let Some(input) = term.poll_input(tick)? {
            if let Err(e) = vis.apply(input) {
                log::warn!("visualizer: {e}");
            }
        }
        vis.tick()?;
    }
    Ok(())
}

fn main() {
    let mut vis = match Visualizer::new(GridConfig::default(), VisualizerConfig::default()) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let mut term = Terminal::new();
    let result = match term.init() {
        Ok(()) => run(&mut term, &mut vis),
        Err(e) => Err(e.into()),
    };
    term.close();

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
