//! Frame cost benchmark: generations plus a full decode and redraw

use std::time::Instant;
use life_canvas::{AppConfig, Canvas, GridSize, LifeUniverse, Renderer, Universe};

/// Average milliseconds per tick
fn benchmark_tick(size: u32, iterations: u32) -> f64 {
    let mut universe = LifeUniverse::new(size, size);

    let start = Instant::now();
    for _ in 0..iterations {
        universe.tick();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

/// Average milliseconds per full grid + universe redraw
fn benchmark_redraw(renderer: &Renderer, size: u32, iterations: u32) -> f64 {
    let universe = LifeUniverse::new(size, size);
    let Some(grid) = GridSize::try_new(size as i32, size as i32) else {
        return 0.0;
    };
    let (width, height) = renderer.canvas_size(grid);
    let mut canvas = Canvas::new(width, height);

    let start = Instant::now();
    for _ in 0..iterations {
        renderer.draw_grid(&mut canvas, grid);
        renderer.draw_universe(&mut canvas, grid, universe.cells());
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life Frame Benchmark ===\n");

    let config = AppConfig::default();
    let renderer = Renderer::new(config.cell_size, config.palette.to_palette());
    let sizes = [32, 64, 128, 256, 512];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>12} {:>10}", "Size", "Tick", "Redraw", "Frame", "Max FPS");
    println!("{:-<60}", "");

    for size in sizes {
        let tick_ms = benchmark_tick(size, iterations);
        let redraw_ms = benchmark_redraw(&renderer, size, iterations);
        let frame_ms = tick_ms + redraw_ms;

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>12.3} {:>10.0}",
            format!("{}x{}", size, size),
            tick_ms,
            redraw_ms,
            frame_ms,
            1000.0 / frame_ms
        );
    }

    println!("\n=== Batched speed at 256x256 ===\n");

    for speed in [1, 5, 20] {
        let frame_ms = benchmark_tick(256, iterations) * speed as f64 + benchmark_redraw(&renderer, 256, 5);
        println!("speed {:>3}: {:>8.2} ms/frame, {:>8.0} gen/s", speed, frame_ms, speed as f64 * 1000.0 / frame_ms);
    }
}
