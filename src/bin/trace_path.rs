use livewire::config::trace::load_config;
use livewire::diagnostics::{SegmentTrace, TimingBreakdown, TraceReport};
use livewire::image::io::{load_rgba_image, save_map_png, write_json_file};
use livewire::{Point, Scissors};
use std::env;
use std::path::Path;
use std::time::Instant;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;
    if config.targets.is_empty() {
        return Err("Config lists no targets".to_string());
    }

    let mut timing = TimingBreakdown::default();
    let rgba = timing.measure("load", || load_rgba_image(&config.input))?;

    let mut scissors = Scissors::new(config.scissors.clone()).map_err(|e| e.to_string())?;
    scissors
        .set_dimensions(rgba.width(), rgba.height())
        .map_err(|e| e.to_string())?;
    timing
        .measure("features", || scissors.set_data(rgba.bytes()))
        .map_err(|e| e.to_string())?;

    let mut segments = Vec::with_capacity(config.targets.len());
    let mut seed = config.seed;
    for (i, &target) in config.targets.iter().enumerate() {
        let segment = trace_segment(&mut scissors, seed, target, config.max_batches)?;
        timing.push(format!("segment_{i}"), segment.elapsed_ms);
        if segment.reached {
            if config.train_after_each {
                let trained = scissors.do_training(target).map_err(|e| e.to_string())?;
                if !trained {
                    println!("Segment {i} too short to train on; keeping previous weights");
                }
            }
            seed = target;
        } else {
            println!(
                "Segment {i} did not reach ({}, {}); next segment restarts from ({}, {})",
                target.x, target.y, seed.x, seed.y
            );
        }
        segments.push(segment);
    }

    if let Some(features) = scissors.features() {
        if let Some(path) = &config.output.gradient_image {
            save_map_png(&features.gradient, path)?;
        }
        if let Some(path) = &config.output.laplace_image {
            save_map_png(&features.laplace, path)?;
        }
    }

    let report = TraceReport {
        width: rgba.width(),
        height: rgba.height(),
        params: config.scissors,
        segments,
        timing,
    };
    write_json_file(&config.output.trace_json, &report)?;

    let reached = report.segments.iter().filter(|s| s.reached).count();
    println!(
        "Traced {reached}/{} segments ({} contour points) in {:.3} ms",
        report.segments.len(),
        report.contour().len(),
        report.timing.total_ms
    );
    println!("Saved trace to {}", config.output.trace_json.display());
    Ok(())
}

fn trace_segment(
    scissors: &mut Scissors,
    seed: Point,
    target: Point,
    max_batches: usize,
) -> Result<SegmentTrace, String> {
    let start = Instant::now();
    let trained = scissors.training().is_trained();
    scissors.set_point(seed).map_err(|e| e.to_string())?;

    let mut batches = 0;
    while batches < max_batches && !scissors.is_reachable(target) {
        if scissors.do_work().is_empty() {
            break;
        }
        batches += 1;
    }

    let points = scissors.path_to(target).unwrap_or_default();
    Ok(SegmentTrace {
        seed,
        target,
        reached: !points.is_empty(),
        trained,
        batches,
        path_cost: scissors.cost(target).unwrap_or(f64::INFINITY),
        points,
        elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
    })
}

fn usage() -> String {
    "Usage: trace_path <config.json>".to_string()
}
