use livewire::{Point, Scissors};

fn main() {
    env_logger::init();

    // Demo: a synthetic vertical step, traced along the edge.
    let (w, h) = (64usize, 48usize);
    let split = 32usize;
    let mut rgba = Vec::with_capacity(w * h * 4);
    for _y in 0..h {
        for x in 0..w {
            let v = if x < split { 40u8 } else { 210u8 };
            rgba.extend_from_slice(&[v, v, v, 255]);
        }
    }

    let mut scissors = Scissors::default();
    let result = scissors
        .set_dimensions(w, h)
        .and_then(|_| scissors.set_data(&rgba))
        .and_then(|_| scissors.set_point(Point::new(split - 1, 4)))
        .and_then(|_| scissors.search_to(Point::new(split - 1, h - 5), 1_000));

    match result {
        Ok(Some(path)) => {
            let off_edge = path.iter().filter(|p| p.x != split - 1).count();
            println!("path_len={} off_edge={}", path.len(), off_edge);
        }
        Ok(None) => println!("target not reached"),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
