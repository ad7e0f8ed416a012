use data_loader::Catalog;
use std::path::Path;
use std::time::Instant;

fn main() {
    let data_dir = Path::new("data/catalog");

    println!("Loading catalog from {}...\n", data_dir.display());

    let start = Instant::now();
    let catalog = Catalog::load_from_files(data_dir)
        .expect("Failed to load catalog");
    let elapsed = start.elapsed();

    let counts = catalog.counts();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", counts.movies);
    println!("Ratings: {}", counts.ratings);
    println!("Directors: {}", counts.directors);
    println!("Critics: {}", counts.critics);
    println!("Genres: {}", counts.genres);
}
