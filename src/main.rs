#![deny(warnings)]

mod options;

use clap::Parser;
use hillshade::batch::{run_batch, FileSink};
use hillshade::synthetic::two_peak_dem;
use hillshade::tiff_reader::read_dem_tiff;
use options::Options;

fn main() {
    let options = Options::parse();

    let dem = match read_dem_tiff(&options.input) {
        Ok(dem) => dem,
        Err(error) => {
            println!("Failed to load the input raster: {}", error);
            println!("Falling back to synthetic two-peak terrain...");

            two_peak_dem(options.synthetic_size)
        }
    };

    let (min_height, max_height) = dem.min_max();
    println!("Elevation raster: {}x{}", dem.width, dem.height);
    println!("Height range: {:.2} to {:.2}", min_height, max_height);

    let sink = FileSink::new(&options.output_dir, options.format.extension());

    let lights = &options.lights.0;
    let saved = run_batch(&dem, lights, &sink);

    println!("Saved {} of {} images", saved, lights.len());
}
