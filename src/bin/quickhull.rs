use divconq::config::BuildConfig;
use divconq::driver;
use divconq::generate::random_points;
use divconq::quickhull::QuickhullBuilder;

const PROGRAM: &str = "quickhull";

fn main() {
    driver::init_tracing();

    let n = match driver::parse_size(std::env::args_os()) {
        Ok(n) => n,
        Err(error) => driver::exit_with_usage(PROGRAM, &error),
    };
    let config = match BuildConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("Error: {}", error);
            std::process::exit(error.exit_code());
        }
    };

    let points = random_points(n, driver::SEED);
    let builder = QuickhullBuilder::from(config);
    let hull = driver::time_rounds("Quickhull", 1, || builder.build(&points)).unwrap_or_default();

    println!("number of points in upper hull = {}", hull.len());
}
