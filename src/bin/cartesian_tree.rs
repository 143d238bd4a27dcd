use divconq::cartesian_tree::{tree_depth, CartesianTreeBuilder};
use divconq::config::BuildConfig;
use divconq::driver;
use divconq::generate::random_values;

const PROGRAM: &str = "cartesian_tree";
const ROUNDS: usize = 3;

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

    let values = random_values(n, driver::SEED);
    let builder = CartesianTreeBuilder::from(config);
    let parents = driver::time_rounds("Cartesian Tree", ROUNDS, || builder.build(&values))
        .unwrap_or_default();

    println!("depth of tree: {}", tree_depth(&parents));
}
