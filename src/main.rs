use env_logger::Env;


mod backend;
mod frontend;


fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .init();

    if let Err(error) = frontend::cli::cli() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}
