fn main() {
    if let Err(err) = keel::cli::run() {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}
