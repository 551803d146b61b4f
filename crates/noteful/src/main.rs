fn main() {
    if let Err(e) = noteful::cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
