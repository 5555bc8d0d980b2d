fn main() {
    if let Err(e) = fieldkit::app::installer::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
