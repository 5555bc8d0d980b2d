fn main() {
    if let Err(e) = fieldkit::app::archiver::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
