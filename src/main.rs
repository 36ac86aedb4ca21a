fn main() {
    if let Err(e) = charla::cli::main() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
