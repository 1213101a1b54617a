fn main() {
    if let Err(err) = star_catalog_lib::run() {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}
