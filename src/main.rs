fn main() {
    if let Err(err) = crewflow_diagram::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
