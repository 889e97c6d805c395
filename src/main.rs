use statespace::solver;

fn main() {
    if let Err(e) = solver() {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
