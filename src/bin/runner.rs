fn main() {
    if let Err(e) = runner::dispatch::get_args().and_then(runner::dispatch::run) {
        eprintln!("{}", e.to_string().trim_end());
        std::process::exit(1);
    }
}
