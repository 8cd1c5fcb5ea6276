fn main() {
    if let Err(e) = runner::find::get_args().and_then(runner::find::run) {
        // --help and --version land here too, they go to stdout and exit 0
        if let Some(e) = e.downcast_ref::<clap::Error>() {
            if !e.use_stderr() {
                e.exit();
            }
        }
        eprintln!("{}", e.to_string().trim_end());
        std::process::exit(1);
    }
}
