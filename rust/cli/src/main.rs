use std::io;

fn main() {
    felt_cli::logging::init_logging();
    let code = felt_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
