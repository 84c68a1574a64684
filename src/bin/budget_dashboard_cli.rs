use budget_dashboard::{cli::run_cli, init};

fn main() {
    init();

    if let Err(err) = run_cli() {
        budget_dashboard::cli::output::error(&err);
        std::process::exit(1);
    }
}
