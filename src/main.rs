use rollbook::ui::output;

fn main() {
    if let Err(err) = rollbook::cli::run() {
        output::error(format!("{err:#}"));
        std::process::exit(1);
    }
}
