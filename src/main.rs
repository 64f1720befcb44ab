// Golden-file runner: cargo run -- [test1 test2 ...] [--create]

fn main() {
    std::process::exit(parser_fixtures::cli::run());
}
