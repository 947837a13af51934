fn main() {
    pyship::app::cli::run();
}
