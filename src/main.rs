fn main() {
    jokegen::app::cli::run();
}
