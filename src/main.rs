fn main() {
    authseed::app::cli::run();
}
