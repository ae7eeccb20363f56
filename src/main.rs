fn main() {
    revnest::cli::run();
}
