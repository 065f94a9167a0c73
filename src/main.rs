fn main() {
    argogen::app::cli::run();
}
