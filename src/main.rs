fn main() {
    folio::cli::run();
}
