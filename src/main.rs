fn main() {
    omniupdate::run_cli()
}
