fn main() {
    let cli = lattice_planes::args::parse_cli_args();

    if let Err(err) = lattice_planes::handle_cli_args(cli) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
