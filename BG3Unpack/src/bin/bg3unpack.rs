fn main() -> anyhow::Result<()> {
    bg3unpack::cli::run_cli()
}
