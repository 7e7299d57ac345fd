fn main() {
    #[cfg(feature = "cli")]
    slimline::cli::run();

    #[cfg(not(feature = "cli"))]
    {
        eprintln!("slimline: CLI not enabled. Rebuild with `--features cli`.");
        std::process::exit(1);
    }
}
