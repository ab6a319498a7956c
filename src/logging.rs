/// Installs the logger: `info` unless `RUST_LOG` says otherwise, written to stdout.
pub fn init()
{
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .target(env_logger::Target::Stdout)
        .format_timestamp(None)
        .init();
}
