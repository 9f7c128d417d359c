use scene_baker::cli::{self, Args};

fn main() -> anyhow::Result<()> {
    let args = Args::parse_ordered();
    cli::init_logger(args.log_level());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli::run(&args, &mut out)
}
