use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "sum-program")]
#[command(version)]
#[command(about = "Reads two numbers from standard input and prints their sum")]
pub struct CliConfig {
    #[arg(short, long, help = "Enable verbose output on stderr")]
    pub verbose: bool,
}
