use clap::Parser;

/// LinkedIn OAuth connect flow server
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Listen address
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Listen port
    #[arg(short, long, default_value_t = 3000)]
    pub port: u16,
}
