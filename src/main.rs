use clap::{Parser, Subcommand};
use img_fetch::utils::images;

/// Simple program to fetch a remote image and encode it or save it locally
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch an image and print it as a base64 data URI
    Encode {
        /// URL of the image to fetch
        url: String,
    },
    /// Fetch an image and save its raw bytes to disk
    Store {
        /// URL of the image to fetch
        url: String,

        /// Filename to save the image as
        filename: String,

        /// Directory to save the image to
        #[arg(short, long, default_value = images::DEFAULT_DIRECTORY)]
        directory: String,
    },
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let result = match args.command {
        Commands::Encode { url } => images::encode_image(&url).await,
        Commands::Store {
            url,
            filename,
            directory,
        } => images::store_image(&url, &filename, Some(&directory)).await,
    };

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
