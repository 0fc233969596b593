use anyhow::{Context, Result};
use base64_padfix::{STANDARD, URL_SAFE, logger::setup_logger};

fn main() -> Result<()> {
    setup_logger();

    let args: Vec<String> = std::env::args().collect();

    let (encoding, input) = match args.as_slice() {
        [_, input] => (&STANDARD, input),
        [_, flag, input] if flag == "--url" => (&URL_SAFE, input),
        _ => {
            let name = args.first().map_or("decode64-padfix", String::as_str);
            log::error!("Usage: {name} [--url] <base64 string>");
            std::process::exit(1);
        }
    };

    let decoded = encoding.decode_string(input)?;
    let text = String::from_utf8(decoded).context("decoded bytes are not valid UTF-8")?;
    log::info!("[Decoded Text] {text}");

    Ok(())
}
