use huekit::{customize_hex, hex_to_rgb, HexColor};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    for hex in ["#ff0000", "abc123", "#336699", "#fff", "not a color"] {
        let rgb = hex_to_rgb(hex);
        println!(
            "{:>12} -> {:?} -> {:?} -> {}",
            hex,
            rgb,
            rgb.to_hsl(),
            customize_hex(hex)
        );

        if let Err(err) = hex.parse::<HexColor>() {
            println!("{:>12}    ({})", "", err);
        }
    }
}
