use arincbox_frame::{START_RX, START_TX, TERMINATOR};
use arincbox_transport::DEFAULT_BAUD_RATE;

use crate::cmd::VersionArgs;
use crate::exit::{CliResult, SUCCESS};

pub fn run(args: VersionArgs) -> CliResult<i32> {
    if !args.extended {
        println!("arincbox {}", env!("CARGO_PKG_VERSION"));
        return Ok(SUCCESS);
    }

    println!("name: arincbox");
    println!("version: {}", env!("CARGO_PKG_VERSION"));
    println!("target_os: {}", std::env::consts::OS);
    println!("target_arch: {}", std::env::consts::ARCH);
    println!(
        "build_target: {}",
        option_env!("ARINCBOX_BUILD_TARGET").unwrap_or("unknown")
    );
    println!("features: async={}, cli=true", cfg!(feature = "async"));
    println!("default_baud: {DEFAULT_BAUD_RATE}");
    println!("markers: rx_start={START_RX:#04x} tx_start={START_TX:#04x} terminator={TERMINATOR:#04x}");

    Ok(SUCCESS)
}
