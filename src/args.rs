use clap::Parser;

pub const DEFAULT_DEVICE: &str = "SW1";

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"))] // Application name from Cargo metadata.
#[command(author = env!("CARGO_PKG_AUTHORS"))] // Author(s) from Cargo metadata.
#[command(version = env!("CARGO_PKG_VERSION"))] // Version from Cargo metadata.
#[command(
    about = "Send a get_interfaces tool call to a local MCP server and print the reply.",
    long_about = "mcp-probe: POSTs a single JSON-RPC `tools/call` request for the `get_interfaces` \
    tool to a locally running MCP server and prints the HTTP status and body. \
    Useful to verify that the server container is up and answering before wiring up a real client."
)]
pub struct Args {
    #[arg(default_value = DEFAULT_DEVICE, help = "Device name passed to get_interfaces")]
    pub device: String,

    #[arg(short, long, help = "Config file")]
    pub config: Option<String>,

    #[arg(long, help = "Target host, overrides the config file")]
    pub host: Option<String>,

    #[arg(short, long, help = "Target port, overrides the config file")]
    pub port: Option<u16>,

    #[arg(short, long, default_value = "false", help = "Enable debug mode")]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_defaults_to_sw1() {
        let args = Args::try_parse_from(["mcp-probe"]).unwrap();

        assert_eq!(args.device, "SW1");
        assert!(args.config.is_none());
        assert!(args.host.is_none());
        assert!(args.port.is_none());
        assert!(!args.debug);
    }

    #[test]
    fn positional_device_is_taken_verbatim() {
        let args = Args::try_parse_from(["mcp-probe", "core-sw 02/\"lab\""]).unwrap();

        assert_eq!(args.device, "core-sw 02/\"lab\"");
    }

    #[test]
    fn target_overrides() {
        let args =
            Args::try_parse_from(["mcp-probe", "R1", "--host", "10.0.0.5", "-p", "9000", "-d"])
                .unwrap();

        assert_eq!(args.device, "R1");
        assert_eq!(args.host.as_deref(), Some("10.0.0.5"));
        assert_eq!(args.port, Some(9000));
        assert!(args.debug);
    }

    #[test]
    fn rejects_out_of_range_port() {
        assert!(Args::try_parse_from(["mcp-probe", "--port", "70000"]).is_err());
    }
}
