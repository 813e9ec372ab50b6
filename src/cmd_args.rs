use std::ffi::OsString;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Host name or IP address of the MatchaDB instance
    #[clap(help = "MatchaDB host [default: 127.0.0.1]")]
    host: Option<String>,

    /// Port of the MatchaDB instance
    #[clap(help = "MatchaDB port [default: 11150]")]
    port: Option<String>,

    /// Protocol prefix, including the separator (e.g. "https://")
    #[clap(help = "protocol prefix [default: http://]")]
    protocol: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    host: Option<String>,
    port: Option<String>,
    protocol: Option<String>,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        Self::from(ClapArgs::parse())
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::from(ClapArgs::parse_from(itr))
    }

    /// Host override, if one was given
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Port override, if one was given
    pub fn port(&self) -> Option<&str> {
        self.port.as_deref()
    }

    /// Protocol override, if one was given
    pub fn protocol(&self) -> Option<&str> {
        self.protocol.as_deref()
    }
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            host: args.host,
            port: args.port,
            protocol: args.protocol,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_values() {
        let args = CommandLineArgs::parse_from(["whisk"]);
        assert_eq!(args.host(), None);
        assert_eq!(args.port(), None);
        assert_eq!(args.protocol(), None);
    }

    #[test]
    fn test_parse_args_host_only() {
        let args = CommandLineArgs::parse_from(["whisk", "db.local"]);
        assert_eq!(args.host(), Some("db.local"));
        assert_eq!(args.port(), None);
    }

    #[test]
    fn test_parse_args_all_positionals() {
        let args = CommandLineArgs::parse_from(["whisk", "10.0.0.7", "8080", "https://"]);
        assert_eq!(args.host(), Some("10.0.0.7"));
        assert_eq!(args.port(), Some("8080"));
        assert_eq!(args.protocol(), Some("https://"));
    }
}
