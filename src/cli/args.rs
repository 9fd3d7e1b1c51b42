use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(version, about = "Split a before/after collage into separate website images")]
pub struct CliArgs {
    /// Enable logging (written to stderr)
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_is_off_by_default() {
        let args = CliArgs::try_parse_from(["extract-whitening-after"]).unwrap();
        assert!(!args.log);
        let args = CliArgs::try_parse_from(["extract-whitening-after", "--log"]).unwrap();
        assert!(args.log);
    }

    #[test]
    fn paths_are_not_accepted() {
        assert!(CliArgs::try_parse_from(["split-whitening", "collage.jpg"]).is_err());
    }
}
