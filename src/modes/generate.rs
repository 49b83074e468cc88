use anyhow::{Context, Result};
use std::io::{self, Write};

use crate::{
    dns::reverse::reverse_label,
    io::{cli::GenerateArgs, json::ZoneOutput, output::write_labels},
    log_info, log_success, log_warn,
    network::{
        error::PrefixError,
        prefix::Prefix,
        subnet::{self, block_count},
    },
};

/// Reverse zone names covering `prefix`, lowest network first.
pub fn zones(
    prefix: &Prefix,
    max_blocks: u128,
) -> Result<impl Iterator<Item = String> + use<>, PrefixError> {
    Ok(subnet::split(prefix, max_blocks)?.map(|network| reverse_label(&network)))
}

pub fn run(args: &GenerateArgs) -> Result<()> {
    run_with_output(args, io::stdout().lock())
}

fn run_with_output<W: Write>(args: &GenerateArgs, out: W) -> Result<()> {
    let prefix: Prefix = args.subnet.parse()?;
    let family = prefix.family();
    let boundary = family.split_boundary();

    if args.verbose {
        if prefix.prefix_len() > boundary {
            log_warn!(format!(
                "{prefix} is narrower than /{boundary}, using its enclosing zone"
            ));
        }
        log_info!(format!(
            "{prefix} covers {} {family} /{boundary} zone(s)",
            block_count(&prefix)
        ));
    }

    let labels = zones(&prefix, args.max_blocks)?;

    let Some(json_file) = &args.json else {
        let written = write_labels(out, labels).context("Failed to write zones to stdout")?;
        if args.verbose {
            log_success!(format!("Printed {written} zone(s)"));
        }
        return Ok(());
    };

    let zone_names: Vec<String> = labels.collect();
    if !args.quiet {
        write_labels(out, &zone_names).context("Failed to write zones to stdout")?;
    }
    let output = ZoneOutput::new(prefix.to_string(), family, zone_names);
    let written_file = output.write_to_file(json_file)?;
    log_success!(format!("JSON output written to: {written_file}"));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::subnet::DEFAULT_MAX_BLOCKS;

    const REV_192_168_0: &str = "0.168.192.in-addr.arpa.";
    const REV_192_168_1: &str = "1.168.192.in-addr.arpa.";
    const REV_IPV6_1234: &str = "4.3.2.1.d.c.b.a.8.b.d.0.1.0.0.2.in-addr.arpa.";
    const REV_IPV6_1235: &str = "5.3.2.1.d.c.b.a.8.b.d.0.1.0.0.2.in-addr.arpa.";

    fn generate(subnet: &str, max_blocks: u128) -> Result<Vec<String>, PrefixError> {
        let prefix: Prefix = subnet.parse()?;
        Ok(zones(&prefix, max_blocks)?.collect())
    }

    fn zone_list(subnet: &str) -> Vec<String> {
        generate(subnet, DEFAULT_MAX_BLOCKS).unwrap()
    }

    fn args(subnet: &str) -> GenerateArgs {
        GenerateArgs {
            subnet: subnet.to_string(),
            max_blocks: DEFAULT_MAX_BLOCKS,
            json: None,
            quiet: false,
            verbose: false,
        }
    }

    fn run_to_string(args: &GenerateArgs) -> Result<String> {
        let mut buf = Vec::new();
        run_with_output(args, &mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    #[test]
    fn ipv4_zones() {
        assert_eq!(zone_list("192.168.0.1/24"), vec![REV_192_168_0]);
        assert_eq!(zone_list("192.168.0.1/23"), vec![REV_192_168_0, REV_192_168_1]);
        assert_eq!(zone_list("192.168.0.1/28"), vec![REV_192_168_0]);
    }

    #[test]
    fn ipv4_slash_20_covers_sixteen_zones() {
        let got = zone_list("192.168.0.99/20");
        let expected: Vec<String> = (0..16)
            .map(|third| format!("{third}.168.192.in-addr.arpa."))
            .collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn ipv6_zones() {
        assert_eq!(zone_list("2001:db8:abcd:1234::1/128"), vec![REV_IPV6_1234]);
        assert_eq!(zone_list("2001:db8:abcd:1234::1/64"), vec![REV_IPV6_1234]);
        assert_eq!(
            zone_list("2001:db8:abcd:1234::1/63"),
            vec![REV_IPV6_1234, REV_IPV6_1235]
        );
    }

    #[test]
    fn bare_addresses_need_a_mask() {
        for input in ["192.168.0.99", "2001:db8:abcd:1234::1", "0.0.0.0", "::"] {
            assert!(matches!(
                generate(input, DEFAULT_MAX_BLOCKS),
                Err(PrefixError::MissingPrefixLength { .. })
            ));
        }
    }

    #[test]
    fn malformed_inputs_fail() {
        for input in ["", "2001:db8:abcd:1234::1/", "not-an-ip/24"] {
            assert!(matches!(
                generate(input, DEFAULT_MAX_BLOCKS),
                Err(PrefixError::InvalidInput { .. })
            ));
        }
    }

    #[test]
    fn limit_is_enforced() {
        assert_eq!(
            generate("10.0.0.0/8", 1024).unwrap_err(),
            PrefixError::TooManyBlocks {
                count: 65536,
                limit: 1024
            }
        );
        assert_eq!(generate("10.0.0.0/14", 1024).unwrap().len(), 1024);
    }

    #[test]
    fn run_prints_one_zone_per_line() {
        assert_eq!(
            run_to_string(&args("192.168.0.1/23")).unwrap(),
            format!("{REV_192_168_0}\n{REV_192_168_1}\n")
        );
        assert_eq!(
            run_to_string(&args("2001:db8:abcd:1234::1/63")).unwrap(),
            format!("{REV_IPV6_1234}\n{REV_IPV6_1235}\n")
        );
    }

    #[test]
    fn run_reports_prefix_errors() {
        let err = run_to_string(&args("192.168.0.99")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PrefixError>(),
            Some(PrefixError::MissingPrefixLength { .. })
        ));

        let mut limited = args("10.0.0.0/8");
        limited.max_blocks = 16;
        let err = run_to_string(&limited).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PrefixError>(),
            Some(PrefixError::TooManyBlocks { .. })
        ));
    }

    #[test]
    fn quiet_run_only_writes_json() {
        let base = std::env::temp_dir().join(format!("in-addr-run-{}", std::process::id()));
        let mut quiet = args("192.168.0.1/23");
        quiet.json = Some(base.to_str().unwrap().to_string());
        quiet.quiet = true;

        assert_eq!(run_to_string(&quiet).unwrap(), "");

        let written = format!("{}.json", base.to_str().unwrap());
        let contents = std::fs::read_to_string(&written).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(value["zones"][0], REV_192_168_0);
        std::fs::remove_file(written).unwrap();
    }
}
