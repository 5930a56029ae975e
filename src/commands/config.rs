use anyhow::Error;

use crate::args::ConfigSubCommand;
use crate::repos::config::{get_config_value, set_config_value};

pub fn run(cmd: &ConfigSubCommand) -> Result<(), Error> {
    if let Some(set) = &cmd.set {
        let (key, value) = parse_set_arg(set)?;
        set_config_value(key, value)?;
        println!("{} updated", key);
    }
    if let Some(key) = &cmd.get {
        match get_config_value(key)? {
            Some(value) => println!("{}", value),
            None => println!("{} is not set", key),
        }
    }
    Ok(())
}

fn parse_set_arg(arg: &str) -> Result<(&str, &str), Error> {
    match arg.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key, value)),
        _ => Err(Error::msg(
            "Expected key=value, e.g. `tinystep config --set model=deepseek-chat`",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_set_arg() {
        assert_eq!(
            parse_set_arg("model=deepseek-chat").unwrap(),
            ("model", "deepseek-chat")
        );
    }

    #[test]
    fn test_parse_set_arg_keeps_equals_in_value() {
        assert_eq!(parse_set_arg("api_key=a=b").unwrap(), ("api_key", "a=b"));
    }

    #[test]
    fn test_parse_set_arg_rejects_bad_input() {
        assert!(parse_set_arg("no-equals-sign").is_err());
        assert!(parse_set_arg("=value").is_err());
    }
}
