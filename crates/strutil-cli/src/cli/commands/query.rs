//! Query command: print one query parameter.

use anyhow::{Context, Result};
use strutil_core::config::StrutilConfig;
use strutil_core::query::{extract_with, ExtractOptions};

/// `--decode` and `--raw` win over `decode_by_default`.
pub fn decode_requested(decode: bool, raw: bool, cfg: &StrutilConfig) -> bool {
    decode || (cfg.decode_by_default && !raw)
}

fn query_value(url: &str, key: &str, decode: bool) -> Result<String> {
    extract_with(url, key, &ExtractOptions { decode })
        .with_context(|| format!("decode value of {}", key))
}

pub fn run_query(url: &str, key: &str, decode: bool) -> Result<()> {
    tracing::info!("query key={} decode={}", key, decode);
    println!("{}", query_value(url, key, decode)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(decode_by_default: bool) -> StrutilConfig {
        StrutilConfig {
            decode_by_default,
            ..StrutilConfig::default()
        }
    }

    #[test]
    fn decode_follows_config_without_flags() {
        assert!(!decode_requested(false, false, &cfg(false)));
        assert!(decode_requested(false, false, &cfg(true)));
    }

    #[test]
    fn decode_flag_overrides_config() {
        assert!(decode_requested(true, false, &cfg(false)));
        assert!(decode_requested(true, false, &cfg(true)));
    }

    #[test]
    fn raw_flag_overrides_config() {
        assert!(!decode_requested(false, true, &cfg(true)));
        assert!(!decode_requested(false, true, &cfg(false)));
    }

    #[test]
    fn query_value_raw_and_decoded() {
        let url = "http://h/p?pName=%E4%BA%AC";
        assert_eq!(query_value(url, "pName", false).unwrap(), "%E4%BA%AC");
        assert_eq!(query_value(url, "pName", true).unwrap(), "京");
        assert_eq!(query_value(url, "missing", true).unwrap(), "");
    }

    #[test]
    fn query_value_decode_error_names_key() {
        let err = query_value("http://h/p?v=%zz", "v", true).unwrap_err();
        let msg = format!("{:#}", err);
        assert!(msg.contains("decode value of v"));
        assert!(msg.contains("malformed percent escape at byte 0"));
    }
}
