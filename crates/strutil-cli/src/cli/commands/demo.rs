//! Demo command: the example calls the utilities were written for.

use anyhow::Result;
use strutil_core::query::{extract, extract_with, ExtractOptions};
use strutil_core::thousands;

const DEMO_URL: &str = "http://localhost:8080/bjsjjOa/#/result/maintainResults/transfer?projectId=c57d8b4ca8ab45aa9c3a298514997a52&pName=%E4%BA%AC%E6%B4%A5%E5%86%80%E5%AE%A1%E8%AE%A1%E6%9C%BA%E5%85%B3%E5%8D%8F%E5%90%8C%E5%AE%A1%E8%AE%A1&projectListId=2c0ba64b62024ea59471279319c3841f";

const DEMO_DIGITS: &str = "100000";

/// Result lines printed by `strutil demo`.
fn demo_lines() -> Result<Vec<String>> {
    Ok(vec![
        extract(DEMO_URL, "projectId"),
        extract_with(DEMO_URL, "pName", &ExtractOptions::decoded())?,
        thousands::format(DEMO_DIGITS),
    ])
}

pub fn run_demo() -> Result<()> {
    for line in demo_lines()? {
        println!("{}", line);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_prints_raw_id_decoded_name_and_grouped_number() {
        let lines = demo_lines().unwrap();
        assert_eq!(
            lines,
            vec![
                "c57d8b4ca8ab45aa9c3a298514997a52".to_string(),
                "京津冀审计机关协同审计".to_string(),
                "100,000".to_string(),
            ]
        );
    }
}
